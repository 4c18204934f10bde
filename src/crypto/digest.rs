// src/crypto/digest.rs
//! Single-call digests, lowercase hex out

use md5::Md5;
use ripemd::Ripemd160;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use sha3::{Keccak512, Sha3_512};

use crate::enums::DigestAlgorithm;

pub fn digest_bytes(algorithm: DigestAlgorithm, data: &[u8]) -> Vec<u8> {
    match algorithm {
        DigestAlgorithm::Md5 => Md5::digest(data).to_vec(),
        DigestAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
        DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        DigestAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        DigestAlgorithm::Sha3 => Sha3_512::digest(data).to_vec(),
        DigestAlgorithm::Ripemd160 => Ripemd160::digest(data).to_vec(),
        DigestAlgorithm::Keccak512 => Keccak512::digest(data).to_vec(),
    }
}

#[inline]
pub fn digest_hex(algorithm: DigestAlgorithm, data: &[u8]) -> String {
    hex::encode(digest_bytes(algorithm, data))
}
