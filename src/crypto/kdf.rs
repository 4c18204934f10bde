// src/crypto/kdf.rs
//! OpenSSL `EVP_BytesToKey` (MD5, one iteration)
//!
//! Same derivation as `openssl enc -md md5` and the passphrase mode of
//! most JavaScript cipher libraries. Not a password hash.

use md5::{Digest, Md5};

use crate::aliases::KeyMaterial;

/// Derive `key_len` key bytes and `iv_len` IV bytes from a passphrase and salt.
///
/// `D1 = MD5(pass ‖ salt)`, `Dn = MD5(Dn-1 ‖ pass ‖ salt)`; the blocks are
/// concatenated and split key first, IV second.
pub fn evp_bytes_to_key(
    passphrase: &[u8],
    salt: &[u8],
    key_len: usize,
    iv_len: usize,
) -> (KeyMaterial, KeyMaterial) {
    let needed = key_len + iv_len;
    let mut derived = Vec::with_capacity(needed + 16);
    let mut block: Vec<u8> = Vec::new();

    while derived.len() < needed {
        let mut hasher = Md5::new();
        hasher.update(&block);
        hasher.update(passphrase);
        hasher.update(salt);
        block = hasher.finalize().to_vec();
        derived.extend_from_slice(&block);
    }

    let iv = derived[key_len..needed].to_vec();
    derived.truncate(key_len);
    (KeyMaterial::new(derived), KeyMaterial::new(iv))
}
