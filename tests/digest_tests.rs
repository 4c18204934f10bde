// tests/digest_tests.rs
mod common;

use cryptovault::crypto::{digest_bytes, digest_hex};
use cryptovault::enums::DigestAlgorithm;

#[test]
fn test_known_vectors_hello() {
    common::setup();
    let cases = [
        (DigestAlgorithm::Md5, "5d41402abc4b2a76b9719d911017c592"),
        (DigestAlgorithm::Sha1, "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"),
        (
            DigestAlgorithm::Sha256,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
        ),
        (
            DigestAlgorithm::Sha512,
            "9b71d224bd62f3785d96d46ad3ea3d73319bfbc2890caadae2dff72519673ca72323c3d99ba5c11d7c7acc6e14b8c5da0c4663475c2e5c3adef46f73bcdec043",
        ),
    ];
    for (alg, expected) in cases {
        assert_eq!(digest_hex(alg, b"hello"), expected, "{alg}");
    }
}

#[test]
fn test_known_vectors_empty_and_abc() {
    assert_eq!(digest_hex(DigestAlgorithm::Md5, b""), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(digest_hex(DigestAlgorithm::Sha1, b""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    assert_eq!(
        digest_hex(DigestAlgorithm::Sha256, b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        digest_hex(DigestAlgorithm::Sha3, b""),
        "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26"
    );
    assert_eq!(
        digest_hex(DigestAlgorithm::Ripemd160, b"abc"),
        "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"
    );
}

#[test]
fn test_every_digest_is_deterministic_and_sized() {
    let input = "The quick brown fox jumps over the lazy dog".as_bytes();
    for alg in DigestAlgorithm::ALL {
        let first = digest_bytes(alg, input);
        assert_eq!(first, digest_bytes(alg, input), "{alg}");
        assert_eq!(first.len(), alg.output_len(), "{alg}");
        assert_eq!(digest_hex(alg, input).len(), alg.output_len() * 2);
    }
}

#[test]
fn test_keccak_differs_from_sha3() {
    assert_ne!(
        digest_hex(DigestAlgorithm::Keccak512, b"hello"),
        digest_hex(DigestAlgorithm::Sha3, b"hello")
    );
}

#[test]
fn test_hex_is_lowercase() {
    let hex = digest_hex(DigestAlgorithm::Sha256, b"HELLO");
    assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn test_digest_names_parse() {
    assert_eq!("SHA-256".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha256);
    assert_eq!("sha3-512".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha3);
    assert_eq!("RIPEMD-160".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Ripemd160);
    assert!("crc32".parse::<DigestAlgorithm>().is_err());
    assert_eq!(DigestAlgorithm::default(), DigestAlgorithm::Sha256);
}
