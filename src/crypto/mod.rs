// src/crypto/mod.rs
//! Pure cryptographic primitives without I/O or form state
//!
//! Thin wrappers over RustCrypto: every cipher, digest and RSA operation
//! here is a single library call plus input/output shaping.

pub mod digest;
pub mod envelope;
pub mod kdf;
pub mod rsa;
pub mod symmetric;

pub use self::digest::{digest_bytes, digest_hex};
pub use self::rsa::{
    decrypt_with_private_key, encrypt_with_public_key, generate_key_pair, RsaKeyPair,
};
pub use self::symmetric::{decrypt_text, encrypt_text};
