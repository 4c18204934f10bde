// src/key_ops.rs
//! Key generation utilities
//!
//! Random passphrases for the symmetric playground and RSA key pairs sized
//! from config.

use crate::aliases::{Passphrase, PassphraseSeed16, SecureConversionsExt, SecureRandomExt};
use crate::crypto::rsa::{generate_key_pair, RsaKeyPair};
use crate::error::Result;

/// Generate a random passphrase: 16 random bytes as 32 lowercase hex chars
#[inline]
pub fn generate_passphrase() -> Passphrase {
    Passphrase::new(PassphraseSeed16::random().expose_secret().to_hex())
}

/// Generate an RSA key pair with the configured modulus size
pub fn generate_default_key_pair() -> Result<RsaKeyPair> {
    generate_key_pair(crate::config::load().rsa.key_bits)
}
