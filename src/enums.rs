// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: operation mode and the
//! algorithm selectors of each tool.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Encrypt,
    Decrypt,
    Hash,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Encrypt => "encrypt",
            Mode::Decrypt => "decrypt",
            Mode::Hash => "hash",
        })
    }
}

/// Passphrase ciphers offered by the symmetric playground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SymmetricAlgorithm {
    #[default]
    Aes,
    Des,
    TripleDes,
    Rabbit,
    Rc4,
}

impl SymmetricAlgorithm {
    /// Selector order: recommended first, discouraged last
    pub const ALL: [SymmetricAlgorithm; 5] = [
        SymmetricAlgorithm::Aes,
        SymmetricAlgorithm::TripleDes,
        SymmetricAlgorithm::Rabbit,
        SymmetricAlgorithm::Rc4,
        SymmetricAlgorithm::Des,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SymmetricAlgorithm::Aes => "aes",
            SymmetricAlgorithm::Des => "des",
            SymmetricAlgorithm::TripleDes => "tripledes",
            SymmetricAlgorithm::Rabbit => "rabbit",
            SymmetricAlgorithm::Rc4 => "rc4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SymmetricAlgorithm::Aes => "AES (recommended)",
            SymmetricAlgorithm::Des => "DES (discouraged)",
            SymmetricAlgorithm::TripleDes => "Triple DES",
            SymmetricAlgorithm::Rabbit => "Rabbit",
            SymmetricAlgorithm::Rc4 => "RC4",
        }
    }

    /// `(key_len, iv_len)` in bytes
    pub fn key_iv_len(self) -> (usize, usize) {
        match self {
            SymmetricAlgorithm::Aes => (32, 16),
            SymmetricAlgorithm::Des => (8, 8),
            SymmetricAlgorithm::TripleDes => (24, 8),
            SymmetricAlgorithm::Rabbit => (16, 8),
            SymmetricAlgorithm::Rc4 => (32, 0),
        }
    }

    pub fn is_stream(self) -> bool {
        matches!(self, SymmetricAlgorithm::Rabbit | SymmetricAlgorithm::Rc4)
    }
}

impl fmt::Display for SymmetricAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SymmetricAlgorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "aes" => Ok(SymmetricAlgorithm::Aes),
            "des" => Ok(SymmetricAlgorithm::Des),
            "tripledes" | "3des" => Ok(SymmetricAlgorithm::TripleDes),
            "rabbit" => Ok(SymmetricAlgorithm::Rabbit),
            "rc4" => Ok(SymmetricAlgorithm::Rc4),
            _ => Err(CoreError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// Digests offered by the hash calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    #[default]
    Sha256,
    Sha512,
    /// SHA3-512 as standardised in FIPS 202
    Sha3,
    Ripemd160,
    /// Pre-standard Keccak-512, what older JavaScript libraries call "SHA-3"
    Keccak512,
}

impl DigestAlgorithm {
    pub const ALL: [DigestAlgorithm; 7] = [
        DigestAlgorithm::Md5,
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha512,
        DigestAlgorithm::Sha3,
        DigestAlgorithm::Ripemd160,
        DigestAlgorithm::Keccak512,
    ];

    pub fn id(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha512 => "sha512",
            DigestAlgorithm::Sha3 => "sha3",
            DigestAlgorithm::Ripemd160 => "ripemd160",
            DigestAlgorithm::Keccak512 => "keccak512",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "MD5 (not secure)",
            DigestAlgorithm::Sha1 => "SHA-1 (discouraged)",
            DigestAlgorithm::Sha256 => "SHA-256 (recommended)",
            DigestAlgorithm::Sha512 => "SHA-512 (very secure)",
            DigestAlgorithm::Sha3 => "SHA-3 (new generation)",
            DigestAlgorithm::Ripemd160 => "RIPEMD-160",
            DigestAlgorithm::Keccak512 => "Keccak-512 (legacy SHA-3)",
        }
    }

    /// Digest size in bytes
    pub fn output_len(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 16,
            DigestAlgorithm::Sha1 | DigestAlgorithm::Ripemd160 => 20,
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha512 | DigestAlgorithm::Sha3 | DigestAlgorithm::Keccak512 => 64,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "md5" => Ok(DigestAlgorithm::Md5),
            "sha1" => Ok(DigestAlgorithm::Sha1),
            "sha256" => Ok(DigestAlgorithm::Sha256),
            "sha512" => Ok(DigestAlgorithm::Sha512),
            "sha3" | "sha3512" => Ok(DigestAlgorithm::Sha3),
            "ripemd160" => Ok(DigestAlgorithm::Ripemd160),
            "keccak512" | "keccak" => Ok(DigestAlgorithm::Keccak512),
            _ => Err(CoreError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// Algorithm half of an operation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "family", content = "id")]
pub enum Algorithm {
    Symmetric(SymmetricAlgorithm),
    Digest(DigestAlgorithm),
    Rsa,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Symmetric(alg) => alg.fmt(f),
            Algorithm::Digest(alg) => alg.fmt(f),
            Algorithm::Rsa => f.write_str("rsa"),
        }
    }
}

impl From<SymmetricAlgorithm> for Algorithm {
    fn from(alg: SymmetricAlgorithm) -> Self {
        Algorithm::Symmetric(alg)
    }
}

impl From<DigestAlgorithm> for Algorithm {
    fn from(alg: DigestAlgorithm) -> Self {
        Algorithm::Digest(alg)
    }
}
