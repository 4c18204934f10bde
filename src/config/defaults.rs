// src/config/defaults.rs
use crate::config::app::{Defaults, Limits, RsaSettings};
use crate::consts::{DEFAULT_AUTO_HASH_TEXT_CHARS, DEFAULT_MAX_FILE_BYTES, DEFAULT_RSA_KEY_BITS};
use crate::enums::{DigestAlgorithm, SymmetricAlgorithm};

pub fn default_max_file_bytes() -> u64 {
    DEFAULT_MAX_FILE_BYTES
}

pub fn default_auto_hash_text_chars() -> usize {
    DEFAULT_AUTO_HASH_TEXT_CHARS
}

pub fn default_key_bits() -> usize {
    DEFAULT_RSA_KEY_BITS
}

pub fn default_limits() -> Limits {
    Limits {
        max_file_bytes: default_max_file_bytes(),
        auto_hash_text_chars: default_auto_hash_text_chars(),
    }
}

pub fn default_rsa() -> RsaSettings {
    RsaSettings {
        key_bits: default_key_bits(),
    }
}

pub fn default_defaults() -> Defaults {
    Defaults {
        symmetric_algorithm: SymmetricAlgorithm::Aes,
        digest_algorithm: DigestAlgorithm::Sha256,
    }
}
