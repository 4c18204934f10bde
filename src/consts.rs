// src/consts.rs
//! Shared constants: envelope layout, limits and defaults

/// Magic prefix of the OpenSSL salted envelope
pub const SALTED_MAGIC: &[u8; 8] = b"Salted__";

/// Salt length inside the envelope
pub const SALT_LEN: usize = 8;

/// Largest file the hash view will read (~50 MB)
pub const DEFAULT_MAX_FILE_BYTES: u64 = 50_000_000;

/// Text files with this many chars or more are not hashed on load
pub const DEFAULT_AUTO_HASH_TEXT_CHARS: usize = 10_000_000;

/// Default RSA modulus size
pub const DEFAULT_RSA_KEY_BITS: usize = 2048;

pub const MIN_RSA_KEY_BITS: usize = 1024;
pub const MAX_RSA_KEY_BITS: usize = 4096;

/// Config file looked up when `CONFIG_ENV_VAR` is unset
pub const DEFAULT_CONFIG_PATH: &str = "cryptovault.toml";
pub const CONFIG_ENV_VAR: &str = "CRYPTOVAULT_CONFIG";
