// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use crate::enums::{DigestAlgorithm, SymmetricAlgorithm};
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_limits")]
    pub limits: Limits,
    #[serde(default = "default_rsa")]
    pub rsa: RsaSettings,
    #[serde(default = "default_defaults")]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Limits {
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
    #[serde(default = "default_auto_hash_text_chars")]
    pub auto_hash_text_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RsaSettings {
    #[serde(default = "default_key_bits")]
    pub key_bits: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    pub symmetric_algorithm: SymmetricAlgorithm,
    #[serde(default)]
    pub digest_algorithm: DigestAlgorithm,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            limits: default_limits(),
            rsa: default_rsa(),
            defaults: default_defaults(),
        }
    }
}

impl Config {
    /// Parse a TOML document; missing tables fall back to built-in defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at first use; falls back to defaults if missing or broken
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&config_path).exists() {
            debug!("{config_path} not found, using built-in defaults");
            return Config::default();
        }

        match Config::from_path(&config_path) {
            Ok(conf) => {
                debug!("loaded config from {config_path}");
                conf
            }
            Err(CoreError::Config(reason)) => {
                warn!("invalid TOML in {config_path}: {reason}; using built-in defaults");
                Config::default()
            }
            Err(err) => {
                warn!("cannot read {config_path}: {err}; using built-in defaults");
                Config::default()
            }
        }
    })
}
