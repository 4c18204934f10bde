// src/config/mod.rs
//! Configuration system for cryptovault
//!
//! Central, lazy-loaded global config with TOML + env override of the path.

pub use app::{load, Config, Defaults, Limits, RsaSettings};

mod app;
mod defaults;
