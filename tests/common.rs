// tests/common.rs
//! Shared test utilities: logging setup

#![allow(dead_code)]

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a test-friendly subscriber; respects RUST_LOG.
/// Call once at the start of any test that needs logs
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok(); // idempotent
}

/// Force debug-level logging even if RUST_LOG is not set
pub fn setup_debug() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::new("debug"))
        .try_init()
        .ok();
}
