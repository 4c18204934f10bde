// src/lib.rs
//! cryptovault: a cryptography playground
//!
//! Features:
//! - Passphrase ciphers (AES, DES, Triple DES, Rabbit, RC4) in the OpenSSL salted format
//! - RSA key pairs with PKCS#1 v1.5 encryption
//! - MD5, SHA-1, SHA-256, SHA-512, SHA-3 and RIPEMD-160 digests of text or files
//! - One dispatcher between form state and the primitives

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod dispatch;
pub mod enums;
pub mod error;
pub mod file_ops;
pub mod key_ops;
pub mod presenter;
pub mod views;

pub use aliases::{Passphrase, SecureConversionsExt, SecureRandomExt};
pub use config::load as load_config;
pub use dispatch::{dispatch, OperationRequest, OperationResult, Payload};
pub use enums::{Algorithm, DigestAlgorithm, Mode, SymmetricAlgorithm};
pub use error::{CoreError, ErrorKind, Result as CoreResult, ValidationError};
pub use views::{Tab, Workbench};
