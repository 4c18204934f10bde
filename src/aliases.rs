// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! Key material handed to the crypto layer is wrapped here so it zeroizes
//! on drop. Form fields stay plain `String`s; the wrapping happens at the
//! dispatch boundary.

pub use secure_gate::{
    dynamic_alias, fixed_alias, SecureConversionsExt, SecureRandomExt,
};

// Fixed-size secrets
fixed_alias!(PassphraseSeed16, 16); // random bytes behind a generated passphrase

// Dynamic secrets
dynamic_alias!(Passphrase, String); // symmetric passphrase, used as-is by the KDF
dynamic_alias!(PrivateKeyPem, String); // PKCS#1 PEM of a generated RSA private key
dynamic_alias!(KeyMaterial, Vec<u8>); // derived cipher key or IV
