// src/dispatch.rs
//! Operation dispatcher: one request in, one result out
//!
//! Requests are validated before anything is invoked: an empty payload or a
//! missing key never reaches the crypto layer. Every failure is folded into
//! an [`OperationResult`] so callers only ever display.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::aliases::Passphrase;
use crate::crypto::{
    decrypt_text, decrypt_with_private_key, digest_hex, encrypt_text, encrypt_with_public_key,
};
use crate::enums::{Algorithm, DigestAlgorithm, Mode, SymmetricAlgorithm};
use crate::error::{CoreError, ErrorKind, Result, ValidationError};

/// Input to an operation: typed text or raw file bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Payload {
    Text(String),
    Bytes(Vec<u8>),
}

impl Payload {
    pub fn is_empty(&self) -> bool {
        match self {
            Payload::Text(text) => text.is_empty(),
            Payload::Bytes(bytes) => bytes.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Text(text) => text.as_bytes(),
            Payload::Bytes(bytes) => bytes,
        }
    }
}

/// One user action, created per click and dropped after dispatch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationRequest {
    pub mode: Mode,
    pub algorithm: Algorithm,
    pub payload: Payload,
    #[serde(skip_serializing)]
    pub key: Option<String>,
}

impl OperationRequest {
    pub fn symmetric(
        mode: Mode,
        algorithm: SymmetricAlgorithm,
        text: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            mode,
            algorithm: Algorithm::Symmetric(algorithm),
            payload: Payload::Text(text.into()),
            key: Some(key.into()),
        }
    }

    pub fn hash_text(algorithm: DigestAlgorithm, text: impl Into<String>) -> Self {
        Self {
            mode: Mode::Hash,
            algorithm: Algorithm::Digest(algorithm),
            payload: Payload::Text(text.into()),
            key: None,
        }
    }

    pub fn hash_bytes(algorithm: DigestAlgorithm, bytes: Vec<u8>) -> Self {
        Self {
            mode: Mode::Hash,
            algorithm: Algorithm::Digest(algorithm),
            payload: Payload::Bytes(bytes),
            key: None,
        }
    }

    pub fn rsa_encrypt(public_pem: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            mode: Mode::Encrypt,
            algorithm: Algorithm::Rsa,
            payload: Payload::Text(text.into()),
            key: Some(public_pem.into()),
        }
    }

    pub fn rsa_decrypt(private_pem: impl Into<String>, ciphertext: impl Into<String>) -> Self {
        Self {
            mode: Mode::Decrypt,
            algorithm: Algorithm::Rsa,
            payload: Payload::Text(ciphertext.into()),
            key: Some(private_pem.into()),
        }
    }

    /// Check required fields; nothing is invoked
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let unsupported = || ValidationError::Unsupported {
            algorithm: self.algorithm.to_string(),
            mode: self.mode,
        };

        match (self.mode, self.algorithm) {
            (Mode::Hash, Algorithm::Digest(_)) => {}
            (Mode::Hash, _) | (_, Algorithm::Digest(_)) => return Err(unsupported()),
            _ => {}
        }

        if self.payload.is_empty() {
            return Err(ValidationError::MissingPayload(self.mode));
        }

        if self.mode == Mode::Hash {
            return Ok(());
        }

        if matches!(self.payload, Payload::Bytes(_)) {
            return Err(ValidationError::BinaryPayload);
        }

        let has_key = self.key.as_deref().is_some_and(|k| !k.is_empty());
        if has_key {
            return Ok(());
        }

        Err(match (self.algorithm, self.mode) {
            (Algorithm::Rsa, Mode::Encrypt) => ValidationError::MissingPublicKey,
            (Algorithm::Rsa, _) => ValidationError::MissingPrivateKey,
            (_, Mode::Encrypt) => ValidationError::MissingEncryptionKey,
            _ => ValidationError::MissingDecryptionKey,
        })
    }
}

/// Outcome of one operation, held only for display
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OperationResult {
    pub output: String,
    pub error: Option<String>,
}

impl OperationResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            output: String::new(),
            error: Some(message.into()),
        }
    }

    /// Fold an error into a user-facing message for the given mode
    pub fn from_error(mode: Mode, err: &CoreError) -> Self {
        if err.kind() == ErrorKind::Validation {
            return Self::failure(err.to_string());
        }
        let prefix = match mode {
            Mode::Encrypt => "Encryption error",
            Mode::Decrypt => "Decryption error",
            Mode::Hash => "Error computing hash",
        };
        Self::failure(format!("{prefix}: {err}"))
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Validate, then run the single library call the request names
pub fn execute(request: &OperationRequest) -> Result<String> {
    request.validate()?;
    debug!(
        mode = %request.mode,
        algorithm = %request.algorithm,
        len = request.payload.len(),
        "dispatching"
    );

    let key = request.key.as_deref().unwrap_or_default();
    match (request.mode, request.algorithm, &request.payload) {
        (Mode::Hash, Algorithm::Digest(alg), payload) => Ok(digest_hex(alg, payload.as_bytes())),
        (Mode::Encrypt, Algorithm::Symmetric(alg), Payload::Text(text)) => {
            encrypt_text(alg, text, &Passphrase::new(key.to_owned()))
        }
        (Mode::Decrypt, Algorithm::Symmetric(alg), Payload::Text(text)) => {
            decrypt_text(alg, text, &Passphrase::new(key.to_owned()))
        }
        (Mode::Encrypt, Algorithm::Rsa, Payload::Text(text)) => encrypt_with_public_key(key, text),
        (Mode::Decrypt, Algorithm::Rsa, Payload::Text(text)) => {
            decrypt_with_private_key(key, text)
        }
        // validate() has already rejected every other combination
        _ => Err(ValidationError::Unsupported {
            algorithm: request.algorithm.to_string(),
            mode: request.mode,
        }
        .into()),
    }
}

/// Run a request and fold the outcome into something displayable
pub fn dispatch(request: &OperationRequest) -> OperationResult {
    match execute(request) {
        Ok(output) => OperationResult::success(output),
        Err(err) => {
            warn!(mode = %request.mode, algorithm = %request.algorithm, %err, "operation failed");
            OperationResult::from_error(request.mode, &err)
        }
    }
}
