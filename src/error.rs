// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

use crate::enums::Mode;

pub type Result<T> = std::result::Result<T, CoreError>;

/// The three families every failure falls into.
///
/// None of them is fatal: each is rendered as an inline message next to the
/// action that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field was empty; no library call was made.
    Validation,
    /// The wrapped library refused the input or reported a failure.
    Operational,
    /// Reading or writing a file failed, or the file was too large.
    Io,
}

/// Empty-field failures caught before dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", missing_payload_message(.0))]
    MissingPayload(Mode),

    #[error("Please enter an encryption key")]
    MissingEncryptionKey,

    #[error("Please enter a decryption key")]
    MissingDecryptionKey,

    #[error("Please enter or generate a public key")]
    MissingPublicKey,

    #[error("Please enter or generate a private key")]
    MissingPrivateKey,

    #[error("RSA key size must be between {min} and {max} bits, got {bits}")]
    KeySize { bits: usize, min: usize, max: usize },

    #[error("{algorithm} cannot be used to {mode}")]
    Unsupported { algorithm: String, mode: Mode },

    #[error("Binary input can only be hashed")]
    BinaryPayload,
}

fn missing_payload_message(mode: &Mode) -> &'static str {
    match mode {
        Mode::Encrypt => "Please enter text to encrypt",
        Mode::Decrypt => "Please enter text to decrypt",
        Mode::Hash => "Please enter text to hash",
    }
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Encryption(String),

    #[error("The text cannot be decrypted with this key")]
    WrongKeyOrCorrupted,

    #[error("Malformed ciphertext: {0}")]
    MalformedCiphertext(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("{0}")]
    KeyGeneration(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("File is too large ({size} bytes, limit: {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Validation(_) | CoreError::UnknownAlgorithm(_) => ErrorKind::Validation,
            CoreError::Io(_) | CoreError::FileTooLarge { .. } => ErrorKind::Io,
            CoreError::Encryption(_)
            | CoreError::WrongKeyOrCorrupted
            | CoreError::MalformedCiphertext(_)
            | CoreError::InvalidKey(_)
            | CoreError::KeyGeneration(_)
            | CoreError::Config(_)
            | CoreError::Json(_) => ErrorKind::Operational,
        }
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Config(err.to_string())
    }
}

impl From<rsa::Error> for CoreError {
    fn from(err: rsa::Error) -> Self {
        match err {
            rsa::Error::Decryption => CoreError::WrongKeyOrCorrupted,
            other => CoreError::Encryption(other.to_string()),
        }
    }
}
