// src/crypto/rsa.rs
//! RSA key pairs and PKCS#1 v1.5 encryption
//!
//! Keys travel as PEM text so they can be pasted between fields: the public
//! half as SPKI (`BEGIN PUBLIC KEY`), the private half as PKCS#1
//! (`BEGIN RSA PRIVATE KEY`). Ciphertext travels as Base64.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::rand_core::OsRng;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use tracing::info;

use crate::aliases::PrivateKeyPem;
use crate::consts::{MAX_RSA_KEY_BITS, MIN_RSA_KEY_BITS};
use crate::error::{CoreError, Result, ValidationError};

/// A freshly generated key pair in PEM form
pub struct RsaKeyPair {
    public_pem: String,
    private_pem: PrivateKeyPem,
    bits: usize,
}

impl RsaKeyPair {
    pub fn public_pem(&self) -> &str {
        &self.public_pem
    }

    pub fn private_pem(&self) -> &str {
        self.private_pem.expose_secret()
    }

    pub fn bits(&self) -> usize {
        self.bits
    }
}

impl fmt::Debug for RsaKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaKeyPair")
            .field("bits", &self.bits)
            .field("public_pem", &self.public_pem)
            .field("private_pem", &"[REDACTED]")
            .finish()
    }
}

pub fn generate_key_pair(bits: usize) -> Result<RsaKeyPair> {
    if !(MIN_RSA_KEY_BITS..=MAX_RSA_KEY_BITS).contains(&bits) {
        return Err(ValidationError::KeySize {
            bits,
            min: MIN_RSA_KEY_BITS,
            max: MAX_RSA_KEY_BITS,
        }
        .into());
    }

    let mut rng = OsRng;
    let private_key = RsaPrivateKey::new(&mut rng, bits)
        .map_err(|e| CoreError::KeyGeneration(e.to_string()))?;
    let public_key = RsaPublicKey::from(&private_key);

    let public_pem = public_key
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| CoreError::KeyGeneration(format!("cannot export public key: {e}")))?;
    let private_pem = private_key
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(|e| CoreError::KeyGeneration(format!("cannot export private key: {e}")))?;

    info!(bits, "generated RSA key pair");
    Ok(RsaKeyPair {
        public_pem,
        private_pem: PrivateKeyPem::new(private_pem.to_string()),
        bits,
    })
}

/// Encrypt UTF-8 text for the holder of the private key; returns Base64
pub fn encrypt_with_public_key(public_pem: &str, plaintext: &str) -> Result<String> {
    let public_key = parse_public_key(public_pem)?;
    let mut rng = OsRng;
    let ciphertext = public_key.encrypt(&mut rng, Pkcs1v15Encrypt, plaintext.as_bytes())?;
    Ok(STANDARD.encode(ciphertext))
}

pub fn decrypt_with_private_key(private_pem: &str, ciphertext: &str) -> Result<String> {
    let private_key = parse_private_key(private_pem)?;
    let compact: String = ciphertext.chars().filter(|c| !c.is_whitespace()).collect();
    let raw = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| CoreError::MalformedCiphertext(format!("not valid Base64 ({e})")))?;

    let plaintext = private_key.decrypt(Pkcs1v15Encrypt, &raw)?;
    String::from_utf8(plaintext).map_err(|_| CoreError::WrongKeyOrCorrupted)
}

/// Accepts SPKI or PKCS#1 PEM
pub fn parse_public_key(pem: &str) -> Result<RsaPublicKey> {
    let pem = pem.trim();
    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|e| CoreError::InvalidKey(format!("cannot parse public key ({e})")))
}

/// Accepts PKCS#1 or PKCS#8 PEM
pub fn parse_private_key(pem: &str) -> Result<RsaPrivateKey> {
    let pem = pem.trim();
    RsaPrivateKey::from_pkcs1_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs8_pem(pem))
        .map_err(|e| CoreError::InvalidKey(format!("cannot parse private key ({e})")))
}
