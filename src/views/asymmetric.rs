// src/views/asymmetric.rs
//! RSA form: generate a pair, then encrypt with one half and decrypt with
//! the other
//!
//! The two key fields are shared by all three sub-tabs, so a freshly
//! generated pair is immediately usable for encryption and decryption.

use std::io::{self, Write};

use crate::crypto::rsa::generate_key_pair;
use crate::dispatch::{dispatch, OperationRequest, OperationResult};
use crate::presenter::copy_to_clipboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AsymmetricTab {
    #[default]
    Generate,
    Encrypt,
    Decrypt,
}

/// Which field a copy button belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    PublicKey,
    PrivateKey,
    EncryptedText,
    DecryptedText,
}

impl CopyTarget {
    fn notice(self) -> &'static str {
        match self {
            CopyTarget::PublicKey => "Public key copied!",
            CopyTarget::PrivateKey => "Private key copied!",
            CopyTarget::EncryptedText => "Encrypted text copied!",
            CopyTarget::DecryptedText => "Decrypted text copied!",
        }
    }
}

#[derive(Debug)]
pub struct AsymmetricView {
    pub tab: AsymmetricTab,
    pub key_bits: usize,
    pub public_key: String,
    pub private_key: String,
    pub plain_text: String,
    pub encrypted_text: String,
    pub decrypted_text: String,
    error: Option<String>,
    notice: Option<String>,
}

impl AsymmetricView {
    pub fn new(key_bits: usize) -> Self {
        Self {
            tab: AsymmetricTab::Generate,
            key_bits,
            public_key: String::new(),
            private_key: String::new(),
            plain_text: String::new(),
            encrypted_text: String::new(),
            decrypted_text: String::new(),
            error: None,
            notice: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Replace both key fields with a new pair of `key_bits` bits
    pub fn generate_key_pair(&mut self) -> bool {
        match generate_key_pair(self.key_bits) {
            Ok(pair) => {
                self.public_key = pair.public_pem().to_owned();
                self.private_key = pair.private_pem().to_owned();
                self.error = None;
                self.notice = Some("Key pair generated successfully".to_owned());
                true
            }
            Err(err) => {
                self.error = Some(format!("Error generating keys: {err}"));
                false
            }
        }
    }

    pub fn encrypt(&mut self) -> OperationResult {
        let request =
            OperationRequest::rsa_encrypt(self.public_key.clone(), self.plain_text.clone());
        let outcome = dispatch(&request);
        self.absorb(&outcome, |view, output| view.encrypted_text = output);
        outcome
    }

    pub fn decrypt(&mut self) -> OperationResult {
        let request =
            OperationRequest::rsa_decrypt(self.private_key.clone(), self.encrypted_text.clone());
        let outcome = dispatch(&request);
        self.absorb(&outcome, |view, output| view.decrypted_text = output);
        outcome
    }

    fn absorb(&mut self, outcome: &OperationResult, store: impl FnOnce(&mut Self, String)) {
        match &outcome.error {
            Some(message) => self.error = Some(message.clone()),
            None => {
                store(self, outcome.output.clone());
                self.error = None;
            }
        }
    }

    pub fn field(&self, target: CopyTarget) -> &str {
        match target {
            CopyTarget::PublicKey => &self.public_key,
            CopyTarget::PrivateKey => &self.private_key,
            CopyTarget::EncryptedText => &self.encrypted_text,
            CopyTarget::DecryptedText => &self.decrypted_text,
        }
    }

    /// Copy one field out; empty fields are skipped
    pub fn copy<W: Write>(&mut self, target: CopyTarget, out: &mut W) -> io::Result<bool> {
        let text = self.field(target);
        if text.is_empty() {
            return Ok(false);
        }
        copy_to_clipboard(out, text)?;
        self.notice = Some(target.notice().to_owned());
        Ok(true)
    }
}
