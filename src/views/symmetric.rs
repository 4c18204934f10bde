// src/views/symmetric.rs
//! Passphrase cipher form

use std::io::{self, Write};

use crate::dispatch::{dispatch, OperationRequest, OperationResult};
use crate::enums::{Mode, SymmetricAlgorithm};
use crate::key_ops::generate_passphrase;
use crate::presenter::copy_to_clipboard;

pub const COPIED_NOTICE: &str = "Copied to clipboard!";

#[derive(Debug, Default)]
pub struct SymmetricView {
    pub algorithm: SymmetricAlgorithm,
    pub mode: Mode,
    pub text: String,
    pub key: String,
    result: String,
    error: Option<String>,
    notice: Option<String>,
}

impl SymmetricView {
    pub fn new(algorithm: SymmetricAlgorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Pending notice, cleared once read
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn text_label(&self) -> &'static str {
        match self.mode {
            Mode::Decrypt => "Text to decrypt",
            _ => "Text to encrypt",
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self.mode {
            Mode::Decrypt => "Decrypt",
            _ => "Encrypt",
        }
    }

    /// Fill the key field with a fresh random passphrase
    pub fn generate_key(&mut self) {
        self.key = generate_passphrase().expose_secret().clone();
    }

    /// Run the selected cipher over the text field.
    ///
    /// A failure leaves the previous result in place and sets the error.
    pub fn execute(&mut self) -> OperationResult {
        let request = OperationRequest::symmetric(
            self.mode,
            self.algorithm,
            self.text.clone(),
            self.key.clone(),
        );
        let outcome = dispatch(&request);
        match &outcome.error {
            Some(message) => self.error = Some(message.clone()),
            None => {
                self.result = outcome.output.clone();
                self.error = None;
            }
        }
        outcome
    }

    /// Copy the result out; does nothing while the result is empty
    pub fn copy_result<W: Write>(&mut self, out: &mut W) -> io::Result<bool> {
        if self.result.is_empty() {
            return Ok(false);
        }
        copy_to_clipboard(out, &self.result)?;
        self.notice = Some(COPIED_NOTICE.to_owned());
        Ok(true)
    }
}
