// src/views/hash.rs
//! Hash calculator form: typed text or a loaded file

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

use tracing::debug;

use crate::config::Limits;
use crate::crypto::digest_hex;
use crate::dispatch::{dispatch, OperationRequest, OperationResult};
use crate::enums::DigestAlgorithm;
use crate::error::{CoreError, Result};
use crate::file_ops::{read_payload_then, FileContent, FilePayload};

/// A file read that is still running on the helper thread
#[derive(Debug)]
pub struct PendingLoad {
    file_name: String,
    receiver: Receiver<Result<FilePayload>>,
}

impl PendingLoad {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

#[derive(Debug)]
pub struct HashView {
    pub algorithm: DigestAlgorithm,
    pub text: String,
    hash: String,
    error: Option<String>,
    processing: bool,
    file_name: Option<String>,
    max_file_bytes: u64,
    auto_hash_text_chars: usize,
}

impl HashView {
    pub fn new(algorithm: DigestAlgorithm, limits: &Limits) -> Self {
        Self {
            algorithm,
            text: String::new(),
            hash: String::new(),
            error: None,
            processing: false,
            file_name: None,
            max_file_bytes: limits.max_file_bytes,
            auto_hash_text_chars: limits.auto_hash_text_chars,
        }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Heading shown above the digest, e.g. `SHA256:`
    pub fn title(&self) -> String {
        format!("{}:", self.algorithm.id().to_ascii_uppercase())
    }

    /// Hash the text field with the selected algorithm
    pub fn calculate(&mut self) -> OperationResult {
        let request = OperationRequest::hash_text(self.algorithm, self.text.clone());
        let outcome = dispatch(&request);
        match &outcome.error {
            Some(message) => self.error = Some(message.clone()),
            None => {
                self.hash = outcome.output.clone();
                self.error = None;
            }
        }
        outcome
    }

    /// Start reading `path` in the background and mark the view busy
    pub fn begin_file_load(&mut self, path: PathBuf) -> PendingLoad {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        self.processing = true;
        self.error = None;
        self.file_name = Some(file_name.clone());

        let (tx, receiver) = mpsc::channel();
        read_payload_then(path, self.max_file_bytes, move |outcome| {
            // the view may have been dropped; nobody left to tell
            let _ = tx.send(outcome);
        });

        PendingLoad {
            file_name,
            receiver,
        }
    }

    /// Block until the background read reports, then apply it
    pub fn finish_file_load(&mut self, pending: PendingLoad) {
        let outcome = pending.receiver.recv().unwrap_or_else(|_| {
            Err(CoreError::Io(std::io::Error::other(
                "file reader stopped without reporting",
            )))
        });
        self.apply_file(outcome);
    }

    /// Load a file and wait for it
    pub fn load_file(&mut self, path: PathBuf) {
        let pending = self.begin_file_load(path);
        self.finish_file_load(pending);
    }

    /// Apply the outcome of a file read.
    ///
    /// Binary files are always hashed right away and shown as a placeholder.
    /// Text files go into the text field and are hashed only when shorter
    /// than the auto-hash threshold.
    pub fn apply_file(&mut self, outcome: Result<FilePayload>) {
        self.processing = false;

        let payload = match outcome {
            Ok(payload) => payload,
            Err(CoreError::FileTooLarge { limit, .. }) => {
                self.error = Some(format!(
                    "File is too large (limit: {}MB)",
                    limit / 1_000_000
                ));
                return;
            }
            Err(err) => {
                self.error = Some(format!("Error reading file: {err}"));
                return;
            }
        };

        self.file_name = Some(payload.file_name.clone());
        self.error = None;
        match payload.content {
            FileContent::Text(text) => {
                let auto = text.chars().count() < self.auto_hash_text_chars;
                if auto {
                    self.hash = digest_hex(self.algorithm, text.as_bytes());
                }
                debug!(file = %payload.file_name, auto, "text file applied");
                self.text = text;
            }
            FileContent::Binary(bytes) => {
                self.hash = digest_hex(self.algorithm, &bytes);
                self.text = format!("[Binary content of file: {}]", payload.file_name);
            }
        }
    }
}
