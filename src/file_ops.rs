// src/file_ops.rs
//! File ingestion for the hash view and result export
//!
//! Files are read fully into memory under a size ceiling; anything larger
//! is rejected before a single byte is read. Reading can run on a helper
//! thread that reports back through a one-shot callback.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use tracing::{info, warn};

use crate::error::{CoreError, Result};

/// What a loaded file turned out to contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary(Vec<u8>),
}

/// A file read fully into memory
#[derive(Debug, Clone)]
pub struct FilePayload {
    pub file_name: String,
    pub size: u64,
    pub content: FileContent,
}

impl FilePayload {
    /// Bytes to hash, regardless of how the content was classified
    pub fn bytes(&self) -> &[u8] {
        match &self.content {
            FileContent::Text(text) => text.as_bytes(),
            FileContent::Binary(bytes) => bytes,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.content, FileContent::Text(_))
    }
}

/// Read a whole file, refusing anything over `max_bytes`.
///
/// Valid UTF-8 without NUL bytes is classified as text, everything else as
/// binary.
pub fn read_payload<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<FilePayload> {
    let path = path.as_ref();
    let size = fs::metadata(path)?.len();
    if size > max_bytes {
        warn!(path = %path.display(), size, max_bytes, "file rejected: over size ceiling");
        return Err(CoreError::FileTooLarge {
            size,
            limit: max_bytes,
        });
    }

    let bytes = fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let content = if bytes.contains(&0) {
        FileContent::Binary(bytes)
    } else {
        match String::from_utf8(bytes) {
            Ok(text) => FileContent::Text(text),
            Err(e) => FileContent::Binary(e.into_bytes()),
        }
    };

    info!(file = %file_name, size, text = matches!(content, FileContent::Text(_)), "file loaded");
    Ok(FilePayload {
        file_name,
        size,
        content,
    })
}

/// Read on a helper thread; `on_done` fires exactly once with the outcome
pub fn read_payload_then<F>(path: PathBuf, max_bytes: u64, on_done: F) -> JoinHandle<()>
where
    F: FnOnce(Result<FilePayload>) + Send + 'static,
{
    thread::spawn(move || on_done(read_payload(&path, max_bytes)))
}

/// Write a displayed result to disk
pub fn save_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    info!(path = %path.display(), len = content.len(), "result saved");
    Ok(())
}
