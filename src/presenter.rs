// src/presenter.rs
//! Result presenter: plain text, JSON and clipboard copy-out

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::dispatch::OperationResult;
use crate::error::Result;

/// Render a result under a heading (`"Result:"`, `"SHA256:"`, ...).
///
/// Errors are rendered alone; there is no output to show next to them.
pub fn render(title: &str, result: &OperationResult) -> String {
    match &result.error {
        Some(message) => format!("Error: {message}"),
        None => format!("{title}\n{}", result.output),
    }
}

pub fn to_json(result: &OperationResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// OSC 52 escape sequence that asks the terminal to put `text` on the
/// system clipboard
pub fn clipboard_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Copy `text` out through the terminal
pub fn copy_to_clipboard<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(clipboard_sequence(text).as_bytes())?;
    out.flush()
}
