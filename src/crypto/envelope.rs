// src/crypto/envelope.rs
//! OpenSSL salted envelope: `Base64("Salted__" ‖ salt ‖ ciphertext)`

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::consts::{SALTED_MAGIC, SALT_LEN};
use crate::error::{CoreError, Result};

/// Wrap raw ciphertext and its salt into the printable envelope
pub fn seal(salt: &[u8; SALT_LEN], ciphertext: &[u8]) -> String {
    let mut raw = Vec::with_capacity(SALTED_MAGIC.len() + SALT_LEN + ciphertext.len());
    raw.extend_from_slice(SALTED_MAGIC);
    raw.extend_from_slice(salt);
    raw.extend_from_slice(ciphertext);
    STANDARD.encode(raw)
}

/// Split an envelope back into salt and raw ciphertext.
///
/// Whitespace (line wrapping from copy/paste) is ignored.
pub fn open(text: &str) -> Result<([u8; SALT_LEN], Vec<u8>)> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let raw = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| CoreError::MalformedCiphertext(format!("not valid Base64 ({e})")))?;

    let header_len = SALTED_MAGIC.len() + SALT_LEN;
    if raw.len() < header_len || &raw[..SALTED_MAGIC.len()] != SALTED_MAGIC {
        return Err(CoreError::MalformedCiphertext(
            "missing \"Salted__\" header".into(),
        ));
    }

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&raw[SALTED_MAGIC.len()..header_len]);
    Ok((salt, raw[header_len..].to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sealed_text_starts_with_salted_prefix_in_base64() {
        // "Salted__" always encodes to "U2FsdGVkX1"
        let sealed = seal(&[0u8; SALT_LEN], b"abc");
        assert!(sealed.starts_with("U2FsdGVkX1"));
    }

    #[test]
    fn open_ignores_line_breaks() {
        let salt = [9u8; SALT_LEN];
        let sealed = seal(&salt, &[7u8; 40]);
        let wrapped = format!("{}\n{}\n", &sealed[..20], &sealed[20..]);

        let (got_salt, body) = open(&wrapped).unwrap();
        assert_eq!(got_salt, salt);
        assert_eq!(body, vec![7u8; 40]);
    }

    #[test]
    fn open_rejects_missing_header() {
        let plain = STANDARD.encode(b"no header here at all");
        assert!(matches!(
            open(&plain),
            Err(CoreError::MalformedCiphertext(_))
        ));
    }

    #[test]
    fn open_rejects_garbage() {
        assert!(matches!(
            open("%%% not base64 %%%"),
            Err(CoreError::MalformedCiphertext(_))
        ));
    }
}
