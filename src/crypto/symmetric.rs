// src/crypto/symmetric.rs
//! Passphrase ciphers: AES-256-CBC, DES-CBC, 3DES-CBC, Rabbit, RC4
//!
//! Every call draws a fresh 8-byte salt, derives key and IV with
//! [`evp_bytes_to_key`](super::kdf::evp_bytes_to_key) and wraps the result in
//! the salted envelope. Block ciphers use PKCS#7 padding.

use aes::Aes256;
use cipher::block_padding::Pkcs7;
use cipher::consts::U32;
use cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit, StreamCipher};
use des::{Des, TdesEde3};
use rabbit::Rabbit;
use rc4::Rc4;
use tracing::debug;

use crate::aliases::{KeyMaterial, Passphrase};
use crate::consts::SALT_LEN;
use crate::crypto::{envelope, kdf::evp_bytes_to_key};
use crate::enums::SymmetricAlgorithm;
use crate::error::{CoreError, Result};

/// Encrypt UTF-8 text and return the Base64 envelope
pub fn encrypt_text(
    algorithm: SymmetricAlgorithm,
    plaintext: &str,
    passphrase: &Passphrase,
) -> Result<String> {
    let salt: [u8; SALT_LEN] = rand::random();
    let ciphertext = encrypt_with_salt(algorithm, plaintext.as_bytes(), passphrase, &salt)?;
    Ok(envelope::seal(&salt, &ciphertext))
}

/// Decrypt a Base64 envelope back into UTF-8 text.
///
/// An empty or non-UTF-8 result is treated as a wrong key: stream ciphers
/// never fail on their own, so this is the only signal they give.
pub fn decrypt_text(
    algorithm: SymmetricAlgorithm,
    ciphertext: &str,
    passphrase: &Passphrase,
) -> Result<String> {
    let (salt, body) = envelope::open(ciphertext)?;
    let plaintext = decrypt_with_salt(algorithm, &body, passphrase, &salt)?;

    match String::from_utf8(plaintext) {
        Ok(text) if !text.is_empty() => Ok(text),
        _ => Err(CoreError::WrongKeyOrCorrupted),
    }
}

/// Raw ciphertext for an explicit salt (no envelope)
pub fn encrypt_with_salt(
    algorithm: SymmetricAlgorithm,
    plaintext: &[u8],
    passphrase: &Passphrase,
    salt: &[u8; SALT_LEN],
) -> Result<Vec<u8>> {
    let (key, iv) = derive(algorithm, passphrase, salt);
    debug!(%algorithm, len = plaintext.len(), "symmetric encrypt");

    match algorithm {
        SymmetricAlgorithm::Aes => cbc_encrypt::<Aes256>(&key, &iv, plaintext),
        SymmetricAlgorithm::Des => cbc_encrypt::<Des>(&key, &iv, plaintext),
        SymmetricAlgorithm::TripleDes => cbc_encrypt::<TdesEde3>(&key, &iv, plaintext),
        SymmetricAlgorithm::Rabbit => rabbit_apply(&key, &iv, plaintext),
        SymmetricAlgorithm::Rc4 => rc4_apply(&key, plaintext),
    }
}

/// Inverse of [`encrypt_with_salt`]
pub fn decrypt_with_salt(
    algorithm: SymmetricAlgorithm,
    ciphertext: &[u8],
    passphrase: &Passphrase,
    salt: &[u8; SALT_LEN],
) -> Result<Vec<u8>> {
    let (key, iv) = derive(algorithm, passphrase, salt);
    debug!(%algorithm, len = ciphertext.len(), "symmetric decrypt");

    match algorithm {
        SymmetricAlgorithm::Aes => cbc_decrypt::<Aes256>(&key, &iv, ciphertext, 16),
        SymmetricAlgorithm::Des => cbc_decrypt::<Des>(&key, &iv, ciphertext, 8),
        SymmetricAlgorithm::TripleDes => cbc_decrypt::<TdesEde3>(&key, &iv, ciphertext, 8),
        SymmetricAlgorithm::Rabbit => rabbit_apply(&key, &iv, ciphertext),
        SymmetricAlgorithm::Rc4 => rc4_apply(&key, ciphertext),
    }
}

fn derive(
    algorithm: SymmetricAlgorithm,
    passphrase: &Passphrase,
    salt: &[u8; SALT_LEN],
) -> (KeyMaterial, KeyMaterial) {
    let (key_len, iv_len) = algorithm.key_iv_len();
    evp_bytes_to_key(passphrase.expose_secret().as_bytes(), salt, key_len, iv_len)
}

fn cbc_encrypt<C>(key: &KeyMaterial, iv: &KeyMaterial, data: &[u8]) -> Result<Vec<u8>>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    let encryptor = cbc::Encryptor::<C>::new_from_slices(key.expose_secret(), iv.expose_secret())
        .map_err(|e| CoreError::Encryption(e.to_string()))?;
    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(data))
}

fn cbc_decrypt<C>(
    key: &KeyMaterial,
    iv: &KeyMaterial,
    data: &[u8],
    block_size: usize,
) -> Result<Vec<u8>>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    if data.is_empty() || data.len() % block_size != 0 {
        return Err(CoreError::MalformedCiphertext(format!(
            "length {} is not a multiple of the {block_size}-byte block",
            data.len()
        )));
    }

    let decryptor = cbc::Decryptor::<C>::new_from_slices(key.expose_secret(), iv.expose_secret())
        .map_err(|e| CoreError::Encryption(e.to_string()))?;
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(data)
        .map_err(|_| CoreError::WrongKeyOrCorrupted)
}

fn rabbit_apply(key: &KeyMaterial, iv: &KeyMaterial, data: &[u8]) -> Result<Vec<u8>> {
    let mut cipher = Rabbit::new_from_slices(key.expose_secret(), iv.expose_secret())
        .map_err(|e| CoreError::Encryption(e.to_string()))?;
    let mut buf = data.to_vec();
    cipher.apply_keystream(&mut buf);
    Ok(buf)
}

fn rc4_apply(key: &KeyMaterial, data: &[u8]) -> Result<Vec<u8>> {
    let mut cipher = Rc4::<U32>::new_from_slice(key.expose_secret())
        .map_err(|e| CoreError::Encryption(e.to_string()))?;
    let mut buf = data.to_vec();
    cipher.apply_keystream(&mut buf);
    Ok(buf)
}
