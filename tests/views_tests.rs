// tests/views_tests.rs
mod common;

use std::fs;

use cryptovault::config::Config;
use cryptovault::enums::{DigestAlgorithm, Mode, SymmetricAlgorithm};
use cryptovault::presenter::clipboard_sequence;
use cryptovault::views::{AsymmetricTab, CopyTarget, Tab, Workbench};
use tempfile::tempdir;

fn bench() -> Workbench {
    Workbench::new(&Config::default())
}

#[test]
fn test_tabs_switch_without_losing_fields() {
    common::setup();
    let mut bench = bench();
    assert_eq!(bench.active(), Tab::Home);

    bench.select(Tab::Symmetric);
    bench.symmetric.text = "draft".into();
    bench.select(Tab::Hash);
    bench.hash.text = "other".into();
    bench.select(Tab::Symmetric);

    assert_eq!(bench.symmetric.text, "draft");
    assert_eq!(bench.hash.text, "other");
}

#[test]
fn test_tab_cycling_wraps() {
    let mut bench = bench();
    bench.previous();
    assert_eq!(bench.active(), Tab::About);
    bench.next();
    assert_eq!(bench.active(), Tab::Home);
    bench.next();
    assert_eq!(bench.active(), Tab::Symmetric);
}

#[test]
fn test_defaults_come_from_config() {
    let config = Config::from_toml_str(
        "[defaults]\nsymmetric_algorithm = \"rabbit\"\ndigest_algorithm = \"md5\"\n",
    )
    .unwrap();
    let bench = Workbench::new(&config);
    assert_eq!(bench.symmetric.algorithm, SymmetricAlgorithm::Rabbit);
    assert_eq!(bench.hash.algorithm, DigestAlgorithm::Md5);
    assert_eq!(bench.asymmetric.key_bits, 2048);
}

#[test]
fn test_symmetric_view_roundtrip_and_copy() {
    let mut bench = bench();
    let view = &mut bench.symmetric;
    view.generate_key();
    assert_eq!(view.key.len(), 32);

    view.text = "round trip".into();
    assert!(view.execute().is_ok());
    let ciphertext = view.result().to_owned();

    view.mode = Mode::Decrypt;
    assert_eq!(view.text_label(), "Text to decrypt");
    view.text = ciphertext;
    assert!(view.execute().is_ok());
    assert_eq!(view.result(), "round trip");

    let mut out = Vec::new();
    assert!(view.copy_result(&mut out).unwrap());
    assert_eq!(out, clipboard_sequence("round trip").into_bytes());
    assert_eq!(view.take_notice().as_deref(), Some("Copied to clipboard!"));
    assert_eq!(view.take_notice(), None);
}

#[test]
fn test_symmetric_view_error_keeps_previous_result() {
    let mut bench = bench();
    let view = &mut bench.symmetric;
    view.text = "first".into();
    view.key = "k".into();
    view.execute();
    let previous = view.result().to_owned();

    view.key.clear();
    let outcome = view.execute();
    assert_eq!(outcome.error.as_deref(), Some("Please enter an encryption key"));
    assert_eq!(view.error(), Some("Please enter an encryption key"));
    assert_eq!(view.result(), previous);
}

#[test]
fn test_copy_with_empty_result_does_nothing() {
    let mut bench = bench();
    let mut out = Vec::new();
    assert!(!bench.symmetric.copy_result(&mut out).unwrap());
    assert!(out.is_empty());
    assert_eq!(bench.symmetric.take_notice(), None);
}

#[test]
fn test_asymmetric_view_generate_encrypt_decrypt() {
    let mut bench = bench();
    let view = &mut bench.asymmetric;
    view.key_bits = 1024;
    assert_eq!(view.tab, AsymmetricTab::Generate);

    assert!(view.generate_key_pair());
    assert_eq!(view.take_notice().as_deref(), Some("Key pair generated successfully"));

    view.tab = AsymmetricTab::Encrypt;
    view.plain_text = "shared fields".into();
    assert!(view.encrypt().is_ok());
    assert!(!view.encrypted_text.is_empty());

    view.tab = AsymmetricTab::Decrypt;
    assert!(view.decrypt().is_ok());
    assert_eq!(view.decrypted_text, "shared fields");

    let mut out = Vec::new();
    assert!(view.copy(CopyTarget::PublicKey, &mut out).unwrap());
    assert_eq!(view.take_notice().as_deref(), Some("Public key copied!"));
    assert!(view.copy(CopyTarget::DecryptedText, &mut out).unwrap());
    assert_eq!(view.take_notice().as_deref(), Some("Decrypted text copied!"));
}

#[test]
fn test_asymmetric_view_validation() {
    let mut bench = bench();
    let view = &mut bench.asymmetric;
    view.plain_text = "no key yet".into();
    view.encrypt();
    assert_eq!(view.error(), Some("Please enter or generate a public key"));
    assert!(view.encrypted_text.is_empty());

    view.public_key = "not a pem".into();
    view.encrypt();
    assert!(view.error().unwrap().starts_with("Encryption error: "));

    view.key_bits = 100;
    assert!(!view.generate_key_pair());
    assert!(view.error().unwrap().starts_with("Error generating keys: "));
}

#[test]
fn test_hash_view_calculate() {
    let mut bench = bench();
    let view = &mut bench.hash;
    assert_eq!(view.title(), "SHA256:");

    view.calculate();
    assert_eq!(view.error(), Some("Please enter text to hash"));

    view.text = "hello".into();
    view.calculate();
    assert_eq!(view.error(), None);
    assert_eq!(
        view.hash(),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
}

#[test]
fn test_hash_view_text_file_is_hashed_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, "hello").unwrap();

    let mut bench = bench();
    let view = &mut bench.hash;
    let pending = view.begin_file_load(path);
    assert!(view.is_processing());
    assert_eq!(pending.file_name(), "hello.txt");

    view.finish_file_load(pending);
    assert!(!view.is_processing());
    assert_eq!(view.text, "hello");
    assert_eq!(view.file_name(), Some("hello.txt"));
    assert_eq!(
        view.hash(),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
}

#[test]
fn test_hash_view_long_text_waits_for_calculate() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("long.txt");
    fs::write(&path, "0123456789").unwrap();

    let config = Config::from_toml_str("[limits]\nmax_file_bytes = 1000\nauto_hash_text_chars = 10\n").unwrap();
    let mut bench = Workbench::new(&config);
    let view = &mut bench.hash;
    view.load_file(path);
    assert_eq!(view.text, "0123456789");
    assert_eq!(view.hash(), "");

    view.calculate();
    assert_eq!(view.hash().len(), 64);
}

#[test]
fn test_hash_view_binary_file_shows_placeholder() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blob.bin");
    fs::write(&path, [0u8, 159, 146, 150]).unwrap();

    let mut bench = bench();
    let view = &mut bench.hash;
    view.algorithm = DigestAlgorithm::Md5;
    view.load_file(path);
    assert_eq!(view.text, "[Binary content of file: blob.bin]");
    assert_eq!(view.hash().len(), 32);
}

#[test]
fn test_hash_view_rejects_oversize_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("big.bin");
    fs::write(&path, vec![7u8; 3_000_000]).unwrap();

    let config = Config::from_toml_str("[limits]\nmax_file_bytes = 2000000\nauto_hash_text_chars = 10\n").unwrap();
    let mut bench = Workbench::new(&config);
    let view = &mut bench.hash;
    view.load_file(path);
    assert_eq!(view.error(), Some("File is too large (limit: 2MB)"));
    assert_eq!(view.hash(), "");
    assert!(!view.is_processing());
}
