// src/bin/cryptovault.rs
//! cryptovault CLI: the playground's tools from a terminal
//!
//! Usage:
//!   cryptovault symmetric encrypt -a aes -k KEY "text"
//!   cryptovault symmetric decrypt -a aes "U2FsdGVkX1..."   (prompts for the key)
//!   cryptovault passphrase
//!   cryptovault rsa generate --bits 2048 --out-dir keys/
//!   cryptovault rsa encrypt --public-key keys/public.pem "text"
//!   cryptovault rsa decrypt --private-key keys/private.pem "BASE64"
//!   cryptovault hash text -a sha3 "text"
//!   cryptovault hash file ./Cargo.toml

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use cryptovault::dispatch::OperationResult;
use cryptovault::enums::{DigestAlgorithm, Mode, SymmetricAlgorithm};
use cryptovault::file_ops::save_to_file;
use cryptovault::key_ops::generate_passphrase;
use cryptovault::presenter::{copy_to_clipboard, render, to_json};
use cryptovault::views::{CopyTarget, Tab, Workbench};
use rpassword::read_password;
use tracing::{debug, info};

/// cryptovault - passphrase ciphers, RSA and hashes
#[derive(Parser)]
#[command(name = "cryptovault", version)]
#[command(about = "Cryptography playground: ciphers, RSA key pairs and hashes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Copy the result to the clipboard through the terminal (OSC 52)
    #[arg(long, global = true)]
    copy: bool,

    /// Also save the result to FILE
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt or decrypt text with a passphrase
    Symmetric {
        #[command(subcommand)]
        action: SymmetricAction,
    },

    /// Print a random passphrase
    Passphrase,

    /// Generate RSA key pairs and use them
    Rsa {
        #[command(subcommand)]
        action: RsaAction,
    },

    /// Hash text or a file
    Hash {
        #[command(subcommand)]
        action: HashAction,
    },
}

#[derive(Subcommand)]
enum SymmetricAction {
    Encrypt(SymmetricArgs),
    Decrypt(SymmetricArgs),
}

#[derive(Args)]
struct SymmetricArgs {
    /// aes, tripledes, rabbit, rc4 or des
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Passphrase; prompted for when omitted
    #[arg(short, long)]
    key: Option<String>,

    text: String,
}

#[derive(Subcommand)]
enum RsaAction {
    /// Generate a key pair
    Generate {
        /// Modulus size (default from config)
        #[arg(long)]
        bits: Option<usize>,

        /// Write public.pem and private.pem into DIR
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Encrypt text with a PEM public key
    Encrypt {
        #[arg(long, value_name = "FILE")]
        public_key: PathBuf,

        text: String,
    },

    /// Decrypt Base64 ciphertext with a PEM private key
    Decrypt {
        #[arg(long, value_name = "FILE")]
        private_key: PathBuf,

        ciphertext: String,
    },
}

#[derive(Subcommand)]
enum HashAction {
    /// Hash a string
    Text {
        #[arg(short, long)]
        algorithm: Option<String>,

        text: String,
    },

    /// Hash a file (size limit from config)
    File {
        #[arg(short, long)]
        algorithm: Option<String>,

        path: PathBuf,
    },
}

/// Where a successful result goes besides stdout
struct Sink {
    copy: bool,
    output: Option<PathBuf>,
    json: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("cryptovault={log_level}").parse()?),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let sink = Sink {
        copy: cli.copy,
        output: cli.output,
        json: cli.json,
    };
    let mut bench = Workbench::from_loaded_config();

    match cli.command {
        Commands::Symmetric { action } => cmd_symmetric(&mut bench, &sink, action),
        Commands::Passphrase => cmd_passphrase(&sink),
        Commands::Rsa { action } => cmd_rsa(&mut bench, &sink, action),
        Commands::Hash { action } => cmd_hash(&mut bench, &sink, action),
    }
}

// ============ OUTPUT ============

/// Print a result; on success also save it. Returns whether it succeeded.
fn emit(sink: &Sink, title: &str, outcome: &OperationResult) -> Result<bool> {
    if sink.json {
        println!("{}", to_json(outcome)?);
    } else if outcome.is_ok() {
        println!("{}", render(title, outcome));
    } else {
        eprintln!("{}", render(title, outcome));
    }

    if !outcome.is_ok() {
        return Ok(false);
    }

    if let Some(path) = &sink.output {
        save_to_file(path, &outcome.output)
            .with_context(|| format!("Failed to save result to {}", path.display()))?;
        info!("Result saved to {}", path.display());
    }
    Ok(true)
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn announce(notice: Option<String>) {
    if let Some(notice) = notice {
        eprintln!("{notice}");
    }
}

// ============ SYMMETRIC ============

fn cmd_symmetric(bench: &mut Workbench, sink: &Sink, action: SymmetricAction) -> Result<ExitCode> {
    bench.select(Tab::Symmetric);
    let (mode, args) = match action {
        SymmetricAction::Encrypt(args) => (Mode::Encrypt, args),
        SymmetricAction::Decrypt(args) => (Mode::Decrypt, args),
    };

    let view = &mut bench.symmetric;
    if let Some(name) = &args.algorithm {
        view.algorithm = name.parse::<SymmetricAlgorithm>()?;
    }
    view.mode = mode;
    view.text = args.text;
    view.key = match args.key {
        Some(key) => key,
        None => prompt_key()?,
    };

    debug!("{} with {}", view.action_label(), view.algorithm.label());
    let outcome = view.execute();
    let ok = emit(sink, "Result:", &outcome)?;

    if ok && sink.copy {
        let mut stdout = io::stdout();
        view.copy_result(&mut stdout)?;
        announce(view.take_notice());
    }
    Ok(exit_code(ok))
}

fn prompt_key() -> Result<String> {
    eprint!("Enter key: ");
    io::stderr().flush()?;
    let input = read_password().context("Failed to read key")?;
    Ok(input.trim_end().to_owned())
}

fn cmd_passphrase(sink: &Sink) -> Result<ExitCode> {
    let passphrase = generate_passphrase();
    let outcome = OperationResult::success(passphrase.expose_secret().clone());
    let ok = emit(sink, "Passphrase:", &outcome)?;
    if ok && sink.copy {
        copy_to_clipboard(&mut io::stdout(), &outcome.output)?;
        eprintln!("Copied to clipboard!");
    }
    Ok(exit_code(ok))
}

// ============ RSA ============

fn cmd_rsa(bench: &mut Workbench, sink: &Sink, action: RsaAction) -> Result<ExitCode> {
    bench.select(Tab::Asymmetric);
    let view = &mut bench.asymmetric;

    let (outcome, copy_target) = match action {
        RsaAction::Generate { bits, out_dir } => {
            if let Some(bits) = bits {
                view.key_bits = bits;
            }
            info!("Generating {}-bit RSA key pair...", view.key_bits);
            if !view.generate_key_pair() {
                let message = view.error().unwrap_or_default().to_owned();
                return Ok(exit_code(emit(sink, "", &OperationResult::failure(message))?));
            }
            if let Some(dir) = out_dir {
                write_key_files(&dir, &view.public_key, &view.private_key)?;
            }
            announce(view.take_notice());
            let combined = format!("{}\n{}", view.public_key, view.private_key);
            (OperationResult::success(combined), CopyTarget::PublicKey)
        }
        RsaAction::Encrypt { public_key, text } => {
            view.public_key = read_pem(&public_key)?;
            view.plain_text = text;
            (view.encrypt(), CopyTarget::EncryptedText)
        }
        RsaAction::Decrypt {
            private_key,
            ciphertext,
        } => {
            view.private_key = read_pem(&private_key)?;
            view.encrypted_text = ciphertext;
            (view.decrypt(), CopyTarget::DecryptedText)
        }
    };

    let ok = emit(sink, "Result:", &outcome)?;
    if ok && sink.copy {
        view.copy(copy_target, &mut io::stdout())?;
        announce(view.take_notice());
    }
    Ok(exit_code(ok))
}

fn read_pem(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read key file {}", path.display()))
}

fn write_key_files(dir: &Path, public_pem: &str, private_pem: &str) -> Result<()> {
    let public_path = dir.join("public.pem");
    let private_path = dir.join("private.pem");
    save_to_file(&public_path, public_pem)
        .with_context(|| format!("Failed to write {}", public_path.display()))?;
    save_to_file(&private_path, private_pem)
        .with_context(|| format!("Failed to write {}", private_path.display()))?;
    info!("Keys written to {}", dir.display());
    Ok(())
}

// ============ HASH ============

fn cmd_hash(bench: &mut Workbench, sink: &Sink, action: HashAction) -> Result<ExitCode> {
    bench.select(Tab::Hash);
    let view = &mut bench.hash;

    let outcome = match action {
        HashAction::Text { algorithm, text } => {
            if let Some(name) = algorithm {
                view.algorithm = name.parse::<DigestAlgorithm>()?;
            }
            view.text = text;
            view.calculate()
        }
        HashAction::File { algorithm, path } => {
            if let Some(name) = algorithm {
                view.algorithm = name.parse::<DigestAlgorithm>()?;
            }
            view.load_file(path);
            match view.error().map(str::to_owned) {
                Some(message) => OperationResult::failure(message),
                // large text files are loaded without being hashed
                None if view.hash().is_empty() => view.calculate(),
                None => OperationResult::success(view.hash()),
            }
        }
    };

    let title = view.title();
    let ok = emit(sink, &title, &outcome)?;
    if ok && sink.copy {
        copy_to_clipboard(&mut io::stdout(), &outcome.output)?;
        eprintln!("Copied to clipboard!");
    }
    Ok(exit_code(ok))
}
