//! Ascon CLI
//!
//! Decrypts Ascon-128a sealed frames received from the field: two hex
//! arguments (ciphertext with tag, nonce), plaintext on stdout. Distinct exit
//! codes let the calling service tell malformed input apart from a failed
//! authentication.

use anyhow::{Context, Result};
use ascon::{Variant, NONCE_SIZE, TAG_SIZE};
use clap::Parser;
use std::path::PathBuf;
use std::process;

// Exit codes consumed by the submission service. Usage errors exit 2 (clap).
const EXIT_BAD_INPUT: i32 = 3;
const EXIT_PRECONDITION: i32 = 4;
const EXIT_AUTH_FAILED: i32 = 5;

/// Pre-shared key of the reference deployment; matches the microcontroller
/// peer. Override with `--key`, `--key-file` or `ASCON_KEY`.
const DEFAULT_KEY_HEX: &str = "112233445566778899aabbccddeeff10";

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "ascon")]
#[command(about = "Decrypt Ascon-128a sealed frames (hex in, plaintext out)", long_about = None)]
#[command(version)]
struct Cli {
    /// Ciphertext followed by the 16-byte tag, hex encoded
    #[arg(value_name = "CIPHER_HEX")]
    ciphertext: String,

    /// 16-byte nonce, hex encoded
    #[arg(value_name = "NONCE_HEX")]
    nonce: String,

    /// Pre-shared 16-byte key, hex encoded
    #[arg(short, long, env = "ASCON_KEY", default_value = DEFAULT_KEY_HEX, hide_env_values = true)]
    key: String,

    /// Read the hex-encoded key from a file instead
    #[arg(long, value_name = "PATH", conflicts_with = "key")]
    key_file: Option<PathBuf>,

    /// Associated data, hex encoded (must match the sealing side)
    #[arg(long, value_name = "AD_HEX", default_value = "")]
    ad: String,

    /// Print input sizes to stderr
    #[arg(short, long)]
    verbose: bool,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() {
    let cli = Cli::parse();

    let inputs = match decode_inputs(&cli) {
        Ok(inputs) => inputs,
        Err(err) => {
            eprintln!("error: {err:#}");
            process::exit(EXIT_BAD_INPUT);
        }
    };
    let (ciphertext, nonce_bytes, key, ad) = inputs;

    // Contract checks the core would otherwise panic on.
    let Ok(nonce) = <[u8; NONCE_SIZE]>::try_from(nonce_bytes.as_slice()) else {
        eprintln!("error: nonce must be {NONCE_SIZE} bytes, got {}", nonce_bytes.len());
        process::exit(EXIT_PRECONDITION);
    };
    if key.len() != Variant::Ascon128a.key_len() {
        eprintln!(
            "error: key must be {} bytes, got {}",
            Variant::Ascon128a.key_len(),
            key.len()
        );
        process::exit(EXIT_PRECONDITION);
    }
    if ciphertext.len() < TAG_SIZE {
        eprintln!(
            "error: ciphertext must carry at least the {TAG_SIZE}-byte tag, got {}",
            ciphertext.len()
        );
        process::exit(EXIT_PRECONDITION);
    }

    if cli.verbose {
        eprintln!(
            "ciphertext: {} bytes (incl. tag), associated data: {} bytes",
            ciphertext.len(),
            ad.len()
        );
    }

    match ascon::decrypt(&key, &nonce, &ad, &ciphertext, Variant::Ascon128a) {
        Ok(plaintext) => write_plaintext(&plaintext),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(EXIT_AUTH_FAILED);
        }
    }
}

// =============================================================================
// INPUT DECODING
// =============================================================================

type Inputs = (Vec<u8>, Vec<u8>, Vec<u8>, Vec<u8>);

fn decode_inputs(cli: &Cli) -> Result<Inputs> {
    let ciphertext = hex::decode(&cli.ciphertext).context("invalid ciphertext hex")?;
    let nonce = hex::decode(&cli.nonce).context("invalid nonce hex")?;
    let ad = hex::decode(&cli.ad).context("invalid associated-data hex")?;

    let key_hex = match &cli.key_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read key file: {}", path.display()))?
            .trim()
            .to_owned(),
        None => cli.key.clone(),
    };
    let key = hex::decode(&key_hex).context("invalid key hex")?;

    Ok((ciphertext, nonce, key, ad))
}

// =============================================================================
// OUTPUT
// =============================================================================

/// UTF-8 text goes out as-is; binary plaintext falls back to hex.
fn write_plaintext(plaintext: &[u8]) {
    match core::str::from_utf8(plaintext) {
        Ok(text) => print!("{text}"),
        Err(_) => print!("{}", hex::encode(plaintext)),
    }
}
