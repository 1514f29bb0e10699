//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{HoardError, Result};

/// Environment variable holding a base64-encoded key.
pub const KEY_ENV_VAR: &str = "HOARD_KEY";

/// Hoard CLI: lock JSON into encrypted hoard files.
#[derive(Parser)]
#[command(
    name = "hoard",
    about = "Lock JSON payloads into encrypted hoard files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a file holding the raw key bytes (at least 32)
    #[arg(short, long, global = true)]
    pub key_file: Option<String>,

    /// Log filter when RUST_LOG is unset (e.g. warn, debug)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Lock a JSON file and save it as <OUT>.hoard
    Lock {
        /// JSON file to lock (`-` reads stdin)
        input: String,

        /// Output path; `.hoard` is appended
        #[arg(short, long)]
        out: String,
    },

    /// Unlock a hoard file and print its JSON
    Unlock {
        /// Hoard file to read (exact path, including `.hoard`)
        file: String,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Check whether a file holds valid JSON
    Check {
        /// File to check (`-` reads stdin)
        file: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve the key, trying in order:
/// 1. `--key-file <path>`
/// 2. `HOARD_KEY` env var (base64)
/// 3. `key_file` from `.hoard.toml`
///
/// Returns `Zeroizing<Vec<u8>>` so the key is wiped from memory on drop.
pub fn resolve_key(cli: &Cli, settings: &Settings, project_dir: &Path) -> Result<Zeroizing<Vec<u8>>> {
    let env_key = std::env::var(KEY_ENV_VAR).ok();
    resolve_key_from(cli, env_key.as_deref(), settings, project_dir)
}

/// [`resolve_key`] with the `HOARD_KEY` value passed in.
pub fn resolve_key_from(
    cli: &Cli,
    env_key: Option<&str>,
    settings: &Settings,
    project_dir: &Path,
) -> Result<Zeroizing<Vec<u8>>> {
    if let Some(path) = &cli.key_file {
        return load_key_file(Path::new(path));
    }

    if let Some(encoded) = env_key.filter(|k| !k.is_empty()) {
        return decode_key(encoded);
    }

    if let Some(path) = settings.key_file_path(project_dir) {
        return load_key_file(&path);
    }

    Err(HoardError::KeyError(format!(
        "no key provided — pass --key-file, set {KEY_ENV_VAR}, or add key_file to .hoard.toml"
    )))
}

/// Read raw key bytes from `path` and check their length.
pub fn load_key_file(path: &Path) -> Result<Zeroizing<Vec<u8>>> {
    if !path.exists() {
        return Err(HoardError::KeyError(format!(
            "key file not found at {}",
            path.display()
        )));
    }

    let data = Zeroizing::new(
        std::fs::read(path)
            .map_err(|e| HoardError::KeyError(format!("failed to read key file: {e}")))?,
    );
    crate::crypto::validate_key(&data)?;
    Ok(data)
}

/// Decode a base64 key (as found in `HOARD_KEY`) and check its length.
pub fn decode_key(encoded: &str) -> Result<Zeroizing<Vec<u8>>> {
    let data = Zeroizing::new(
        BASE64
            .decode(encoded.trim())
            .map_err(|e| HoardError::KeyError(format!("{KEY_ENV_VAR} is not valid base64: {e}")))?,
    );
    crate::crypto::validate_key(&data)?;
    Ok(data)
}

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<Vec<u8>> {
    if path == "-" {
        let mut buf = Vec::new();
        std::io::Read::read_to_end(&mut std::io::stdin(), &mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read(path)?)
}
