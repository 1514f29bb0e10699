//! `hoard unlock` — load a hoard file and print its JSON to stdout.

use std::path::Path;

use crate::cli::{resolve_key, Cli};
use crate::config::Settings;
use crate::errors::{HoardError, Result};
use crate::hoard::Hoard;

/// Execute the `unlock` command.
pub fn execute(cli: &Cli, settings: &Settings, file: &str, compact: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let key = resolve_key(cli, settings, &cwd)?;

    let value = Hoard::new().try_load(Path::new(file), &key)?;

    let rendered = if compact || !settings.pretty {
        serde_json::to_string(&value)
    } else {
        serde_json::to_string_pretty(&value)
    }
    .map_err(|e| HoardError::Serialization(e.to_string()))?;

    println!("{rendered}");
    Ok(())
}
