//! `hoard lock` — lock a JSON file and save it as `<out>.hoard`.

use std::path::Path;

use crate::cli::{output, read_input, resolve_key, Cli};
use crate::config::Settings;
use crate::errors::{HoardError, Result};
use crate::hoard::{is_valid_json_bytes, Hoard};

/// Execute the `lock` command.
pub fn execute(cli: &Cli, settings: &Settings, input: &str, out: &str) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let key = resolve_key(cli, settings, &cwd)?;

    let payload = read_input(input)?;

    // A hoard holding non-JSON can never be unlocked, so refuse it here.
    if !is_valid_json_bytes(&payload) {
        return Err(HoardError::CommandFailed(format!(
            "{input} does not contain valid JSON"
        )));
    }

    let hoard = Hoard::new();
    let locked = hoard.try_lock(&payload, &key)?;
    let written = hoard.try_save(&locked, Path::new(out))?;

    output::success(&format!("Locked {input} into {}", written.display()));
    output::tip(&format!("Run `hoard unlock {}` to read it back.", written.display()));

    Ok(())
}
