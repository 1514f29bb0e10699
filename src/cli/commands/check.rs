//! `hoard check` — report whether a file holds valid JSON.

use crate::cli::{output, read_input};
use crate::errors::{HoardError, Result};
use crate::hoard::is_valid_json_bytes;

/// Execute the `check` command.
pub fn execute(file: &str) -> Result<()> {
    let data = read_input(file)?;

    if is_valid_json_bytes(&data) {
        output::success(&format!("{file} is valid JSON"));
        Ok(())
    } else {
        Err(HoardError::CommandFailed(format!("{file} is not valid JSON")))
    }
}
