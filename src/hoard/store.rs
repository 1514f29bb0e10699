//! Persisting locked hoards to disk.
//!
//! `save` appends the `.hoard` extension to the path it is given, while
//! `load` reads exactly the path it is given.  Existing hoard files were
//! written under that contract, so both keep it; `try_load_named` offers
//! the symmetric form for new callers.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::locker::Hoard;
use crate::diagnostics::Operation;
use crate::errors::{HoardError, Result};

/// Extension appended by `save`.
pub const HOARD_EXTENSION: &str = "hoard";

/// Build the path `save` writes to: `<path>.hoard`.
///
/// The extension is appended to the full file name, so `notes.json`
/// becomes `notes.json.hoard`.
pub fn hoard_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(HOARD_EXTENSION);
    PathBuf::from(name)
}

/// Write `contents` to `path` atomically via a uniquely named temp file +
/// rename in the same directory.  A concurrent reader sees the old file or
/// the new one; concurrent writers each persist their own temp file, so the
/// last rename wins.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| {
            HoardError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} has no file name", path.display()),
            ))
        })?
        .to_string_lossy();

    // Dropped (and removed) on any early return.
    let mut tmp = tempfile::Builder::new()
        .prefix(&format!(".{file_name}."))
        .suffix(".tmp")
        .tempfile_in(parent)?;

    tmp.write_all(contents)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl Hoard {
    // ------------------------------------------------------------------
    // Typed API
    // ------------------------------------------------------------------

    /// Write `ciphertext` verbatim to `<path>.hoard`, replacing any file
    /// already there.  Returns the path written.
    pub fn try_save(&self, ciphertext: &str, path: &Path) -> Result<PathBuf> {
        let target = hoard_path(path);
        write_atomic(&target, ciphertext.as_bytes())?;
        tracing::debug!(target: "hoard", path = %target.display(), "hoard saved");
        Ok(target)
    }

    /// Read the hoard at exactly `path` and unlock it with `key`.
    pub fn try_load(&self, path: &Path, key: &[u8]) -> Result<Value> {
        crate::crypto::validate_key(key)?;

        if !path.exists() {
            return Err(HoardError::HoardNotFound(path.to_path_buf()));
        }

        let data = fs::read(path)?;
        self.try_unlock_bytes(&data, key)
    }

    /// Read the hoard `save` wrote for `path`, i.e. `<path>.hoard`.
    pub fn try_load_named(&self, path: &Path, key: &[u8]) -> Result<Value> {
        self.try_load(&hoard_path(path), key)
    }

    // ------------------------------------------------------------------
    // Null-on-failure API
    // ------------------------------------------------------------------

    /// Fire-and-forget form of [`try_save`](Self::try_save).
    pub fn save(&self, ciphertext: &str, path: &Path) {
        self.report(Operation::Save, self.try_save(ciphertext, path));
    }

    pub fn load(&self, path: &Path, key: &[u8]) -> Option<Value> {
        self.report(Operation::Load, self.try_load(path, key))
    }
}
