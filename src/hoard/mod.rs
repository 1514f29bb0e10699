//! Hoard module — lock, unlock, save, and load encrypted JSON payloads.
//!
//! This module provides:
//! - JSON validity checks (`payload`)
//! - The `Hoard` orchestrator for lock/unlock (`locker`)
//! - Saving and loading `.hoard` files (`store`)
//!
//! The free functions below use a default [`Hoard`] (AES-256-GCM, failures
//! reported through `tracing`) and return `None` on any failure.

pub mod locker;
pub mod payload;
pub mod store;

use std::path::Path;

use serde_json::Value;

pub use locker::Hoard;
pub use payload::{is_valid_json, is_valid_json_bytes};
pub use store::{hoard_path, HOARD_EXTENSION};

/// Encrypt `payload` under `key` with the default hoard.
pub fn lock(payload: &[u8], key: &[u8]) -> Option<String> {
    Hoard::new().lock(payload, key)
}

/// Decrypt `ciphertext` under `key` with the default hoard.
pub fn unlock(ciphertext: &str, key: &[u8]) -> Option<Value> {
    Hoard::new().unlock(ciphertext, key)
}

/// Write `ciphertext` to `<path>.hoard`.
pub fn save(ciphertext: &str, path: &Path) {
    Hoard::new().save(ciphertext, path)
}

/// Load and unlock the hoard at exactly `path`.
pub fn load(path: &Path, key: &[u8]) -> Option<Value> {
    Hoard::new().load(path, key)
}
