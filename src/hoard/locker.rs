//! `Hoard` — lock payloads into ciphertext and unlock them again.
//!
//! Every operation comes in two forms:
//! - `try_*` returns a typed [`Result`] so callers can tell a wrong key
//!   from a corrupt hoard or a missing file.
//! - The plain form returns `Option`, reporting the failure to the
//!   hoard's [`Diagnostics`] hook and collapsing it to `None`.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::payload::is_valid_json;
use crate::crypto::{Aes256GcmCipher, Cipher, CipherKey};
use crate::diagnostics::{Diagnostics, Operation, TracingDiagnostics};
use crate::errors::{HoardError, Result};

/// Locks and unlocks hoards with a pluggable cipher and diagnostics hook.
///
/// Holds no mutable state, so one `Hoard` can be shared across threads.
#[derive(Clone)]
pub struct Hoard {
    cipher: Arc<dyn Cipher>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Default for Hoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Hoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hoard").finish_non_exhaustive()
    }
}

impl Hoard {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// AES-256-GCM cipher, failures reported through `tracing`.
    pub fn new() -> Self {
        Self {
            cipher: Arc::new(Aes256GcmCipher),
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    /// Replace the cipher.
    pub fn with_cipher(mut self, cipher: Arc<dyn Cipher>) -> Self {
        self.cipher = cipher;
        self
    }

    /// Replace the diagnostics hook.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    // ------------------------------------------------------------------
    // Typed API
    // ------------------------------------------------------------------

    /// Encrypt `payload` under `key`.
    ///
    /// The payload must be UTF-8 text; it is not checked for JSON validity
    /// here, so locking non-JSON text yields a hoard that will never unlock.
    pub fn try_lock(&self, payload: &[u8], key: &[u8]) -> Result<String> {
        let cipher_key = CipherKey::derive(key)?;
        let text = std::str::from_utf8(payload).map_err(|_| HoardError::InvalidPayloadType)?;
        self.cipher.encrypt(&cipher_key, text.as_bytes())
    }

    /// Serialize `value` to JSON and lock it.
    pub fn try_lock_value<T: Serialize + ?Sized>(&self, value: &T, key: &[u8]) -> Result<String> {
        let json =
            serde_json::to_vec(value).map_err(|e| HoardError::Serialization(e.to_string()))?;
        self.try_lock(&json, key)
    }

    /// Decrypt `ciphertext` under `key` and parse the payload.
    pub fn try_unlock(&self, ciphertext: &str, key: &[u8]) -> Result<Value> {
        let cipher_key = CipherKey::derive(key)?;
        let plaintext = self.cipher.decrypt(&cipher_key, ciphertext)?;

        let text = String::from_utf8(plaintext)
            .map_err(|_| HoardError::DecryptedPayloadNotParseable)?;
        if !is_valid_json(&text) {
            return Err(HoardError::DecryptedPayloadNotParseable);
        }

        serde_json::from_str(&text).map_err(|e| HoardError::Serialization(e.to_string()))
    }

    /// Like [`try_unlock`](Self::try_unlock) for ciphertext that arrives as
    /// raw bytes (e.g. straight from disk).  The bytes must be UTF-8.
    pub fn try_unlock_bytes(&self, ciphertext: &[u8], key: &[u8]) -> Result<Value> {
        // Key first, so a bad key is reported ahead of a bad ciphertext.
        crate::crypto::validate_key(key)?;
        let text = std::str::from_utf8(ciphertext).map_err(|_| HoardError::InvalidCiphertextType)?;
        self.try_unlock(text, key)
    }

    /// Unlock and deserialize into `T`.
    pub fn try_unlock_as<T: DeserializeOwned>(&self, ciphertext: &str, key: &[u8]) -> Result<T> {
        let value = self.try_unlock(ciphertext, key)?;
        serde_json::from_value(value).map_err(|e| HoardError::Serialization(e.to_string()))
    }

    // ------------------------------------------------------------------
    // Null-on-failure API
    // ------------------------------------------------------------------

    /// Returns `true` if `key` is usable; otherwise reports why.
    pub fn is_valid_key(&self, key: &[u8]) -> bool {
        match crate::crypto::validate_key(key) {
            Ok(()) => true,
            Err(e) => {
                self.diagnostics.failure(Operation::ValidateKey, &e);
                false
            }
        }
    }

    pub fn lock(&self, payload: &[u8], key: &[u8]) -> Option<String> {
        self.report(Operation::Lock, self.try_lock(payload, key))
    }

    pub fn unlock(&self, ciphertext: &str, key: &[u8]) -> Option<Value> {
        self.report(Operation::Unlock, self.try_unlock(ciphertext, key))
    }

    pub fn unlock_bytes(&self, ciphertext: &[u8], key: &[u8]) -> Option<Value> {
        self.report(Operation::Unlock, self.try_unlock_bytes(ciphertext, key))
    }

    /// Hand a failure to the diagnostics hook and drop it.
    pub(crate) fn report<T>(&self, operation: Operation, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.diagnostics.failure(operation, &e);
                None
            }
        }
    }
}
