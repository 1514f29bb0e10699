//! Key validation and cipher-key preparation.
//!
//! Callers hand in raw key material of at least [`MIN_KEY_LEN`] bytes.
//! The AES-256 key is never the caller's bytes directly: HKDF-SHA256
//! expands the full key material into a fixed 32-byte [`CipherKey`], so
//! longer keys are usable and every byte of them matters.

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::errors::{HoardError, Result};

/// Minimum accepted length of caller-supplied key material (256 bits).
pub const MIN_KEY_LEN: usize = 32;

/// Length of the derived AES-256 key.
pub const CIPHER_KEY_LEN: usize = 32;

/// HKDF context string binding the derived key to the hoard cipher.
const CIPHER_KEY_INFO: &[u8] = b"hoard-cipher-key:v1";

/// Returns `true` if `key` is long enough to lock or unlock a hoard.
pub fn is_valid_key(key: &[u8]) -> bool {
    key.len() >= MIN_KEY_LEN
}

/// Like [`is_valid_key`], but reports the offending length.
pub fn validate_key(key: &[u8]) -> Result<()> {
    if is_valid_key(key) {
        Ok(())
    } else {
        Err(HoardError::InvalidKey {
            len: key.len(),
            min: MIN_KEY_LEN,
        })
    }
}

/// A 32-byte AES-256 key that zeroes its memory when dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct CipherKey {
    bytes: [u8; CIPHER_KEY_LEN],
}

impl CipherKey {
    /// Validate `key` and expand it into a cipher key.
    pub fn derive(key: &[u8]) -> Result<Self> {
        validate_key(key)?;

        // `salt` is None: HKDF uses a zero-filled salt internally.
        let hk = Hkdf::<Sha256>::new(None, key);

        let mut bytes = [0u8; CIPHER_KEY_LEN];
        hk.expand(CIPHER_KEY_INFO, &mut bytes)
            .map_err(|e| HoardError::KeyDerivationFailed(format!("HKDF expand failed: {e}")))?;

        Ok(Self { bytes })
    }

    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; CIPHER_KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CipherKey(..)")
    }
}
