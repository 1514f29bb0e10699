//! AES-256-GCM authenticated encryption with a text encoding.
//!
//! Each call to `encrypt` generates a fresh random 12-byte nonce and
//! prepends it to the ciphertext.  The whole blob is then base64-encoded
//! so a hoard can travel as plain text.
//!
//! Layout of the decoded bytes:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::keys::CipherKey;
use crate::errors::{HoardError, Result};

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
const TAG_LEN: usize = 16;

/// Symmetric cipher used to lock and unlock hoards.
///
/// Implementations choose their own nonce handling and text encoding;
/// the only contract is that `decrypt` inverts `encrypt` under the same key.
pub trait Cipher: Send + Sync {
    /// Encrypt `plaintext` and return the ciphertext as text.
    fn encrypt(&self, key: &CipherKey, plaintext: &[u8]) -> Result<String>;

    /// Decrypt text previously produced by [`encrypt`](Self::encrypt).
    fn decrypt(&self, key: &CipherKey, ciphertext: &str) -> Result<Vec<u8>>;
}

/// The default cipher: AES-256-GCM, base64 text.
#[derive(Debug, Default, Clone, Copy)]
pub struct Aes256GcmCipher;

impl Cipher for Aes256GcmCipher {
    fn encrypt(&self, key: &CipherKey, plaintext: &[u8]) -> Result<String> {
        let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|e| HoardError::EncryptionFailed(format!("invalid key length: {e}")))?;

        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

        let sealed = cipher
            .encrypt(&nonce, plaintext)
            .map_err(|e| HoardError::EncryptionFailed(format!("encryption error: {e}")))?;

        let mut blob = Vec::with_capacity(NONCE_LEN + sealed.len());
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&sealed);
        Ok(BASE64.encode(blob))
    }

    fn decrypt(&self, key: &CipherKey, ciphertext: &str) -> Result<Vec<u8>> {
        let blob = BASE64
            .decode(ciphertext.trim())
            .map_err(|e| HoardError::MalformedCiphertext(format!("invalid base64: {e}")))?;

        if blob.len() < NONCE_LEN + TAG_LEN {
            return Err(HoardError::MalformedCiphertext(format!(
                "expected at least {} bytes, got {}",
                NONCE_LEN + TAG_LEN,
                blob.len()
            )));
        }

        let (nonce_bytes, sealed) = blob.split_at(NONCE_LEN);
        let nonce = Nonce::from_slice(nonce_bytes);

        let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|_| HoardError::AuthenticationFailed)?;

        cipher
            .decrypt(nonce, sealed)
            .map_err(|_| HoardError::AuthenticationFailed)
    }
}
