use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while locking, unlocking, saving, or loading a hoard.
#[derive(Debug, Error)]
pub enum HoardError {
    // --- Input errors ---
    #[error("Invalid key — expected at least {min} bytes, got {len}")]
    InvalidKey { len: usize, min: usize },

    #[error("Invalid hoard payload — must be UTF-8 text")]
    InvalidPayloadType,

    #[error("Invalid hoard ciphertext — must be UTF-8 text")]
    InvalidCiphertextType,

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Malformed ciphertext: {0}")]
    MalformedCiphertext(String),

    #[error("Authentication failed — wrong key or tampered hoard")]
    AuthenticationFailed,

    #[error("Unlocked hoard is not valid JSON")]
    DecryptedPayloadNotParseable,

    // --- Store errors ---
    #[error("Hoard not found at {0}")]
    HoardNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    Serialization(String),

    // --- Config / CLI errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    #[error("Key error: {0}")]
    KeyError(String),

    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for hoard results.
pub type Result<T> = std::result::Result<T, HoardError>;
