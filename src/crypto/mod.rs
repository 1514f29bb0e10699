//! Cryptographic primitives for hoards.
//!
//! This module provides:
//! - Key validation and HKDF cipher-key preparation (`keys`)
//! - The `Cipher` trait and its AES-256-GCM implementation (`encryption`)

pub mod encryption;
pub mod keys;

pub use encryption::{Aes256GcmCipher, Cipher};
pub use keys::{is_valid_key, validate_key, CipherKey, MIN_KEY_LEN};
