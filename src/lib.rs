pub mod cli;
pub mod config;
pub mod crypto;
pub mod diagnostics;
pub mod errors;
pub mod hoard;

pub use errors::{HoardError, Result};
pub use hoard::Hoard;
