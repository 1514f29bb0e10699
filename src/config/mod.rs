//! Configuration loaded from `.hoard.toml`.

pub mod settings;

pub use settings::Settings;
