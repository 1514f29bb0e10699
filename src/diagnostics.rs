//! Failure diagnostics for the null-returning hoard API.
//!
//! The `Option`-returning operations never hand an error back to the
//! caller.  Instead every failure is reported to a [`Diagnostics`] hook
//! owned by the [`Hoard`](crate::hoard::Hoard).  The default hook emits a
//! `tracing` event; tests can swap in [`RecordingDiagnostics`] and assert
//! on what was reported.

use std::fmt;
use std::sync::Mutex;

use crate::errors::HoardError;

/// The hoard operation a diagnostic came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ValidateKey,
    Lock,
    Unlock,
    Save,
    Load,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ValidateKey => "validate-key",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
            Self::Save => "save",
            Self::Load => "load",
        };
        f.write_str(name)
    }
}

/// Receives a report for every failed hoard operation.
pub trait Diagnostics: Send + Sync {
    fn failure(&self, operation: Operation, error: &HoardError);
}

/// Reports failures as `tracing` warnings under the `hoard` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn failure(&self, operation: Operation, error: &HoardError) {
        tracing::warn!(target: "hoard", %operation, %error, "hoard operation failed");
    }
}

/// A single captured failure report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub operation: Operation,
    pub message: String,
}

/// Keeps every reported failure in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    records: Mutex<Vec<Diagnostic>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far, oldest first.
    pub fn records(&self) -> Vec<Diagnostic> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_empty()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn failure(&self, operation: Operation, error: &HoardError) {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(Diagnostic {
                operation,
                message: error.to_string(),
            });
    }
}
