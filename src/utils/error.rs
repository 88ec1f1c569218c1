//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs.

use crate::tracer::state::TracerState;
use crate::vendor::VendorStatus;
use thiserror::Error;

/// A vendor tracing call that did not succeed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Function {operation} failed with error {code}", code = .status.code())]
pub struct VendorError {
    /// Name of the vendor call
    pub operation: &'static str,

    /// Status the vendor returned
    pub status: VendorStatus,
}

/// Errors raised by the tracer lifecycle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TracerError {
    /// Lifecycle operation invoked from the wrong state (caller bug)
    #[error("Precondition not met: {operation} requires {expected}, tracer is {actual}")]
    PreconditionNotMet {
        operation: &'static str,
        expected: &'static str,
        actual: TracerState,
    },

    #[error("Vendor tracing failure: {0}")]
    Vendor(#[from] VendorError),
}

impl TracerError {
    /// True for misuse of the lifecycle, as opposed to runtime failures
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::PreconditionNotMet { .. })
    }
}

/// Errors that can occur while loading a replay recording
#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("Failed to read recording: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// Errors that can occur while writing or reading back an export
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
