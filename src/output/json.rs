//! JSON event export writer.
//!
//! Writes the events collected from one tracing session, together with the
//! session start and drain counts, as a JSON document.

use crate::collector::NormalizedEvent;
use crate::tracer::DrainStats;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Top-level export structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventExport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Session start timestamp used for filtering
    pub session_start_ns: u64,

    /// Counts from the drain
    pub stats: DrainStats,

    /// Normalized events in collection order
    pub events: Vec<NormalizedEvent>,
}

impl EventExport {
    pub fn new(session_start_ns: u64, stats: DrainStats, events: Vec<NormalizedEvent>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            session_start_ns,
            stats,
            events,
        }
    }
}

/// Write an export to a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_events(export: &EventExport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing events to: {}", output_path.display());

    super::validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, export).map_err(OutputError::SerializationFailed)?;

    info!("Wrote {} events", export.events.len());

    Ok(())
}

/// Serialize an export to a pretty JSON string
pub fn events_to_string(export: &EventExport) -> Result<String, OutputError> {
    serde_json::to_string_pretty(export).map_err(OutputError::SerializationFailed)
}

/// Read an export back from a JSON file
///
/// # Errors
/// * `OutputError::ReadFailed` - File cannot be opened
/// * `OutputError::SerializationFailed` - File is not a valid export
pub fn read_events(input_path: impl AsRef<Path>) -> Result<EventExport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading events from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let export: EventExport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Export loaded: version {}, {} events",
        export.version,
        export.events.len()
    );

    Ok(export)
}
