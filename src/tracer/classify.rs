//! Classification and time-window filtering of vendor records.
//!
//! Each record maps to at most one normalized event:
//!
//! | Vendor kind | Output             | Correlation id |
//! |-------------|--------------------|----------------|
//! | API         | `RuntimeTraceEvent`| token          |
//! | Kernel      | `DeviceTraceEvent` | token          |
//! | Wait        | `RuntimeTraceEvent`| none           |
//! | Memcpy      | `RuntimeTraceEvent`| none           |
//!
//! Unknown kinds and records that started before the session are dropped.

use crate::collector::{
    DeviceTraceEvent, NormalizedEvent, RuntimeTraceEvent, TraceEventCollector, TracerEventType,
};
use crate::vendor::{RecordPayload, VendorRecord};
use log::trace;

/// What happened to a single record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Appended as a runtime event
    Runtime,

    /// Appended as a device event
    Device,

    /// Started before the session, dropped
    Stale,

    /// Unrecognized kind, dropped
    Unknown,
}

/// Project a record onto its normalized shape.
///
/// Returns `None` for unknown record kinds.
pub fn classify_record(record: &VendorRecord) -> Option<NormalizedEvent> {
    let event = match record.payload {
        RecordPayload::Api { pid, tid, token } => NormalizedEvent::Runtime(RuntimeTraceEvent {
            name: record.name.clone(),
            start_ns: record.start,
            end_ns: record.end,
            process_id: pid,
            thread_id: tid,
            correlation_id: Some(token),
        }),
        RecordPayload::Kernel {
            device_id,
            stream_id,
            token,
        } => NormalizedEvent::Device(DeviceTraceEvent {
            name: record.name.clone(),
            event_type: TracerEventType::Kernel,
            start_ns: record.start,
            end_ns: record.end,
            device_id,
            stream_id,
            correlation_id: token,
        }),
        RecordPayload::Memcpy { pid, tid } | RecordPayload::Wait { pid, tid } => {
            NormalizedEvent::Runtime(RuntimeTraceEvent {
                name: record.name.clone(),
                start_ns: record.start,
                end_ns: record.end,
                process_id: pid,
                thread_id: tid,
                correlation_id: None,
            })
        }
        RecordPayload::Unknown { .. } => return None,
    };

    Some(event)
}

/// Whether a record starting at `start_ns` belongs to the session.
///
/// Only the start time is compared: a record that began before the session
/// is dropped even if it ended after, and the end time is never checked.
pub fn is_within_session(start_ns: u64, session_start_ns: u64) -> bool {
    start_ns >= session_start_ns
}

/// Classify, filter and append one record
pub fn process_record(
    record: &VendorRecord,
    session_start_ns: u64,
    collector: &mut dyn TraceEventCollector,
) -> RecordOutcome {
    let Some(event) = classify_record(record) else {
        trace!(
            "xpu event {} has unknown type {:?}, drop event",
            record.name,
            record.payload
        );
        return RecordOutcome::Unknown;
    };

    if !is_within_session(record.start, session_start_ns) {
        trace!(
            "xpu event {} start {} is before profiler start {}, drop event",
            record.name,
            record.start,
            session_start_ns
        );
        return RecordOutcome::Stale;
    }

    let kind = record.kind();
    match event {
        NormalizedEvent::Runtime(event) => {
            trace!("Add {} event {}", kind, event.name);
            collector.add_runtime_event(event);
            RecordOutcome::Runtime
        }
        NormalizedEvent::Device(event) => {
            trace!("Add {} event {}", kind, event.name);
            collector.add_device_event(event);
            RecordOutcome::Device
        }
    }
}
