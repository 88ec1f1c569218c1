//! Normalized trace event schema.
//!
//! These are the framework-agnostic records the tracer hands to a
//! collector. Field names match the exported JSON.

use serde::{Deserialize, Serialize};

/// Category of a device-side event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum TracerEventType {
    Kernel,
}

/// Host-side event: runtime API calls, waits and memory copies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeTraceEvent {
    pub name: String,

    pub start_ns: u64,

    pub end_ns: u64,

    pub process_id: u64,

    pub thread_id: u64,

    /// Links an API call to the kernel it launched (API events only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<u32>,
}

/// Device-side event: kernel executions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceTraceEvent {
    pub name: String,

    #[serde(rename = "type")]
    pub event_type: TracerEventType,

    pub start_ns: u64,

    pub end_ns: u64,

    pub device_id: u64,

    pub stream_id: u64,

    pub correlation_id: u32,
}

/// Either shape of normalized event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizedEvent {
    Runtime(RuntimeTraceEvent),
    Device(DeviceTraceEvent),
}

impl NormalizedEvent {
    pub fn name(&self) -> &str {
        match self {
            Self::Runtime(event) => &event.name,
            Self::Device(event) => &event.name,
        }
    }

    pub fn as_runtime(&self) -> Option<&RuntimeTraceEvent> {
        match self {
            Self::Runtime(event) => Some(event),
            Self::Device(_) => None,
        }
    }

    pub fn as_device(&self) -> Option<&DeviceTraceEvent> {
        match self {
            Self::Device(event) => Some(event),
            Self::Runtime(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_event_json_omits_missing_correlation() {
        let event = NormalizedEvent::Runtime(RuntimeTraceEvent {
            name: "xpu_wait".to_string(),
            start_ns: 10,
            end_ns: 20,
            process_id: 1,
            thread_id: 2,
            correlation_id: None,
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "runtime");
        assert!(json.get("correlation_id").is_none());
    }

    #[test]
    fn test_device_event_json_shape() {
        let event = NormalizedEvent::Device(DeviceTraceEvent {
            name: "gemm".to_string(),
            event_type: TracerEventType::Kernel,
            start_ns: 10,
            end_ns: 20,
            device_id: 0,
            stream_id: 3,
            correlation_id: 7,
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "device");
        assert_eq!(json["type"], "kernel");
        assert_eq!(json["stream_id"], 3);
        assert_eq!(event.name(), "gemm");
        assert!(event.as_runtime().is_none());
    }
}
