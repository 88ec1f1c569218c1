//! Sink for normalized trace events.
//!
//! The tracer only ever appends to a collector and never reads back from
//! it. `EventCollector` is the in-memory implementation used by the CLI and
//! tests; larger frameworks plug in their own `TraceEventCollector`.

pub mod events;

pub use events::{DeviceTraceEvent, NormalizedEvent, RuntimeTraceEvent, TracerEventType};

/// Ordered, append-only destination for normalized events
pub trait TraceEventCollector {
    fn add_runtime_event(&mut self, event: RuntimeTraceEvent);

    fn add_device_event(&mut self, event: DeviceTraceEvent);
}

/// Collector that keeps every event in arrival order
#[derive(Debug, Clone, Default)]
pub struct EventCollector {
    events: Vec<NormalizedEvent>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in the order they were appended
    pub fn events(&self) -> &[NormalizedEvent] {
        &self.events
    }

    pub fn runtime_events(&self) -> impl Iterator<Item = &RuntimeTraceEvent> {
        self.events.iter().filter_map(NormalizedEvent::as_runtime)
    }

    pub fn device_events(&self) -> impl Iterator<Item = &DeviceTraceEvent> {
        self.events.iter().filter_map(NormalizedEvent::as_device)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_events(self) -> Vec<NormalizedEvent> {
        self.events
    }
}

impl TraceEventCollector for EventCollector {
    fn add_runtime_event(&mut self, event: RuntimeTraceEvent) {
        self.events.push(NormalizedEvent::Runtime(event));
    }

    fn add_device_event(&mut self, event: DeviceTraceEvent) {
        self.events.push(NormalizedEvent::Device(event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runtime(name: &str) -> RuntimeTraceEvent {
        RuntimeTraceEvent {
            name: name.to_string(),
            start_ns: 0,
            end_ns: 1,
            process_id: 1,
            thread_id: 1,
            correlation_id: None,
        }
    }

    #[test]
    fn test_collector_preserves_append_order() {
        let mut collector = EventCollector::new();
        collector.add_runtime_event(runtime("first"));
        collector.add_device_event(DeviceTraceEvent {
            name: "second".to_string(),
            event_type: TracerEventType::Kernel,
            start_ns: 0,
            end_ns: 1,
            device_id: 0,
            stream_id: 0,
            correlation_id: 0,
        });
        collector.add_runtime_event(runtime("third"));

        let names: Vec<&str> = collector.events().iter().map(NormalizedEvent::name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(collector.runtime_events().count(), 2);
        assert_eq!(collector.device_events().count(), 1);
    }
}
