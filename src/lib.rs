//! XPU Tracer
//!
//! Drives an accelerator's activity-tracing runtime through its
//! prepare/start/stop/collect lifecycle and converts the vendor's native
//! event records into normalized runtime and device trace events.
//!
//! ## Getting Started
//!
//! ```ignore
//! use xpu_tracer::collector::EventCollector;
//! use xpu_tracer::tracer::XpuTracer;
//! use xpu_tracer::vendor::NullFeed;
//!
//! let mut tracer = XpuTracer::new(NullFeed);
//! tracer.prepare_tracing()?;
//! tracer.start_tracing()?;
//! tracer.stop_tracing()?;
//!
//! let mut collector = EventCollector::new();
//! let stats = tracer.collect_trace_data(&mut collector)?;
//! ```

pub mod clock;
pub mod collector;
pub mod commands;
pub mod output;
pub mod tracer;
pub mod utils;
pub mod vendor;
