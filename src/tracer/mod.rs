//! Accelerator activity tracer.
//!
//! This module handles:
//! - The prepare/start/stop/collect lifecycle (`session`, `state`)
//! - Checking vendor call results (`check`)
//! - Draining the vendor record queue (`drain`)
//! - Mapping vendor records onto normalized events (`classify`)

pub mod check;
pub mod classify;
pub mod drain;
pub mod session;
pub mod state;

// Re-export main types
pub use check::check_vendor_call;
pub use classify::{classify_record, is_within_session, process_record, RecordOutcome};
pub use drain::{drain_records, DrainStats};
pub use session::XpuTracer;
pub use state::TracerState;
