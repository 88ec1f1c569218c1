//! Configuration and constants for the tracer and CLI.

use serde::{Deserialize, Serialize};

/// Status code the vendor API returns on success
pub const STATUS_SUCCESS: i32 = 0;

/// Status code the vendor API returns when the record queue is drained
pub const STATUS_INVALID_DATA: i32 = 1;

/// Process exit code used when a vendor call fails under the abort policy
pub const VENDOR_FAILURE_EXIT_CODE: i32 = -1;

/// Current output schema version for exported events
pub const SCHEMA_VERSION: &str = "1.0.0";

// Record type names accepted in replay recordings
pub const API_TYPE_NAMES: &[&str] = &["api", "runtime"];
pub const KERNEL_TYPE_NAMES: &[&str] = &["kernel"];
pub const MEMCPY_TYPE_NAMES: &[&str] = &["memcpy", "mem"];
pub const WAIT_TYPE_NAMES: &[&str] = &["wait", "sync"];

/// What to do when a vendor tracing call fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log the failure and terminate the process
    #[default]
    Abort,

    /// Log the failure and hand the error back to the caller
    Propagate,
}

/// Tracer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TracerConfig {
    /// Handling of vendor API failures
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl TracerConfig {
    /// Configuration that returns vendor failures instead of exiting
    pub fn propagating() -> Self {
        Self {
            failure_policy: FailurePolicy::Propagate,
        }
    }
}
