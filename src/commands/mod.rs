//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod replay;
pub mod utils;

// Re-export main command functions
pub use models::ReplayArgs;
pub use replay::{execute_replay, validate_args};
pub use utils::{display_version, run_probe};
