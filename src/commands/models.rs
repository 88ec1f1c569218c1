use crate::utils::config::FailurePolicy;
use std::path::PathBuf;

/// Arguments for the replay command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReplayArgs {
    /// Recording of vendor records (JSON array)
    pub input: PathBuf,

    /// Clock reading to use as the session start
    pub session_start_ns: u64,

    /// Output path for the event export (stdout when None)
    pub output: Option<PathBuf>,

    /// Print drain summary to stdout
    pub print_summary: bool,

    /// Handling of vendor failures
    pub failure_policy: FailurePolicy,
}

impl Default for ReplayArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("recording.json"),
            session_start_ns: 0,
            output: None,
            print_summary: false,
            failure_policy: FailurePolicy::Abort,
        }
    }
}
