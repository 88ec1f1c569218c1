//! Lifecycle states of a tracing session.

use std::fmt;

/// State of an `XpuTracer`.
///
/// `Uninited -> Ready -> Started -> Stopped -> Ready -> ...`. A session
/// whose vendor calls failed under the propagating policy ends in `Aborted`
/// and accepts no further operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TracerState {
    #[default]
    Uninited,
    Ready,
    Started,
    Stopped,
    Aborted,
}

impl TracerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninited => "UNINITED",
            Self::Ready => "READY",
            Self::Started => "STARTED",
            Self::Stopped => "STOPPED",
            Self::Aborted => "ABORTED",
        }
    }
}

impl fmt::Display for TracerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
