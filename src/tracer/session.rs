//! Lifecycle state machine driving the vendor tracing runtime.

use super::check::check_vendor_call;
use super::drain::{drain_records, DrainStats};
use super::state::TracerState;
use crate::clock::{Clock, MonotonicClock};
use crate::collector::TraceEventCollector;
use crate::utils::config::TracerConfig;
use crate::utils::error::{TracerError, VendorError};
use crate::vendor::{ActivityFeed, VendorStatus};
use log::debug;

/// Tracer for accelerator activity.
///
/// Drives the vendor feed through `prepare -> start -> stop -> collect`.
/// Calling an operation from the wrong state returns
/// `TracerError::PreconditionNotMet` without touching the feed.
///
/// # Example
/// ```ignore
/// let mut tracer = XpuTracer::new(NullFeed);
/// tracer.prepare_tracing()?;
/// tracer.start_tracing()?;
/// // ... run the workload ...
/// tracer.stop_tracing()?;
/// let mut collector = EventCollector::new();
/// tracer.collect_trace_data(&mut collector)?;
/// ```
#[derive(Debug)]
pub struct XpuTracer<F: ActivityFeed, C: Clock = MonotonicClock> {
    feed: F,
    clock: C,
    config: TracerConfig,
    state: TracerState,
    tracing_start_ns: u64,
    last_stop_ns: Option<u64>,
}

impl<F: ActivityFeed> XpuTracer<F, MonotonicClock> {
    /// Create a tracer using the process monotonic clock and default config
    pub fn new(feed: F) -> Self {
        Self::with_config(feed, MonotonicClock, TracerConfig::default())
    }
}

impl<F: ActivityFeed, C: Clock> XpuTracer<F, C> {
    pub fn with_config(feed: F, clock: C, config: TracerConfig) -> Self {
        Self {
            feed,
            clock,
            config,
            state: TracerState::Uninited,
            tracing_start_ns: 0,
            last_stop_ns: None,
        }
    }

    pub fn state(&self) -> TracerState {
        self.state
    }

    /// Clock reading taken at the most recent start
    pub fn tracing_start_ns(&self) -> u64 {
        self.tracing_start_ns
    }

    /// Clock reading taken at the most recent stop
    pub fn last_stop_ns(&self) -> Option<u64> {
        self.last_stop_ns
    }

    pub fn feed(&self) -> &F {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut F {
        &mut self.feed
    }

    /// Enable vendor activity tracing. Valid from `Uninited` or `Stopped`.
    pub fn prepare_tracing(&mut self) -> Result<(), TracerError> {
        self.require(
            "prepare_tracing",
            "UNINITED or STOPPED",
            matches!(self.state, TracerState::Uninited | TracerState::Stopped),
        )?;

        let status = self.feed.enable_activity();
        self.vendor("xptiActivityEnable", status)?;
        debug!("enable xpti activity");

        self.state = TracerState::Ready;
        Ok(())
    }

    /// Begin capture and record the session start time. Valid from `Ready`.
    pub fn start_tracing(&mut self) -> Result<(), TracerError> {
        self.require("start_tracing", "READY", self.state == TracerState::Ready)?;

        let status = self.feed.start_tracing();
        self.vendor("xptiStartTracing", status)?;

        self.tracing_start_ns = self.clock.now_ns();
        debug!("xpti tracing started at {} ns", self.tracing_start_ns);

        self.state = TracerState::Started;
        Ok(())
    }

    /// Stop capture and disable activity tracing. Valid from `Started`.
    pub fn stop_tracing(&mut self) -> Result<(), TracerError> {
        self.require("stop_tracing", "STARTED", self.state == TracerState::Started)?;

        let status = self.feed.stop_tracing();
        self.vendor("xptiStopTracing", status)?;
        let status = self.feed.disable_activity();
        self.vendor("xptiActivityDisable", status)?;
        debug!("disable xpti activity");

        self.last_stop_ns = Some(self.clock.now_ns());
        self.state = TracerState::Stopped;
        Ok(())
    }

    /// Drain captured records into `collector`. Valid from `Stopped`.
    ///
    /// Leaves the state unchanged, so it can be called again; a second call
    /// normally finds the feed empty.
    pub fn collect_trace_data(
        &mut self,
        collector: &mut dyn TraceEventCollector,
    ) -> Result<DrainStats, TracerError> {
        self.require(
            "collect_trace_data",
            "STOPPED",
            self.state == TracerState::Stopped,
        )?;

        drain_records(
            &mut self.feed,
            self.tracing_start_ns,
            collector,
            self.config.failure_policy,
        )
        .map_err(|e| self.abort(e))
    }

    fn require(
        &self,
        operation: &'static str,
        expected: &'static str,
        valid: bool,
    ) -> Result<(), TracerError> {
        if valid {
            Ok(())
        } else {
            Err(TracerError::PreconditionNotMet {
                operation,
                expected,
                actual: self.state,
            })
        }
    }

    fn vendor(
        &mut self,
        operation: &'static str,
        status: VendorStatus,
    ) -> Result<(), TracerError> {
        check_vendor_call(operation, status, self.config.failure_policy).map_err(|e| self.abort(e))
    }

    /// A failed vendor call leaves the session unusable
    fn abort(&mut self, err: VendorError) -> TracerError {
        self.state = TracerState::Aborted;
        TracerError::Vendor(err)
    }
}
