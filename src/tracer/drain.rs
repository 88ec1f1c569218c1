//! Drain loop: empties the vendor record queue into a collector.

use super::check::check_vendor_call;
use super::classify::{process_record, RecordOutcome};
use crate::collector::TraceEventCollector;
use crate::utils::config::FailurePolicy;
use crate::utils::error::VendorError;
use crate::vendor::{ActivityFeed, VendorStatus};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Counts from one drain pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrainStats {
    /// Records pulled from the feed
    pub retrieved: u64,

    /// Runtime events appended
    pub runtime_events: u64,

    /// Device events appended
    pub device_events: u64,

    /// Records dropped for starting before the session
    pub dropped_stale: u64,

    /// Records dropped for having an unknown kind
    pub dropped_unknown: u64,
}

impl DrainStats {
    /// Events handed to the collector
    pub fn appended(&self) -> u64 {
        self.runtime_events + self.device_events
    }

    /// Records pulled but not appended
    pub fn dropped(&self) -> u64 {
        self.dropped_stale + self.dropped_unknown
    }

    fn record(&mut self, outcome: RecordOutcome) {
        self.retrieved += 1;
        match outcome {
            RecordOutcome::Runtime => self.runtime_events += 1,
            RecordOutcome::Device => self.device_events += 1,
            RecordOutcome::Stale => self.dropped_stale += 1,
            RecordOutcome::Unknown => self.dropped_unknown += 1,
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Retrieved: {} | Runtime: {} | Device: {} | Stale: {} | Unknown: {}",
            self.retrieved,
            self.runtime_events,
            self.device_events,
            self.dropped_stale,
            self.dropped_unknown
        )
    }
}

/// Releases the record currently held from the feed when dropped
struct HeldRecord<'a, F: ActivityFeed + ?Sized> {
    feed: &'a mut F,
}

impl<F: ActivityFeed + ?Sized> Drop for HeldRecord<'_, F> {
    fn drop(&mut self) {
        self.feed.release_record();
    }
}

/// Flush the feed and move every visible record into `collector`.
///
/// Records are forwarded in feed order. Each record pulled is released
/// exactly once, whatever its outcome. The loop ends on the first
/// `InvalidData` (or record-less `Success`) status; any other status is a
/// vendor failure.
pub fn drain_records<F: ActivityFeed + ?Sized>(
    feed: &mut F,
    session_start_ns: u64,
    collector: &mut dyn TraceEventCollector,
    policy: FailurePolicy,
) -> Result<DrainStats, VendorError> {
    check_vendor_call("xptiActivityFlushAll", feed.flush_all(), policy)?;

    let mut stats = DrainStats::default();
    loop {
        match feed.next_record() {
            Ok(record) => {
                let _held = HeldRecord { feed: &mut *feed };
                stats.record(process_record(&record, session_start_ns, collector));
            }
            Err(VendorStatus::InvalidData | VendorStatus::Success) => {
                trace!("xpti data queue is empty now, collect trace data done");
                break;
            }
            Err(status) => {
                check_vendor_call("xptiActivityGetNextRecord", status, policy)?;
                break;
            }
        }
    }

    debug!("Drained trace data: {}", stats.summary());
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::EventCollector;
    use crate::vendor::{FeedCall, NullFeed, ReplayFeed, VendorRecord};

    #[test]
    fn test_empty_feed_terminates_immediately() {
        let mut feed = ReplayFeed::default();
        let mut collector = EventCollector::new();

        let stats = drain_records(&mut feed, 0, &mut collector, FailurePolicy::Propagate).unwrap();

        assert_eq!(stats, DrainStats::default());
        assert!(collector.is_empty());
        assert_eq!(feed.calls(), &[FeedCall::FlushAll, FeedCall::NextRecord]);
    }

    #[test]
    fn test_null_feed_drains_nothing() {
        let mut collector = EventCollector::new();
        let stats =
            drain_records(&mut NullFeed, 0, &mut collector, FailurePolicy::Propagate).unwrap();
        assert_eq!(stats.appended(), 0);
    }

    #[test]
    fn test_every_record_released_once() {
        let mut feed = ReplayFeed::new(vec![
            VendorRecord::api("kept", 100, 110, 1, 1, 1),
            VendorRecord::api("stale", 10, 110, 1, 1, 2),
            VendorRecord::unknown("odd", 100, 110, 99),
            VendorRecord::kernel("k", 120, 130, 0, 0, 1),
        ]);
        let mut collector = EventCollector::new();

        let stats = drain_records(&mut feed, 50, &mut collector, FailurePolicy::Propagate).unwrap();

        assert_eq!(stats.retrieved, 4);
        assert_eq!(stats.appended(), 2);
        assert_eq!(stats.dropped(), 2);
        assert_eq!(feed.call_count(FeedCall::ReleaseRecord), 4);
        assert!(feed.audit().is_balanced());
    }

    #[test]
    fn test_pull_failure_stops_the_drain() {
        let mut feed = ReplayFeed::new(vec![VendorRecord::wait("w", 1, 2, 1, 1)])
            .fail_on(FeedCall::NextRecord, VendorStatus::Other(6));
        let mut collector = EventCollector::new();

        let err = drain_records(&mut feed, 0, &mut collector, FailurePolicy::Propagate).unwrap_err();

        assert_eq!(err.operation, "xptiActivityGetNextRecord");
        assert_eq!(err.status, VendorStatus::Other(6));
        assert_eq!(feed.call_count(FeedCall::ReleaseRecord), 0);
    }

    #[test]
    fn test_flush_failure_skips_pulls() {
        let mut feed = ReplayFeed::default().fail_on(FeedCall::FlushAll, VendorStatus::Other(2));
        let mut collector = EventCollector::new();

        let err = drain_records(&mut feed, 0, &mut collector, FailurePolicy::Propagate).unwrap_err();

        assert_eq!(err.operation, "xptiActivityFlushAll");
        assert_eq!(feed.call_count(FeedCall::NextRecord), 0);
    }

    /// Feed that answers every pull with a success status but no record
    struct RecordlessFeed {
        pulls: usize,
    }

    impl ActivityFeed for RecordlessFeed {
        fn enable_activity(&mut self) -> VendorStatus {
            VendorStatus::Success
        }

        fn disable_activity(&mut self) -> VendorStatus {
            VendorStatus::Success
        }

        fn start_tracing(&mut self) -> VendorStatus {
            VendorStatus::Success
        }

        fn stop_tracing(&mut self) -> VendorStatus {
            VendorStatus::Success
        }

        fn flush_all(&mut self) -> VendorStatus {
            VendorStatus::Success
        }

        fn next_record(&mut self) -> Result<VendorRecord, VendorStatus> {
            self.pulls += 1;
            Err(VendorStatus::Success)
        }

        fn release_record(&mut self) {
            panic!("nothing was handed out");
        }
    }

    #[test]
    fn test_recordless_success_ends_the_drain() {
        let mut feed = RecordlessFeed { pulls: 0 };
        let mut collector = EventCollector::new();

        let stats = drain_records(&mut feed, 0, &mut collector, FailurePolicy::Abort).unwrap();

        assert_eq!(stats, DrainStats::default());
        assert_eq!(feed.pulls, 1);
    }

    #[test]
    fn test_summary_format() {
        let stats = DrainStats {
            retrieved: 3,
            runtime_events: 1,
            device_events: 1,
            dropped_stale: 1,
            dropped_unknown: 0,
        };
        assert_eq!(
            stats.summary(),
            "Retrieved: 3 | Runtime: 1 | Device: 1 | Stale: 1 | Unknown: 0"
        );
    }
}
