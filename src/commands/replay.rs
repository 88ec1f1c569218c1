//! Replay command implementation.
//!
//! The replay command:
//! 1. Loads a recording of vendor records
//! 2. Prepares and starts a tracing session at the requested start time
//! 3. Stops the session
//! 4. Drains the records into normalized events
//! 5. Writes the events as JSON

use super::models::ReplayArgs;
use crate::clock::ManualClock;
use crate::collector::EventCollector;
use crate::output::{events_to_string, write_events, EventExport};
use crate::tracer::XpuTracer;
use crate::utils::config::TracerConfig;
use crate::vendor::ReplayFeed;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the replay command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The export that was written
///
/// # Errors
/// * Recording cannot be read or parsed
/// * A lifecycle step fails
/// * Output cannot be written
pub fn execute_replay(args: ReplayArgs) -> Result<EventExport> {
    let start_time = Instant::now();

    info!("Replaying recording: {}", args.input.display());

    info!("Step 1/4: Loading recording...");
    let feed = ReplayFeed::from_file(&args.input)
        .with_context(|| format!("Failed to load recording {}", args.input.display()))?;
    debug!("{} records buffered", feed.pending());

    info!("Step 2/4: Running tracing session...");
    let clock = ManualClock::new(args.session_start_ns);
    let config = TracerConfig {
        failure_policy: args.failure_policy,
    };
    let mut tracer = XpuTracer::with_config(feed, clock, config);

    tracer.prepare_tracing().context("Failed to prepare tracing")?;
    tracer.start_tracing().context("Failed to start tracing")?;
    tracer.stop_tracing().context("Failed to stop tracing")?;

    info!("Step 3/4: Collecting trace data...");
    let mut collector = EventCollector::new();
    let stats = tracer
        .collect_trace_data(&mut collector)
        .context("Failed to collect trace data")?;
    info!("Drain: {}", stats.summary());

    let audit = tracer.feed().audit();
    debug!(
        "Records retrieved {}, released {}",
        audit.retrieved, audit.released
    );

    info!("Step 4/4: Writing events...");
    let export = EventExport::new(tracer.tracing_start_ns(), stats, collector.into_events());

    match &args.output {
        Some(path) => {
            write_events(&export, path).context("Failed to write events JSON")?;
            info!("✓ Events written to: {}", path.display());
        }
        None => {
            println!("{}", events_to_string(&export).context("Failed to serialize events")?);
        }
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("TRACE SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Recording:      {}", args.input.display());
        println!("Session start:  {} ns", export.session_start_ns);
        println!("Records:        {}", stats.retrieved);
        println!("Runtime events: {}", stats.runtime_events);
        println!("Device events:  {}", stats.device_events);
        println!("Dropped stale:  {}", stats.dropped_stale);
        println!("Dropped other:  {}", stats.dropped_unknown);
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Replay completed in {:.2}s", elapsed.as_secs_f64());

    Ok(export)
}

/// Validate replay arguments
///
/// **Public** - can be called before execute_replay for early validation
pub fn validate_args(args: &ReplayArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Recording path cannot be empty");
    }

    if !args.input.exists() {
        anyhow::bail!("Recording not found: {}", args.input.display());
    }

    if args.input.is_dir() {
        anyhow::bail!("Recording path is a directory: {}", args.input.display());
    }

    if let Some(output) = &args.output {
        if output == &args.input {
            anyhow::bail!("Output path must differ from the recording path");
        }
    }

    Ok(())
}
