use crate::collector::EventCollector;
use crate::tracer::{DrainStats, XpuTracer};
use crate::utils::config::SCHEMA_VERSION;
use crate::vendor::NullFeed;
use anyhow::{Context, Result};

/// Run a full session against the null feed.
///
/// Exercises the lifecycle on hosts without tracing hardware.
pub fn run_probe() -> Result<DrainStats> {
    let mut tracer = XpuTracer::new(NullFeed);

    tracer.prepare_tracing().context("Failed to prepare tracing")?;
    tracer.start_tracing().context("Failed to start tracing")?;
    tracer.stop_tracing().context("Failed to stop tracing")?;

    let mut collector = EventCollector::new();
    let stats = tracer
        .collect_trace_data(&mut collector)
        .context("Failed to collect trace data")?;

    println!("✓ Tracer lifecycle completed (null feed)");
    println!("  Session start: {} ns", tracer.tracing_start_ns());
    println!("  Events:        {}", collector.len());

    Ok(stats)
}

/// Display version information
pub fn display_version() {
    println!("XPU Tracer v{}", env!("CARGO_PKG_VERSION"));
    println!("Event Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Activity tracing adapter for accelerator event records.");
}
