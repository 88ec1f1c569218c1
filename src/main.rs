//! XPU Tracer CLI
//!
//! Replays recorded accelerator activity through the tracer lifecycle and
//! prints the normalized trace events.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use xpu_tracer::commands::{display_version, execute_replay, run_probe, validate_args, ReplayArgs};
use xpu_tracer::utils::config::FailurePolicy;

/// XPU Tracer - activity tracing for accelerators
#[derive(Parser, Debug)]
#[command(name = "xpu-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a recording of vendor records through a tracing session
    Replay {
        /// Recording file (JSON array of vendor records, or records plus scripted failures)
        #[arg(short, long)]
        input: PathBuf,

        /// Session start timestamp in nanoseconds; earlier records are dropped
        #[arg(short, long, default_value = "0")]
        session_start: u64,

        /// Output path for the event export (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print drain summary to stdout
        #[arg(long)]
        summary: bool,

        /// Report vendor failures as errors instead of exiting
        #[arg(long)]
        no_abort: bool,
    },

    /// Run a tracing session against the null feed
    Probe,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Replay {
            input,
            session_start,
            output,
            summary,
            no_abort,
        } => {
            let args = ReplayArgs {
                input,
                session_start_ns: session_start,
                output,
                print_summary: summary,
                failure_policy: if no_abort {
                    FailurePolicy::Propagate
                } else {
                    FailurePolicy::Abort
                },
            };

            // Validate args first
            validate_args(&args)?;

            execute_replay(args)?;
        }

        Commands::Probe => {
            run_probe()?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
