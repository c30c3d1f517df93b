//! `qanomaly` command-line entry point.
//!
//! Usage: `qanomaly [--random] [--seed N] [--no-visualization]`

use std::error::Error;
use std::process;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use qanomaly::{ConsoleSink, Pipeline, RunConfig, Simulator};

#[derive(Parser, Debug)]
#[command(name = "qanomaly")]
#[command(about = "Quantum Anomaly Detector: compare an expected qubit state against a perturbed one")]
struct Args {
    /// Run without displaying visualization
    #[arg(long)]
    no_visualization: bool,

    /// Use randomized anomalous states
    #[arg(long)]
    random: bool,

    /// Set random seed for reproducible results
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i128>,
}

/// Initialize logging with a default filter.
///
/// Use `RUST_LOG` environment variable to override the default filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_header() {
    println!(
        r#"
╔═══════════════════════════════════════════════════════════╗
║                                                           ║
║   🔬 Quantum Anomaly Detector - Proof of Concept 🧪       ║
║                                                           ║
╚═══════════════════════════════════════════════════════════╝
"#
    );
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = RunConfig::from_cli(args.random, args.seed, args.no_visualization)?;
    if let Some(seed) = config.seed() {
        println!("Random seed set to: {}", seed);
    }

    let pipeline = Pipeline::new(config, Simulator::new());
    pipeline.run(&mut ConsoleSink::stdout())?;

    println!("\n✅ Simulation completed successfully");
    Ok(())
}

fn main() {
    init_logging();

    let args = Args::parse();
    print_header();

    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}
