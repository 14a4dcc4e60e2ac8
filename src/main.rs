//! Command-line beacon map reconstruction.
//!
//! Reads a scan set text file, registers every scan into a shared global
//! frame, and prints the distinct beacon count and the maximum Manhattan
//! distance between scanner origins.
//!
//! ```bash
//! cargo run --release -- scans.txt
//! cargo run --release -- scans.txt --config configs/tara.toml
//! RUST_LOG=debug cargo run --release -- scans.txt
//! ```

use std::path::PathBuf;

use clap::Parser;

use tara_map::io::read_scan_set;
use tara_map::{BruteForceAligner, RegistrationEngine, TaraConfig};

/// Reconstruct a global beacon map from unaligned scanner readings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scan set text file (`--- scanner N ---` headers, `x,y,z` lines)
    input: PathBuf,

    /// Configuration file (TOML); built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => TaraConfig::load(path)?,
        None => TaraConfig::load_default()?,
    };

    let scans = read_scan_set(&args.input)?;
    let engine = RegistrationEngine::new(
        BruteForceAligner::new(config.matcher),
        config.registration,
    );
    let report = engine.run(scans)?;

    println!("distinct beacons: {}", report.map.beacon_count());
    match report.map.max_scanner_separation() {
        Some(d) => println!("max scanner separation: {}", d),
        None => println!("max scanner separation: n/a (single scanner)"),
    }

    Ok(())
}
