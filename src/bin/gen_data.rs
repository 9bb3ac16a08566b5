//! Dataset generator
//!
//! Writes the newline-delimited integer list the sorting targets consume.
//! Seedable so a benchmark session can be repeated on identical input.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sortbench::sorting::{self, INPUT_FILE};

#[derive(Parser)]
#[command(name = "sortbench-gen")]
#[command(about = "Generates the random integer list the sorting targets read", long_about = None)]
struct Cli {
    /// Number of integers to generate
    #[arg(short, long, default_value = "10000")]
    count: usize,

    /// RNG seed; omit for a random dataset
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output path
    #[arg(short, long, default_value = INPUT_FILE)]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let numbers: Vec<i64> = (0..cli.count).map(|_| rng.gen_range(0..1_000_000)).collect();

    if let Err(e) = sorting::write_numbers(&cli.output, &numbers) {
        eprintln!("Error: could not write '{}': {}", cli.output.display(), e);
        return ExitCode::FAILURE;
    }

    println!("Wrote {} integers to {}", cli.count, cli.output.display());
    ExitCode::SUCCESS
}
