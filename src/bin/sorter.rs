//! Native Sortable-Target
//!
//! Reads `arq.txt`, sorts it with the algorithm named on the command line,
//! writes `arq-saida.txt`, and prints a report whose `Time:` line (whole
//! sort elapsed, milliseconds) is what the harness parses. A nonzero exit
//! code forfeits the run.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use sortbench::sorting::{self, Algorithm, INPUT_FILE, OUTPUT_FILE};

#[derive(Parser)]
#[command(name = "sorter")]
#[command(about = "Sorts the shared integer file and reports elapsed time", long_about = None)]
struct Cli {
    /// Sorting algorithm to run
    #[arg(value_enum)]
    algorithm: Algorithm,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut numbers = match sorting::read_numbers(Path::new(INPUT_FILE)) {
        Ok(numbers) => numbers,
        Err(e) => {
            eprintln!(
                "Error: could not read '{}': {}. Generate it with sortbench-gen first.",
                INPUT_FILE, e
            );
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    cli.algorithm.apply(&mut numbers);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if let Err(e) = sorting::write_numbers(Path::new(OUTPUT_FILE), &numbers) {
        eprintln!("Error: could not write '{}': {}", OUTPUT_FILE, e);
        return ExitCode::FAILURE;
    }

    println!("--- System Info ---");
    println!("Language: Rust");
    println!("System: {} {}", std::env::consts::OS, std::env::consts::ARCH);
    println!("Elements: {}", numbers.len());
    println!();
    println!("--- Performance ---");
    println!("Time: {:.4}", elapsed_ms);
    println!("Memory: N/A");

    ExitCode::SUCCESS
}
