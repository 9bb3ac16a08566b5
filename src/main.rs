//! Benchmark harness entry point
//!
//! Takes no flags: the run count and variant table are fixed in
//! [`sortbench::config`]. Generate `arq.txt` with `sortbench-gen` and
//! build the targets before running.

use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use sortbench::report::{self, charts, table};
use sortbench::{summarize, BenchConfig, BenchmarkRunner, MonitorError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = BenchConfig::default();
    let runner = BenchmarkRunner::new(config.clone());

    let histories = match runner.run() {
        Ok(histories) => histories,
        Err(e @ MonitorError::TargetNotFound(_)) => {
            error!("{}", e);
            error!("Build the targets first (cargo build --release) and check that python3 is installed.");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    let summaries = summarize(&histories);

    println!("\n--- Benchmark Results ---");
    print!("{}", table::render(&summaries));

    if summaries.is_empty() {
        println!("\nNo variant produced a successful run; skipping charts.");
        return Ok(());
    }

    report::write_summary_json(&config.summary_json, &summaries)?;
    println!("\nSummary written to {}", config.summary_json.display());

    let chart_paths = charts::render_all(&summaries, &config.chart_dir)?;
    for path in chart_paths {
        println!("Chart written to {}", path.display());
    }

    Ok(())
}
