//! Benchmark configuration
//!
//! The variant table and run count are a fixed in-process table; the
//! harness deliberately takes no flags, so a session is reproducible from
//! the source alone.

use std::path::PathBuf;
use std::time::Duration;

use crate::monitor::{Variant, DEFAULT_POLL_INTERVAL};

/// Harness configuration
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Monitored runs per variant
    pub num_runs: usize,

    /// Pause between resident-memory polls
    pub poll_interval: Duration,

    /// Directory the chart images are written to
    pub chart_dir: PathBuf,

    /// Path of the JSON summary artifact
    pub summary_json: PathBuf,

    /// Variants to benchmark, in execution order
    pub variants: Vec<Variant>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            num_runs: 10,
            poll_interval: DEFAULT_POLL_INTERVAL,
            chart_dir: PathBuf::from("."),
            summary_json: PathBuf::from("summary.json"),
            variants: default_variants(),
        }
    }
}

/// The fixed benchmark table: bubble and platform sort, once through the
/// native `sorter` binary and once through the Python script.
fn default_variants() -> Vec<Variant> {
    let sorter = native_sorter_path();
    let python = python_interpreter();

    vec![
        Variant::new("Rust_Bubble", &sorter, &["bubble"]),
        Variant::new("Rust_Efficient", &sorter, &["efficient"]),
        Variant::new("Python_Bubble", python, &["scripts/sorter.py", "bubble"]),
        Variant::new("Python_Efficient", python, &["scripts/sorter.py", "efficient"]),
    ]
}

/// The `sorter` binary is built alongside the harness, so look for it next
/// to the running executable.
fn native_sorter_path() -> PathBuf {
    let name = if cfg!(windows) { "sorter.exe" } else { "sorter" };
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(name)))
        .unwrap_or_else(|| PathBuf::from(name))
}

fn python_interpreter() -> &'static str {
    if cfg!(windows) {
        "python"
    } else {
        "python3"
    }
}
