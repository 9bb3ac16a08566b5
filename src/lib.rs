//! sortbench — sorting-strategy benchmark harness
//!
//! Benchmarks bubble sort against the platform sort across two process
//! runtimes (a native binary and a Python script), sampling each target's
//! peak resident memory and parsing its self-reported elapsed time, then
//! aggregating repeated runs into mean/median summaries with a table and
//! bar-chart output.
//!
//! ## Structure
//!
//! - [`monitor`]: launches one target, polls its RSS until exit, parses
//!   the `Time:` line from its stdout
//! - [`bench`]: runs every variant N times sequentially and derives
//!   per-variant summaries
//! - [`report`]: summary table, four PNG bar charts, JSON artifact
//! - [`config`]: the fixed in-process benchmark table
//! - [`sorting`]: the algorithms and file helpers behind the native target
//!
//! ## Measurement caveats
//!
//! Peak memory is sampled (10 ms ticks) and under-counts short spikes;
//! elapsed time is whatever the target prints, so process startup and file
//! I/O inside the target are part of the metric. Neither is corrected for.

pub mod bench;
pub mod config;
pub mod monitor;
pub mod report;
pub mod sorting;

// Re-exports
pub use bench::{summarize, BenchmarkRunner, VariantHistory, VariantSummary};
pub use config::BenchConfig;
pub use monitor::{MonitorError, ProcessMonitor, Sample, Variant};
