//! Benchmark execution and aggregation
//!
//! The runner drives the process monitor over the configured variant table;
//! stats turns the collected histories into per-variant summaries.

pub mod runner;
pub mod stats;

pub use runner::{BenchmarkRunner, VariantHistory};
pub use stats::{summarize, VariantSummary};
