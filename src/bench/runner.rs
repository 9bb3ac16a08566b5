//! Benchmark runner: drives the process monitor over the variant table
//!
//! Runs are strictly sequential with exactly one live child at a time so
//! the harness never competes with its subject for CPU or memory.

use tracing::{info, warn};

use crate::config::BenchConfig;
use crate::monitor::{MonitorError, ProcessMonitor, Sample, Variant};

/// Ordered run results for one variant (insertion order = execution order).
///
/// Owned by the runner while the session is live, returned by value once it
/// completes; append-only during collection, read-only afterwards.
#[derive(Debug, Clone)]
pub struct VariantHistory {
    pub variant: Variant,
    pub samples: Vec<Sample>,
}

/// Executes every configured variant `num_runs` times and collects samples.
pub struct BenchmarkRunner {
    config: BenchConfig,
}

impl BenchmarkRunner {
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    /// Run the whole session.
    ///
    /// Per-run failures are logged and the loop continues; only a missing
    /// target executable aborts the session, discarding any histories that
    /// were already collected (a misconfigured environment invalidates the
    /// whole comparison, not just the variant that tripped on it).
    pub fn run(&self) -> Result<Vec<VariantHistory>, MonitorError> {
        let monitor = ProcessMonitor::new(self.config.poll_interval);
        let mut histories = Vec::with_capacity(self.config.variants.len());

        for variant in &self.config.variants {
            info!(
                label = %variant.label,
                runs = self.config.num_runs,
                "benchmarking variant"
            );

            let mut samples = Vec::with_capacity(self.config.num_runs);
            for round in 1..=self.config.num_runs {
                match monitor.run(variant) {
                    Ok(sample) => {
                        if !sample.memory_measured {
                            info!(
                                label = %variant.label,
                                round,
                                "target finished before any memory poll; peak recorded as 0"
                            );
                        }
                        samples.push(sample);
                    }
                    Err(err) if err.is_fatal() => return Err(err),
                    Err(err) => {
                        warn!(
                            label = %variant.label,
                            round,
                            total = self.config.num_runs,
                            "run discarded: {}",
                            err
                        );
                    }
                }
            }

            histories.push(VariantHistory {
                variant: variant.clone(),
                samples,
            });
        }

        Ok(histories)
    }
}
