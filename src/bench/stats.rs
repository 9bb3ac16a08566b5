//! Summary statistics over collected run histories

use serde::Serialize;

use super::runner::VariantHistory;

/// Aggregate statistics for one variant, derived from its run history.
///
/// Recomputed wholesale by [`summarize`]; never mutated in place.
#[derive(Debug, Clone, Serialize)]
pub struct VariantSummary {
    pub label: String,
    pub time_mean: f64,
    pub time_median: f64,
    pub mem_mean: f64,
    pub mem_median: f64,
}

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Middle value, or the average of the two middle values; 0 for an empty slice.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Compute a [`VariantSummary`] per variant with at least one sample.
///
/// Variants whose history is empty (every run failed) are excluded rather
/// than reported as zeros, so downstream tables and charts never show a
/// variant that produced no data.
pub fn summarize(histories: &[VariantHistory]) -> Vec<VariantSummary> {
    histories
        .iter()
        .filter(|h| !h.samples.is_empty())
        .map(|h| {
            let times: Vec<f64> = h.samples.iter().map(|s| s.elapsed_ms).collect();
            let mems: Vec<f64> = h.samples.iter().map(|s| s.peak_memory_kb).collect();
            VariantSummary {
                label: h.variant.label.clone(),
                time_mean: mean(&times),
                time_median: median(&times),
                mem_mean: mean(&mems),
                mem_median: median(&mems),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{Sample, Variant};

    fn history(label: &str, times: &[f64]) -> VariantHistory {
        VariantHistory {
            variant: Variant::new(label, "/bin/true", &[]),
            samples: times
                .iter()
                .map(|t| Sample {
                    elapsed_ms: *t,
                    peak_memory_kb: *t * 10.0,
                    memory_measured: true,
                })
                .collect(),
        }
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[9.0, 1.0, 5.0]), 5.0);
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn test_summarize_matches_sample_mean() {
        let histories = vec![history("A", &[10.0, 20.0, 30.0, 40.0])];
        let summaries = summarize(&histories);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].time_mean, 25.0);
        assert_eq!(summaries[0].time_median, 25.0);
        assert_eq!(summaries[0].mem_mean, 250.0);
    }

    #[test]
    fn test_summarize_excludes_empty_histories() {
        let histories = vec![
            history("Populated", &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]),
            history("Empty", &[]),
        ];
        let summaries = summarize(&histories);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].label, "Populated");
    }
}
