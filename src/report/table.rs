//! Fixed-width summary table

use std::fmt::Write;

use crate::bench::VariantSummary;

/// Render the summary table as a string.
///
/// Column layout mirrors the chart metrics: mean/median time in
/// milliseconds, mean/median peak memory in KiB.
pub fn render(summaries: &[VariantSummary]) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<20} | {:<20} | {:<20} | {:<22} | {:<22}",
        "Variant", "Mean Time (ms)", "Median Time (ms)", "Mean Memory (KB)", "Median Memory (KB)"
    );
    let _ = writeln!(out, "{}", "-".repeat(110));

    for s in summaries {
        let _ = writeln!(
            out,
            "{:<20} | {:<20.4} | {:<20.4} | {:<22.4} | {:<22.4}",
            s.label, s.time_mean, s.time_median, s.mem_mean, s.mem_median
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(label: &str) -> VariantSummary {
        VariantSummary {
            label: label.to_string(),
            time_mean: 12.3456,
            time_median: 11.5,
            mem_mean: 2048.0,
            mem_median: 2000.0,
        }
    }

    #[test]
    fn test_table_contains_labels_and_values() {
        let rendered = render(&[summary("Rust_Bubble"), summary("Python_Bubble")]);
        assert!(rendered.contains("Rust_Bubble"));
        assert!(rendered.contains("Python_Bubble"));
        assert!(rendered.contains("12.3456"));
        assert!(rendered.contains("2048.0000"));
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let rendered = render(&[]);
        assert!(rendered.contains("Variant"));
        assert!(rendered.contains("Median Memory (KB)"));
        assert_eq!(rendered.lines().count(), 2);
    }
}
