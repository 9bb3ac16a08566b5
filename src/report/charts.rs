//! Bar-chart rendering
//!
//! One PNG per metric (mean/median time, mean/median peak memory), one bar
//! per variant. Time axes are log-scaled since a quadratic sort against a
//! platform sort spans several orders of magnitude.

use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::info;

use crate::bench::VariantSummary;

const CHART_SIZE: (u32, u32) = (1000, 620);

/// Smallest value drawable on the log-scaled time axes.
const LOG_FLOOR: f64 = 1e-3;

struct Metric {
    file: &'static str,
    title: &'static str,
    y_desc: &'static str,
    log_scale: bool,
    color: RGBColor,
    pick: fn(&VariantSummary) -> f64,
}

const METRICS: [Metric; 4] = [
    Metric {
        file: "chart_mean_time.png",
        title: "Mean Execution Time per Variant",
        y_desc: "Time (ms)",
        log_scale: true,
        color: RGBColor(102, 153, 204),
        pick: |s| s.time_mean,
    },
    Metric {
        file: "chart_median_time.png",
        title: "Median Execution Time per Variant",
        y_desc: "Time (ms)",
        log_scale: true,
        color: RGBColor(119, 187, 119),
        pick: |s| s.time_median,
    },
    Metric {
        file: "chart_mean_memory.png",
        title: "Mean Peak Memory per Variant",
        y_desc: "Peak Memory (KB)",
        log_scale: false,
        color: RGBColor(233, 139, 126),
        pick: |s| s.mem_mean,
    },
    Metric {
        file: "chart_median_memory.png",
        title: "Median Peak Memory per Variant",
        y_desc: "Peak Memory (KB)",
        log_scale: false,
        color: RGBColor(191, 145, 200),
        pick: |s| s.mem_median,
    },
];

/// Render all four metric charts into `out_dir`.
///
/// Callers must not pass an empty summary set; the harness skips plotting
/// entirely when no variant produced data.
pub fn render_all(
    summaries: &[VariantSummary],
    out_dir: &Path,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let labels: Vec<String> = summaries.iter().map(|s| s.label.clone()).collect();
    let mut written = Vec::with_capacity(METRICS.len());

    for metric in &METRICS {
        let values: Vec<f64> = summaries.iter().map(metric.pick).collect();
        let path = out_dir.join(metric.file);
        if metric.log_scale {
            draw_log(&path, metric, &labels, &values)?;
        } else {
            draw_linear(&path, metric, &labels, &values)?;
        }
        info!(chart = %path.display(), "chart written");
        written.push(path);
    }

    Ok(written)
}

fn draw_linear(
    path: &Path,
    metric: &Metric,
    labels: &[String],
    values: &[f64],
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    let top = if max > 0.0 { max * 1.15 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(metric.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d((0..labels.len()).into_segmented(), 0.0..top)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|seg| segment_label(seg, labels))
        .y_desc(metric.y_desc)
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(i, v)| {
        let mut bar = Rectangle::new(
            [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), *v)],
            metric.color.filled(),
        );
        bar.set_margin(0, 0, 14, 14);
        bar
    }))?;

    root.present()?;
    Ok(())
}

fn draw_log(
    path: &Path,
    metric: &Metric,
    labels: &[String],
    values: &[f64],
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let max = values.iter().cloned().fold(LOG_FLOOR, f64::max);
    let min = values
        .iter()
        .cloned()
        .filter(|v| *v > 0.0)
        .fold(max, f64::min)
        .max(LOG_FLOOR);
    let bottom = min / 2.0;
    let top = max * 2.0;

    let mut chart = ChartBuilder::on(&root)
        .caption(metric.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d((0..labels.len()).into_segmented(), (bottom..top).log_scale())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|seg| segment_label(seg, labels))
        .y_desc(metric.y_desc)
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(i, v)| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), bottom),
                (SegmentValue::Exact(i + 1), v.max(bottom)),
            ],
            metric.color.filled(),
        );
        bar.set_margin(0, 0, 14, 14);
        bar
    }))?;

    root.present()?;
    Ok(())
}

fn segment_label(seg: &SegmentValue<usize>, labels: &[String]) -> String {
    match seg {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
            labels.get(*i).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(label: &str, time: f64, mem: f64) -> VariantSummary {
        VariantSummary {
            label: label.to_string(),
            time_mean: time,
            time_median: time * 0.9,
            mem_mean: mem,
            mem_median: mem * 0.95,
        }
    }

    #[test]
    fn test_renders_one_file_per_metric() {
        let dir = tempfile::tempdir().unwrap();
        let summaries = vec![
            summary("Rust_Bubble", 850.0, 4096.0),
            summary("Rust_Efficient", 0.4, 3900.0),
        ];

        // Font availability varies across environments.
        match render_all(&summaries, dir.path()) {
            Ok(paths) => {
                assert_eq!(paths.len(), 4);
                for path in paths {
                    let meta = std::fs::metadata(&path).unwrap();
                    assert!(meta.len() > 0, "empty chart at {}", path.display());
                }
            }
            Err(e) => eprintln!("chart rendering unavailable: {}", e),
        }
    }

    #[test]
    fn test_zero_memory_still_renders() {
        // A session where every run finished before a poll reports 0 KB.
        let dir = tempfile::tempdir().unwrap();
        let summaries = vec![summary("Rust_Efficient", 0.4, 0.0)];
        if let Err(e) = render_all(&summaries, dir.path()) {
            eprintln!("chart rendering unavailable: {}", e);
        }
    }
}
