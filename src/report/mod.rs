//! Result presentation: summary table, chart images, JSON artifact

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::bench::VariantSummary;

pub mod charts;
pub mod table;

pub use charts::render_all;

/// Persist the summary set as a JSON array.
pub fn write_summary_json(path: &Path, summaries: &[VariantSummary]) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(summaries)?;
    fs::write(path, json)?;
    Ok(())
}
