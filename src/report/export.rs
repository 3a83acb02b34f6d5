//! Filtered-view CSV export and JSON run reports

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use polars::prelude::*;
use serde::Serialize;

use crate::pipeline::{ColumnStats, FilterCriteria, Summary};

/// Metadata about a pipeline run
#[derive(Serialize)]
pub struct RunMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// NutriChoice version
    pub nutrichoice_version: String,
    /// Input file path
    pub input_file: String,
    /// Search term, if one was applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    /// Inclusive calorie bounds applied
    pub calorie_range: (f64, f64),
    /// Inclusive protein bounds applied
    pub protein_range: (f64, f64),
    /// Rows in the full dataset
    pub rows_total: usize,
    /// Rows surviving the filters
    pub rows_matched: usize,
}

/// Complete run report: metadata, KPI summary and per-column statistics
#[derive(Serialize)]
pub struct RunReport {
    pub metadata: RunMetadata,
    pub summary: Summary,
    pub statistics: Vec<ColumnStats>,
}

/// Assemble a run report for JSON export.
pub fn build_run_report(
    input: &Path,
    criteria: &FilterCriteria,
    rows_total: usize,
    rows_matched: usize,
    summary: Summary,
    statistics: Vec<ColumnStats>,
) -> RunReport {
    RunReport {
        metadata: RunMetadata {
            timestamp: Utc::now().to_rfc3339(),
            nutrichoice_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: input.display().to_string(),
            search_text: criteria.search_text.clone(),
            calorie_range: criteria.calorie_range,
            protein_range: criteria.protein_range,
            rows_total,
            rows_matched,
        },
        summary,
        statistics,
    }
}

/// Write the run report as pretty-printed JSON.
pub fn write_json_report(report: &RunReport, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(report).context("Failed to serialize run report to JSON")?;

    std::fs::write(path, json)
        .with_context(|| format!("Failed to write run report to {}", path.display()))?;

    Ok(())
}

/// Re-serialize the current filtered view as a plain CSV file.
pub fn write_filtered_csv(view: &DataFrame, path: &Path) -> Result<()> {
    let mut out = view.clone();
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut out)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    Ok(())
}
