//! Descriptive statistics over a filtered view
//!
//! Unlike the KPI summary, an empty view yields count 0 and NaN
//! statistics here. The two contracts are intentionally distinct and
//! callers must not conflate them.

use polars::prelude::*;
use serde::Serialize;

use super::error::PipelineError;
use super::loader::CORE_NUMERIC_COLUMNS;

/// Descriptive statistics for one nutrient column.
///
/// Standard deviation is the sample deviation (ddof = 1); quartiles use
/// linear interpolation. Nulls are excluded from all statistics.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnStats {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Compute descriptive statistics for each core nutrient column.
pub fn describe(view: &DataFrame) -> Result<Vec<ColumnStats>, PipelineError> {
    CORE_NUMERIC_COLUMNS
        .iter()
        .map(|column| column_stats(view, column))
        .collect()
}

fn column_stats(view: &DataFrame, column: &str) -> Result<ColumnStats, PipelineError> {
    let series = view
        .column(column)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;

    let mut values: Vec<f64> = series.f64()?.into_iter().flatten().collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = values.len();
    if count == 0 {
        return Ok(ColumnStats {
            column: column.to_string(),
            count: 0,
            mean: f64::NAN,
            std_dev: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        });
    }

    let mean = values.iter().sum::<f64>() / count as f64;
    let std_dev = if count < 2 {
        f64::NAN
    } else {
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        variance.sqrt()
    };

    Ok(ColumnStats {
        column: column.to_string(),
        count,
        mean,
        std_dev,
        min: values[0],
        q25: quantile(&values, 0.25),
        median: quantile(&values, 0.5),
        q75: quantile(&values, 0.75),
        max: values[count - 1],
    })
}

/// Linearly interpolated quantile over a sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let below = position.floor() as usize;
    let above = position.ceil() as usize;
    if below == above {
        sorted[below]
    } else {
        sorted[below] + (position - below as f64) * (sorted[above] - sorted[below])
    }
}
