//! KPI summary and top-N ranking over a filtered view

use std::collections::HashSet;

use polars::prelude::*;
use serde::Serialize;

use super::error::PipelineError;
use super::loader::{is_nutrient_column, COL_CALORIES, COL_CARBS, COL_FAT, COL_FOOD, COL_PROTEIN};

/// Key summary scalars over a filtered view.
///
/// Every numeric field is defined as 0 when the view is empty; the
/// highest-calorie food is `None`. An empty view is never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of distinct food names in the view
    pub food_count: usize,
    /// Arithmetic mean of caloric value (kcal)
    pub avg_calories: f64,
    /// Arithmetic mean of protein content (g)
    pub avg_protein: f64,
    /// Arithmetic mean of fat content (g)
    pub avg_fat: f64,
    /// Arithmetic mean of carbohydrate content (g)
    pub avg_carbohydrates: f64,
    /// Total protein mass across the view (g)
    pub total_protein: f64,
    /// Total fat mass across the view (g)
    pub total_fat: f64,
    /// Total carbohydrate mass across the view (g)
    pub total_carbohydrates: f64,
    /// Name of the food with the highest caloric value, first
    /// occurrence on ties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_calorie_food: Option<String>,
}

impl Summary {
    fn empty() -> Self {
        Self {
            food_count: 0,
            avg_calories: 0.0,
            avg_protein: 0.0,
            avg_fat: 0.0,
            avg_carbohydrates: 0.0,
            total_protein: 0.0,
            total_fat: 0.0,
            total_carbohydrates: 0.0,
            max_calorie_food: None,
        }
    }
}

/// Compute the KPI summary for a filtered view.
pub fn summarize(view: &DataFrame) -> Result<Summary, PipelineError> {
    if view.height() == 0 {
        return Ok(Summary::empty());
    }

    let names = view.column(COL_FOOD)?.as_materialized_series();
    let names = names.str()?;
    let food_count = names.into_iter().flatten().collect::<HashSet<_>>().len();

    let max_calorie_food = match arg_max(view, COL_CALORIES)? {
        Some(row) => names.get(row).map(String::from),
        None => None,
    };

    Ok(Summary {
        food_count,
        avg_calories: column_mean(view, COL_CALORIES)?,
        avg_protein: column_mean(view, COL_PROTEIN)?,
        avg_fat: column_mean(view, COL_FAT)?,
        avg_carbohydrates: column_mean(view, COL_CARBS)?,
        total_protein: column_sum(view, COL_PROTEIN)?,
        total_fat: column_sum(view, COL_FAT)?,
        total_carbohydrates: column_sum(view, COL_CARBS)?,
        max_calorie_food,
    })
}

/// The `n` rows with the largest value of `column`, returned ascending
/// by that column so a horizontal-bar rendering shows the largest value
/// at the top.
///
/// Selection is stable: ties keep their original relative order. When
/// `n` exceeds the view size the whole view is returned sorted
/// ascending. Rows with a null in `column` are never selected.
pub fn top_n(view: &DataFrame, column: &str, n: usize) -> Result<DataFrame, PipelineError> {
    if !is_nutrient_column(view, column) {
        return Err(PipelineError::InvalidColumn {
            column: column.to_string(),
        });
    }

    let series = view
        .column(column)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let values = series.f64()?;

    let mut ranked: Vec<(usize, f64)> = values
        .into_iter()
        .enumerate()
        .filter_map(|(row, value)| value.map(|v| (row, v)))
        .collect();

    // Stable descending sort keeps original order within ties
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(n);
    ranked.reverse();

    let indices: Vec<IdxSize> = ranked.iter().map(|(row, _)| *row as IdxSize).collect();
    let indices = IdxCa::from_vec("rank_idx".into(), indices);
    Ok(view.take(&indices)?)
}

fn arg_max(view: &DataFrame, column: &str) -> Result<Option<usize>, PipelineError> {
    let series = view
        .column(column)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let values = series.f64()?;

    let mut best: Option<(usize, f64)> = None;
    for (row, value) in values.into_iter().enumerate() {
        if let Some(value) = value {
            if best.map(|(_, b)| value > b).unwrap_or(true) {
                best = Some((row, value));
            }
        }
    }
    Ok(best.map(|(row, _)| row))
}

fn column_mean(view: &DataFrame, column: &str) -> Result<f64, PipelineError> {
    let series = view
        .column(column)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(series.f64()?.mean().unwrap_or(0.0))
}

fn column_sum(view: &DataFrame, column: &str) -> Result<f64, PipelineError> {
    let series = view
        .column(column)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(series.f64()?.sum().unwrap_or(0.0))
}
