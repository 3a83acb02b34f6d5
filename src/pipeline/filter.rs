//! Row filtering over the food dataset
//!
//! All predicates are conjunctive: a row survives only when the search
//! term matches the food name (case-insensitive substring), the caloric
//! value lies within the calorie range, and the protein content lies
//! within the protein range. Bounds are inclusive. Original row order is
//! preserved and an empty result is a valid, empty frame.

use polars::prelude::*;

use super::error::PipelineError;
use super::loader::{COL_CALORIES, COL_FOOD, COL_PROTEIN};

/// User-chosen constraints applied to narrow the dataset.
///
/// Created fresh per interaction; ranges are seeded from the dataset's
/// own observed min/max so the default criteria match every row.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the food name.
    /// `None` or an empty string means no name filtering.
    pub search_text: Option<String>,
    /// Inclusive (min, max) bounds on caloric value.
    pub calorie_range: (f64, f64),
    /// Inclusive (min, max) bounds on protein content.
    pub protein_range: (f64, f64),
}

impl FilterCriteria {
    /// Seed criteria from the observed min/max of the dataset so that
    /// applying them unchanged retains every row. An empty dataset
    /// seeds both ranges as (0, 0).
    pub fn seeded_from(df: &DataFrame) -> Result<Self, PipelineError> {
        Ok(Self {
            search_text: None,
            calorie_range: observed_range(df, COL_CALORIES)?,
            protein_range: observed_range(df, COL_PROTEIN)?,
        })
    }
}

fn observed_range(df: &DataFrame, column: &str) -> Result<(f64, f64), PipelineError> {
    let series = df
        .column(column)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let values = series.f64()?;
    match (values.min(), values.max()) {
        (Some(min), Some(max)) => Ok((min, max)),
        _ => Ok((0.0, 0.0)),
    }
}

/// Retain only rows matching all criteria, preserving original order.
///
/// A null food name never matches a non-empty search, and a null
/// nutrient value never satisfies a range.
pub fn apply_filters(df: &DataFrame, criteria: &FilterCriteria) -> Result<DataFrame, PipelineError> {
    if df.height() == 0 {
        return Ok(df.clone());
    }

    let needle = criteria
        .search_text
        .as_deref()
        .map(str::to_lowercase)
        .filter(|s| !s.is_empty());

    let names = df.column(COL_FOOD)?.as_materialized_series();
    let names = names.str()?;

    let calories = df
        .column(COL_CALORIES)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let calories = calories.f64()?;

    let protein = df
        .column(COL_PROTEIN)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let protein = protein.f64()?;

    let mut mask = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let name_ok = match &needle {
            None => true,
            Some(needle) => names
                .get(i)
                .map(|name| name.to_lowercase().contains(needle.as_str()))
                .unwrap_or(false),
        };
        let row_ok = name_ok
            && in_range(calories.get(i), criteria.calorie_range)
            && in_range(protein.get(i), criteria.protein_range);
        mask.push(row_ok);
    }

    let mask = BooleanChunked::from_slice("filter_mask".into(), &mask);
    Ok(df.filter(&mask)?)
}

fn in_range(value: Option<f64>, (min, max): (f64, f64)) -> bool {
    value.map(|v| v >= min && v <= max).unwrap_or(false)
}
