//! Dataset loader for the food nutrition CSV

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use super::error::PipelineError;

/// Column holding the food label.
pub const COL_FOOD: &str = "food";
/// Caloric value in kcal.
pub const COL_CALORIES: &str = "Caloric Value";
/// Protein content in grams.
pub const COL_PROTEIN: &str = "Protein";
/// Fat content in grams.
pub const COL_FAT: &str = "Fat";
/// Carbohydrate content in grams.
pub const COL_CARBS: &str = "Carbohydrates";

/// The numeric columns every dataset must carry. Additional nutrient
/// columns may be present and pass through unmodified.
pub const CORE_NUMERIC_COLUMNS: [&str; 4] = [COL_CALORIES, COL_PROTEIN, COL_FAT, COL_CARBS];

/// Load the food dataset from a CSV file and validate its schema.
///
/// The dataset is loaded once per process and treated as immutable for
/// the lifetime of a session; every downstream operation produces new
/// derived frames. A missing or unparsable file is a fatal load error.
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    // 0 means full table scan
    let schema_length = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(schema_length)
        .finish()
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?
        .collect()
        .with_context(|| format!("Failed to load CSV file: {}", path.display()))?;

    validate_schema(&df)?;
    Ok(df)
}

/// Check that the dataset carries the required columns with usable types.
///
/// The column names are a hard contract: `food` must be textual and the
/// four core nutrient columns must be numeric.
pub fn validate_schema(df: &DataFrame) -> Result<(), PipelineError> {
    let food = df
        .column(COL_FOOD)
        .map_err(|_| PipelineError::MissingColumn {
            column: COL_FOOD.to_string(),
        })?;
    if !matches!(food.dtype(), DataType::String) {
        return Err(PipelineError::NotText {
            column: COL_FOOD.to_string(),
            dtype: food.dtype().to_string(),
        });
    }

    for name in CORE_NUMERIC_COLUMNS {
        let column = df.column(name).map_err(|_| PipelineError::MissingColumn {
            column: name.to_string(),
        })?;
        if !column.dtype().is_primitive_numeric() {
            return Err(PipelineError::NotNumeric {
                column: name.to_string(),
                dtype: column.dtype().to_string(),
            });
        }
    }

    Ok(())
}

/// True when `column` names a numeric nutrient field of the dataset,
/// i.e. any numeric column other than the food label. Pass-through
/// nutrient columns beyond the core four are rankable too.
pub fn is_nutrient_column(df: &DataFrame, column: &str) -> bool {
    df.column(column)
        .map(|c| c.name().as_str() != COL_FOOD && c.dtype().is_primitive_numeric())
        .unwrap_or(false)
}
