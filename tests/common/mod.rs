//! Shared test utilities and fixture generators

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a small food DataFrame with known characteristics:
/// two foods containing "apple" (different casing), a clear protein
/// winner (Chicken Breast) and a clear calorie winner (Almonds).
pub fn create_food_dataframe() -> DataFrame {
    df! {
        "food" => ["Apple", "Chicken Breast", "Cheddar Cheese", "Brown Rice", "Almonds", "apple pie"],
        "Caloric Value" => [52.0f64, 165.0, 403.0, 112.0, 579.0, 237.0],
        "Protein" => [0.3f64, 31.0, 23.0, 2.6, 21.0, 2.4],
        "Fat" => [0.2f64, 3.6, 33.0, 0.9, 50.0, 11.0],
        "Carbohydrates" => [14.0f64, 0.0, 3.1, 24.0, 22.0, 34.0],
    }
    .unwrap()
}

/// The two-record dataset used as the worked example throughout the docs.
pub fn create_example_dataframe() -> DataFrame {
    df! {
        "food" => ["Apple", "Chicken Breast"],
        "Caloric Value" => [52.0f64, 165.0],
        "Protein" => [0.3f64, 31.0],
        "Fat" => [0.2f64, 3.6],
        "Carbohydrates" => [14.0f64, 0.0],
    }
    .unwrap()
}

/// An empty frame with the required schema.
pub fn create_empty_dataframe() -> DataFrame {
    df! {
        "food" => Vec::<String>::new(),
        "Caloric Value" => Vec::<f64>::new(),
        "Protein" => Vec::<f64>::new(),
        "Fat" => Vec::<f64>::new(),
        "Carbohydrates" => Vec::<f64>::new(),
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("food_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Collect the food names of a view in row order
pub fn food_names(df: &DataFrame) -> Vec<String> {
    df.column("food")
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .map(|name| name.unwrap_or("").to_string())
        .collect()
}

/// Assert that a DataFrame has expected shape
pub fn assert_shape(df: &DataFrame, expected_rows: usize, expected_cols: usize) {
    let (rows, cols) = df.shape();
    assert_eq!(
        rows, expected_rows,
        "Row count mismatch: expected {}, got {}",
        expected_rows, rows
    );
    assert_eq!(
        cols, expected_cols,
        "Column count mismatch: expected {}, got {}",
        expected_cols, cols
    );
}
