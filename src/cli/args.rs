//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::FilterCriteria;

/// NutriChoice - filter, rank and summarize a food nutrition CSV
#[derive(Parser, Debug)]
#[command(name = "nutrichoice")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file with the food nutrition dataset
    #[arg(short, long)]
    pub input: PathBuf,

    /// Case-insensitive substring to match against food names
    #[arg(short, long)]
    pub search: Option<String>,

    /// Lower calorie bound (kcal). Defaults to the smallest value observed
    /// in the dataset.
    #[arg(long)]
    pub min_calories: Option<f64>,

    /// Upper calorie bound (kcal). Defaults to the largest value observed
    /// in the dataset.
    #[arg(long)]
    pub max_calories: Option<f64>,

    /// Lower protein bound (g). Defaults to the smallest value observed
    /// in the dataset.
    #[arg(long)]
    pub min_protein: Option<f64>,

    /// Upper protein bound (g). Defaults to the largest value observed
    /// in the dataset.
    #[arg(long)]
    pub max_protein: Option<f64>,

    /// How many foods to show in each ranking
    #[arg(long, default_value = "10")]
    pub top_n: usize,

    /// Nutrient column used for the headline ranking
    #[arg(long, default_value = "Protein")]
    pub rank_by: String,

    /// Write the filtered rows to this CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Write a JSON run report (criteria, KPIs, statistics) to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Print the filtered rows as a table
    #[arg(long, default_value = "false")]
    pub show_table: bool,

    /// Maximum number of rows printed with --show-table
    #[arg(long, default_value = "20", value_parser = validate_preview_rows)]
    pub preview_rows: usize,

    /// Number of rows to use for schema inference.
    /// Use 0 for a full table scan (slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

impl Cli {
    /// Merge explicit CLI bounds over criteria seeded from the dataset.
    /// Unset bounds keep the seeded value.
    pub fn criteria(&self, seeded: FilterCriteria) -> FilterCriteria {
        FilterCriteria {
            search_text: self.search.clone(),
            calorie_range: (
                self.min_calories.unwrap_or(seeded.calorie_range.0),
                self.max_calories.unwrap_or(seeded.calorie_range.1),
            ),
            protein_range: (
                self.min_protein.unwrap_or(seeded.protein_range.0),
                self.max_protein.unwrap_or(seeded.protein_range.1),
            ),
        }
    }
}

/// Validator for preview_rows parameter
fn validate_preview_rows(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid row count", s))?;

    if value == 0 {
        Err("preview_rows must be at least 1".to_string())
    } else {
        Ok(value)
    }
}
