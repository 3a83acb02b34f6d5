//! Error types for the filter-and-aggregate pipeline.
//!
//! Schema violations are fatal at load time; `InvalidColumn` is surfaced
//! synchronously to the caller with no partial result. Filtering and
//! aggregation themselves are total over well-formed input and never fail
//! on an empty result set.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that can occur in the nutrition pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Ranking or statistics were requested on a column that is not a
    /// numeric nutrient field of the dataset.
    #[error("unknown nutrient column '{column}'")]
    InvalidColumn {
        /// The column name the caller asked for
        column: String,
    },

    /// A column required by the dataset contract is absent.
    #[error("required column '{column}' not found in dataset")]
    MissingColumn {
        /// Name of the missing column
        column: String,
    },

    /// A required nutrient column is present but holds non-numeric data.
    #[error("column '{column}' must be numeric, found {dtype}")]
    NotNumeric {
        /// Name of the offending column
        column: String,
        /// The data type that was found instead
        dtype: String,
    },

    /// The food label column is present but not textual.
    #[error("column '{column}' must hold text labels, found {dtype}")]
    NotText {
        /// Name of the offending column
        column: String,
        /// The data type that was found instead
        dtype: String,
    },

    /// An underlying dataframe operation failed.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_column_display() {
        let err = PipelineError::InvalidColumn {
            column: "Vibes".to_string(),
        };
        assert_eq!(err.to_string(), "unknown nutrient column 'Vibes'");
    }

    #[test]
    fn test_missing_column_display() {
        let err = PipelineError::MissingColumn {
            column: "Protein".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "required column 'Protein' not found in dataset"
        );
    }

    #[test]
    fn test_not_numeric_display() {
        let err = PipelineError::NotNumeric {
            column: "Fat".to_string(),
            dtype: "str".to_string(),
        };
        assert_eq!(err.to_string(), "column 'Fat' must be numeric, found str");
    }

    #[test]
    fn test_not_text_display() {
        let err = PipelineError::NotText {
            column: "food".to_string(),
            dtype: "f64".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "column 'food' must hold text labels, found f64"
        );
    }
}
