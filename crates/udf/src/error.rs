use thiserror::Error;
use windpower_models::PowerCurveError;

use crate::DataType;

/// Errors that may occur when configuring or invoking the function.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UdfError {
    #[error("expected {expected} arguments, got {found}")]
    Arity { expected: usize, found: usize },

    /// A non-null argument had a type that cannot be coerced.
    #[error("argument {position} must be {expected}, got {found}")]
    TypeMismatch {
        position: usize,
        expected: DataType,
        found: DataType,
    },

    #[error("column `{column}` has {found} rows, expected {expected}")]
    ColumnLength {
        column: &'static str,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Evaluation(#[from] PowerCurveError),

    /// Evaluating one row of a batch failed.
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: PowerCurveError,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
