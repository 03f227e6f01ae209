use std::path::PathBuf;

use thiserror::Error;

/// Problems with the column layout of a dataset.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    #[error("column '{column}' has {found} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
}

impl SchemaError {
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
        }
    }
}

/// Errors that abort a load attempt. The previous session is left untouched.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: cannot parse '{value}' in column '{column}'")]
    Format {
        row: usize,
        column: String,
        value: String,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Reasons a filter request is rejected. None of them mutate the session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Value error, please enter a valid number (got '{0}').")]
    InvalidValue(String),

    #[error("Invalid operation '{0}', use one of >, <, >=, <=, ==.")]
    InvalidOperator(String),

    #[error("Column '{0}' not found.")]
    ColumnNotFound(String),

    #[error("Column '{0}' is not numeric and cannot be filtered.")]
    NotNumeric(String),
}
