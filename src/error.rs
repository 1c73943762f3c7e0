//! Error types for palate operations.
//!
//! Loading failures carry the offending path (and line, for JSON lines
//! input) so the binary can report them without further context.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PalateError>;

/// Main error type for palate operations.
///
/// # Examples
///
/// ```
/// use palate::error::PalateError;
///
/// let err = PalateError::InvalidHyperparameter {
///     param: "min_support".to_string(),
///     value: "0".to_string(),
///     constraint: "(0, 1]".to_string(),
/// };
/// assert!(err.to_string().contains("min_support"));
/// ```
#[derive(Error, Debug)]
pub enum PalateError {
    /// A file could not be opened, read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File involved in the failed operation
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A JSON document (or one JSON line) failed to parse.
    #[error("Malformed JSON in {}{}", .path.display(), json_detail(.line, .source))]
    Json {
        /// Input file
        path: PathBuf,
        /// 1-based line number for JSON lines input
        line: Option<usize>,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Writing CSV output failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid threshold or parameter value.
    #[error("Invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// The input contained no usable records.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Configuration file is present but unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Terminal I/O failed during an interactive session.
    #[error("Session I/O error: {0}")]
    Session(#[from] std::io::Error),
}

/// Location and message for a JSON failure.
///
/// For JSON lines input each line is parsed on its own, so the parser's
/// position always says line 1; only its column is kept and the file line
/// replaces it.
fn json_detail(line: &Option<usize>, source: &serde_json::Error) -> String {
    let Some(line) = line else {
        return format!(": {source}");
    };
    let full = source.to_string();
    if source.line() == 0 {
        return format!(" at line {line}: {full}");
    }
    let position = format!(" at line {} column {}", source.line(), source.column());
    let message = full.strip_suffix(&position).unwrap_or(&full);
    format!(" at line {line} column {}: {message}", source.column())
}

impl PalateError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PalateError::Io {
            path: path.into(),
            source,
        }
    }

    /// Shorthand for an out-of-range parameter.
    pub fn invalid_param(
        param: &str,
        value: impl std::fmt::Display,
        constraint: &str,
    ) -> Self {
        PalateError::InvalidHyperparameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}
