//! # CLI Error Type
//!
//! ```text
//! menu file ──► read ──── io::Error ──────────┐
//!     │                                        │
//!     ▼                                        ▼
//!   parse ───── serde_json::Error ────────► CliError ──► main ──► stderr + exit 1
//!     │                                        ▲
//!     ▼                                        │
//!   build ───── CoreError / name lookup ───────┘
//! ```
//!
//! An invalid sandwich composition is not an error: it is reported as a
//! verdict and the command still succeeds.

use std::path::PathBuf;

use sandwich_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// No ingredient carries this name.
    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),

    /// Several ingredients share this name and the menu cannot tell which.
    #[error("Ambiguous ingredient name '{name}' ({count} matches)")]
    AmbiguousIngredient { name: String, count: usize },
}

impl CliError {
    /// Machine-readable error code, printed alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Io { .. } => "IO_ERROR",
            CliError::Json(_) => "MALFORMED_INPUT",
            CliError::Core(CoreError::Validation(_)) => "VALIDATION_ERROR",
            CliError::Core(
                CoreError::CategoryNotFound(_)
                | CoreError::IngredientNotFound(_)
                | CoreError::SandwichNotFound(_),
            ) => "NOT_FOUND",
            CliError::Core(_) => "BUSINESS_LOGIC",
            CliError::UnknownIngredient(_) => "NOT_FOUND",
            CliError::AmbiguousIngredient { .. } => "VALIDATION_ERROR",
        }
    }
}

impl From<sandwich_core::ValidationError> for CliError {
    fn from(err: sandwich_core::ValidationError) -> Self {
        CliError::Core(err.into())
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use sandwich_core::ValidationError;

    #[test]
    fn test_error_codes() {
        let err = CliError::UnknownIngredient("Truffe".to_string());
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.to_string(), "Unknown ingredient: Truffe");

        let err: CliError = ValidationError::Required {
            field: "price".to_string(),
        }
        .into();
        assert_eq!(err.code(), "VALIDATION_ERROR");

        let err: CliError = CoreError::InvalidCategory("x".to_string()).into();
        assert_eq!(err.code(), "BUSINESS_LOGIC");
        assert_eq!(err.to_string(), "Invalid category for ingredient: x");
    }
}
