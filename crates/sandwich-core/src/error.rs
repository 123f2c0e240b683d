//! # Error Types
//!
//! Domain-specific error types for sandwich-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sandwich-core errors (this file)                                      │
//! │  ├── CoreError        - Unresolved references, in-use deletions        │
//! │  └── ValidationError  - Field validation failures                      │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  └── CliError         - Menu files, unknown ingredient names           │
//! │                                                                         │
//! │  NOT an error: an invalid sandwich composition. The validator          │
//! │  answers with a bool / CompositionVerdict and never fails.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Category id does not resolve.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// An ingredient was requested with a category that does not resolve.
    ///
    /// ## When This Occurs
    /// - Creating an ingredient with an unknown category id
    /// - Moving an ingredient to an unknown category via a partial update
    ///
    /// The ingredient is never constructed (or left untouched) in that case.
    #[error("Invalid category for ingredient: {0}")]
    InvalidCategory(String),

    /// Ingredient id does not resolve.
    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    /// Sandwich id does not resolve.
    #[error("Sandwich not found: {0}")]
    SandwichNotFound(String),

    /// Category is still referenced by ingredients.
    #[error("Category {id} is used by {ingredients} ingredient(s)")]
    CategoryInUse { id: String, ingredients: usize },

    /// Ingredient is still referenced by sandwiches.
    #[error("Ingredient {id} is used by {sandwiches} sandwich(es)")]
    IngredientInUse { id: String, sandwiches: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any state is touched, so a failed call leaves
/// the entity exactly as it was.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value outside its accepted range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Amount must be zero or more.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g. a malformed price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g. a second category with the same name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::IngredientInUse {
            id: "ing-1".to_string(),
            sandwiches: 2,
        };
        assert_eq!(err.to_string(), "Ingredient ing-1 is used by 2 sandwich(es)");

        let err = CoreError::InvalidCategory("cat-404".to_string());
        assert_eq!(err.to_string(), "Invalid category for ingredient: cat-404");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Duplicate {
            field: "category".to_string(),
            value: "Pain".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
