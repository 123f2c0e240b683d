//! # Validation Module
//!
//! Field validators for catalog records, and the Composition Validator
//! deciding whether a sandwich is sellable.
//!
//! ## Composition Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Composition Validator                                 │
//! │                                                                         │
//! │  Step 1: role presence                                                 │
//! │  ├── for each of the 7 roles: any ingredient in that category?         │
//! │  └── any role absent ──► MissingRoles (size is NOT looked at)          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Step 2: exact count for the size                                      │
//! │  ├── UNDEFINED ──► SizeNotSelected                                     │
//! │  ├── PETIT 7 · MOYEN 8 · GRAND 9 · OGRE 10                             │
//! │  └── any other count ──► WrongCount                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Valid                                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The count is raw: the extra items of a bigger size may all sit in the
//! same role.
//!
//! ## Usage
//! ```rust
//! use sandwich_core::validation::{validate_category_name, validate_price};
//! use sandwich_core::Money;
//!
//! assert!(validate_category_name("Pain").is_ok());
//! assert!(validate_price(Money::from_cents(-1)).is_err());
//! ```

use serde::Serialize;
use std::fmt;

use crate::composition::Composition;
use crate::error::ValidationError;
use crate::money::Money;
use crate::recipe::{Recipe, Role};
use crate::types::SandwichSize;
use crate::{MAX_CATEGORY_NAME_LEN, MAX_INGREDIENT_NAME_LEN, MAX_INGREDIENT_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a category name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 100 characters
pub fn validate_category_name(name: &str) -> ValidationResult<()> {
    validate_name("category name", name, MAX_CATEGORY_NAME_LEN)
}

/// Validates an ingredient name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 200 characters
pub fn validate_ingredient_name(name: &str) -> ValidationResult<()> {
    validate_name("ingredient name", name, MAX_INGREDIENT_NAME_LEN)
}

fn validate_name(field: &str, name: &str, max: usize) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an ingredient price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free extras)
/// - At most `MAX_INGREDIENT_PRICE_CENTS` (1 000 000.00)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    if price.cents() > MAX_INGREDIENT_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_INGREDIENT_PRICE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Composition Validator
// =============================================================================

/// Outcome of a composition check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum CompositionVerdict {
    Valid,

    /// One or more roles have no ingredient at all.
    MissingRoles { roles: Vec<Role> },

    /// Every role is filled but no size tier was picked.
    SizeNotSelected { actual: usize },

    /// Every role is filled but the count does not match the size.
    WrongCount {
        size: SandwichSize,
        expected: usize,
        actual: usize,
    },
}

impl CompositionVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, CompositionVerdict::Valid)
    }
}

impl fmt::Display for CompositionVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositionVerdict::Valid => f.write_str("valid"),
            CompositionVerdict::MissingRoles { roles } => {
                let roles: Vec<String> = roles.iter().map(Role::to_string).collect();
                write!(f, "missing {}", roles.join(", "))
            }
            CompositionVerdict::SizeNotSelected { actual } => {
                write!(f, "no size selected ({} ingredients)", actual)
            }
            CompositionVerdict::WrongCount {
                size,
                expected,
                actual,
            } => write!(
                f,
                "{} takes exactly {} ingredients, got {}",
                size, expected, actual
            ),
        }
    }
}

/// Checks a composition against the recipe and size.
///
/// ## Example
/// ```rust
/// use sandwich_core::composition::Composition;
/// use sandwich_core::recipe::{Recipe, Role};
/// use sandwich_core::types::SandwichSize;
/// use sandwich_core::validation::{check_composition, CompositionVerdict};
///
/// let verdict = check_composition(&Composition::default(), SandwichSize::Petit, &Recipe::default());
/// assert_eq!(verdict, CompositionVerdict::MissingRoles { roles: Role::ALL.to_vec() });
/// ```
pub fn check_composition(
    composition: &Composition<'_>,
    size: SandwichSize,
    recipe: &Recipe,
) -> CompositionVerdict {
    let missing: Vec<Role> = Role::ALL
        .into_iter()
        .filter(|role| !composition.has_category(recipe.category_name(*role)))
        .collect();

    if !missing.is_empty() {
        return CompositionVerdict::MissingRoles { roles: missing };
    }

    let actual = composition.len();
    match size.required_ingredients() {
        None => CompositionVerdict::SizeNotSelected { actual },
        Some(expected) if expected == actual => CompositionVerdict::Valid,
        Some(expected) => CompositionVerdict::WrongCount {
            size,
            expected,
            actual,
        },
    }
}

/// Boolean form of [`check_composition`]: sellable or not.
///
/// Never fails and does not say which rule broke.
pub fn validate_composition(
    composition: &Composition<'_>,
    size: SandwichSize,
    recipe: &Recipe,
) -> bool {
    check_composition(composition, size, recipe).is_valid()
}

// =============================================================================
// Unit Tests
// =============================================================================
