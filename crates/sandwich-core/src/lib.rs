//! # sandwich-core: Catalog Rules for Sandwich Shops
//!
//! Categories, ingredients and sandwiches, plus the two rules that matter:
//! whether a sandwich may be sold, and what it costs.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Sandwich Catalog                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    sandwich CLI (apps/cli)                      │   │
//! │  │         menu ──► quote ──► check          (JSON menu file)      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sandwich-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │composition│  │ validation│  │  pricing  │  │   │
//! │  │   │ Category  │  │  resolve  │  │  verdict  │  │ surcharge │  │   │
//! │  │   │ Sandwich  │  │  lookup   │  │  7 roles  │  │  + items  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │  catalog  │  │  recipe   │  │   money   │                 │   │
//! │  │   │  arena    │  │ role→name │  │   cents   │                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO FILE I/O • NO NETWORK • tracing events only in catalog    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Category, Ingredient, Sandwich, SandwichSize
//! - [`money`] - Money in integer cents
//! - [`recipe`] - Which category fills which role
//! - [`composition`] - Ingredient ids resolved against a lookup
//! - [`validation`] - Field validators and the Composition Validator
//! - [`pricing`] - The Price Calculator
//! - [`catalog`] - In-memory arena holding everything by id
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use sandwich_core::{Catalog, Money, Role, SandwichSize};
//!
//! let mut catalog = Catalog::new();
//! let mut ids = Vec::new();
//! for role in Role::ALL {
//!     let ingredient = catalog
//!         .new_ingredient_in(role.default_category_name(), format!("{}", role), Money::from_cents(100), "")
//!         .unwrap();
//!     ids.push(ingredient.id().to_string());
//! }
//!
//! let sandwich = catalog.new_sandwich(SandwichSize::Petit, ids).unwrap().id().to_string();
//! assert!(catalog.validate_sandwich(&sandwich).unwrap());
//! assert_eq!(catalog.sandwich(&sandwich).unwrap().price(), Money::from_cents(700));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod composition;
pub mod error;
pub mod money;
pub mod pricing;
pub mod recipe;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, Pantry};
pub use composition::{Composition, IngredientLookup, ResolvedIngredient};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::PriceBreakdown;
pub use recipe::{Recipe, Role};
pub use types::*;
pub use validation::CompositionVerdict;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name given to sandwiches built without one.
pub const CUSTOM_SANDWICH_NAME: &str = "CUSTOM";

/// Maximum length of a category name, in characters.
pub const MAX_CATEGORY_NAME_LEN: usize = 100;

/// Maximum length of an ingredient name, in characters.
pub const MAX_INGREDIENT_NAME_LEN: usize = 200;

/// Highest accepted ingredient price, in cents (1 000 000.00).
///
/// Sandwich totals are summed with plain `i64` addition; this cap keeps
/// them out of overflow range for any list that fits in memory.
pub const MAX_INGREDIENT_PRICE_CENTS: i64 = 100_000_000;
