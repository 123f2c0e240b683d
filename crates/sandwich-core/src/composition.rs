//! # Composition
//!
//! The resolved view of a sandwich: its ingredient ids turned into
//! `(ingredient, category)` pairs, in list order, duplicates kept.
//!
//! ## Resolution at the Point of Use
//! ```text
//! Sandwich.ingredient_ids ─┐
//!                          ▼
//!            Composition::resolve(ids, lookup)
//!                          │
//!          ┌───────────────┼────────────────┐
//!          ▼               ▼                ▼
//!   ResolvedIngredient  ResolvedIngredient  ...
//!   (&Ingredient, &Category)
//!                          │
//!          ┌───────────────┴────────────────┐
//!          ▼                                ▼
//!   validation::check_composition    pricing::calculate_price
//! ```
//!
//! The lookup is a trait so the core never cares where records live:
//! the in-memory [`Pantry`](crate::catalog::Pantry) implements it, and so
//! can any storage collaborator.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Category, Ingredient};

// =============================================================================
// Lookup Seam
// =============================================================================

/// Resolves category and ingredient ids to records.
pub trait IngredientLookup {
    fn category(&self, id: &str) -> Option<&Category>;

    fn ingredient(&self, id: &str) -> Option<&Ingredient>;
}

// =============================================================================
// Resolved Ingredient
// =============================================================================

/// An ingredient together with its category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedIngredient<'a> {
    pub ingredient: &'a Ingredient,
    pub category: &'a Category,
}

impl<'a> ResolvedIngredient<'a> {
    pub fn category_name(&self) -> &'a str {
        self.category.name()
    }

    pub fn price(&self) -> Money {
        self.ingredient.price()
    }
}

// =============================================================================
// Composition
// =============================================================================

/// Resolved ingredient list of a sandwich.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composition<'a> {
    items: Vec<ResolvedIngredient<'a>>,
}

impl<'a> Composition<'a> {
    /// Resolves every id, failing on the first one that does not.
    ///
    /// ## Errors
    /// - unknown ingredient id → `CoreError::IngredientNotFound`
    /// - ingredient whose category vanished → `CoreError::CategoryNotFound`
    pub fn resolve<L>(ingredient_ids: &[String], lookup: &'a L) -> CoreResult<Self>
    where
        L: IngredientLookup + ?Sized,
    {
        let items = ingredient_ids
            .iter()
            .map(|id| -> CoreResult<ResolvedIngredient<'a>> {
                let ingredient = lookup
                    .ingredient(id)
                    .ok_or_else(|| CoreError::IngredientNotFound(id.clone()))?;
                let category = lookup.category(ingredient.category_id()).ok_or_else(|| {
                    CoreError::CategoryNotFound(ingredient.category_id().to_string())
                })?;
                Ok(ResolvedIngredient {
                    ingredient,
                    category,
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Composition { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedIngredient<'a>> {
        self.items.iter()
    }

    /// True when at least one ingredient belongs to `category_name`.
    pub fn has_category(&self, category_name: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.category_name() == category_name)
    }

    /// Ingredients in `category_name`, in list order.
    ///
    /// `None` rather than an empty list when nothing matches.
    pub fn ingredients_in_category(&self, category_name: &str) -> Option<Vec<&'a Ingredient>> {
        let found: Vec<&'a Ingredient> = self
            .items
            .iter()
            .filter(|item| item.category_name() == category_name)
            .map(|item| item.ingredient)
            .collect();

        if found.is_empty() {
            None
        } else {
            Some(found)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
