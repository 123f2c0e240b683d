//! # Recipe Template
//!
//! The seven ingredient roles every sellable sandwich must fill, and the
//! table binding each role to the category name that denotes it.
//!
//! ## Roles vs. Category Names
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Role (rule logic)          Category.name (display text)               │
//! │  ─────────────────          ────────────────────────────               │
//! │  Salad          ◄────────── "Salade"                                   │
//! │  Meat           ◄────────── "Viande"                                   │
//! │  ColdCuts       ◄────────── "Charcuterie"                              │
//! │  Cheese         ◄────────── "Fromage"                                  │
//! │  Sauce          ◄────────── "Sauce"                                    │
//! │  RawVegetable   ◄────────── "Crudité"                                  │
//! │  Bread          ◄────────── "Pain"                                     │
//! │                                                                         │
//! │  Matching is exact and case-sensitive: "pain" is NOT bread.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The table is data, so a catalog labelled in another language only
//! needs a different `Recipe`, not different rules.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreResult, ValidationError};

// =============================================================================
// Role
// =============================================================================

/// A required ingredient function of a sandwich.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Salad,
    Meat,
    ColdCuts,
    Cheese,
    Sauce,
    RawVegetable,
    Bread,
}

impl Role {
    /// Every role, in the order the validator checks them.
    pub const ALL: [Role; 7] = [
        Role::Salad,
        Role::Meat,
        Role::ColdCuts,
        Role::Cheese,
        Role::Sauce,
        Role::RawVegetable,
        Role::Bread,
    ];

    /// Category name bound to this role in the default recipe.
    pub const fn default_category_name(self) -> &'static str {
        match self {
            Role::Salad => "Salade",
            Role::Meat => "Viande",
            Role::ColdCuts => "Charcuterie",
            Role::Cheese => "Fromage",
            Role::Sauce => "Sauce",
            Role::RawVegetable => "Crudité",
            Role::Bread => "Pain",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Salad => "salad",
            Role::Meat => "meat",
            Role::ColdCuts => "cold cuts",
            Role::Cheese => "cheese",
            Role::Sauce => "sauce",
            Role::RawVegetable => "raw vegetable",
            Role::Bread => "bread",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Recipe
// =============================================================================

/// Role → category name table.
///
/// Always checked: no empty name, no name bound to two roles. Deserializing
/// goes through the same check as [`Recipe::from_json`].
///
/// ## JSON Form
/// Missing keys keep their default binding:
/// ```json
/// { "bread": "Bread", "cheese": "Cheese" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RecipeTable", into = "RecipeTable")]
pub struct Recipe {
    table: RecipeTable,
}

/// Unchecked wire form of a [`Recipe`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct RecipeTable {
    salad: String,
    meat: String,
    cold_cuts: String,
    cheese: String,
    sauce: String,
    raw_vegetable: String,
    bread: String,
}

impl Default for RecipeTable {
    fn default() -> Self {
        RecipeTable {
            salad: Role::Salad.default_category_name().to_string(),
            meat: Role::Meat.default_category_name().to_string(),
            cold_cuts: Role::ColdCuts.default_category_name().to_string(),
            cheese: Role::Cheese.default_category_name().to_string(),
            sauce: Role::Sauce.default_category_name().to_string(),
            raw_vegetable: Role::RawVegetable.default_category_name().to_string(),
            bread: Role::Bread.default_category_name().to_string(),
        }
    }
}

impl TryFrom<RecipeTable> for Recipe {
    type Error = ValidationError;

    fn try_from(table: RecipeTable) -> Result<Self, Self::Error> {
        let recipe = Recipe { table };
        recipe.check()?;
        Ok(recipe)
    }
}

impl From<Recipe> for RecipeTable {
    fn from(recipe: Recipe) -> Self {
        recipe.table
    }
}

impl Recipe {
    /// Parses a recipe table from JSON and checks it.
    ///
    /// ## Errors
    /// - malformed JSON → `ValidationError::InvalidFormat`
    /// - an empty category name → `ValidationError::Required`
    /// - two roles bound to one name → `ValidationError::Duplicate`
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let table: RecipeTable =
            serde_json::from_str(json).map_err(|e| ValidationError::InvalidFormat {
                field: "recipe".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Recipe::try_from(table)?)
    }

    /// Category name denoting `role`.
    pub fn category_name(&self, role: Role) -> &str {
        let table = &self.table;
        match role {
            Role::Salad => &table.salad,
            Role::Meat => &table.meat,
            Role::ColdCuts => &table.cold_cuts,
            Role::Cheese => &table.cheese,
            Role::Sauce => &table.sauce,
            Role::RawVegetable => &table.raw_vegetable,
            Role::Bread => &table.bread,
        }
    }

    /// Role bound to a category name, if any.
    pub fn role_of(&self, category_name: &str) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|role| self.category_name(*role) == category_name)
    }

    fn check(&self) -> Result<(), ValidationError> {
        for (i, role) in Role::ALL.iter().enumerate() {
            let name = self.category_name(*role);
            if name.trim().is_empty() {
                return Err(ValidationError::Required {
                    field: format!("recipe.{}", role),
                });
            }
            if Role::ALL[..i]
                .iter()
                .any(|earlier| self.category_name(*earlier) == name)
            {
                return Err(ValidationError::Duplicate {
                    field: "recipe category".to_string(),
                    value: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
