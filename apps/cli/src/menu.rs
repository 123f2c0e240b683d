//! # Menu Loading
//!
//! Turns a JSON menu file into a populated [`Catalog`].
//!
//! ## File Format
//! ```json
//! {
//!   "categories":  ["Pain"],
//!   "ingredients": [{ "name": "Baguette", "category": "Pain", "price": "1.20", "description": "" }],
//!   "sandwiches":  [{ "name": "Le Simple", "size": "PETIT", "ingredients": ["Baguette"] }]
//! }
//! ```
//!
//! ## Loading Order
//! ```text
//! categories ──► ensure_category (listed ones first, even if unused)
//!     │
//! ingredients ──► new_ingredient_in (unlisted categories created lazily)
//!     │
//! sandwiches ──► names resolved to ids ──► new_named_sandwich
//! ```
//!
//! Sandwiches refer to ingredients by name, so a name used by a sandwich
//! must match exactly one ingredient.

use std::path::Path;

use sandwich_core::{Catalog, Money, Recipe, SandwichSize};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::read_file;
use crate::error::{CliError, CliResult};

// =============================================================================
// File Records
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MenuFile {
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    ingredients: Vec<IngredientRecord>,
    #[serde(default)]
    sandwiches: Vec<SandwichRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct IngredientRecord {
    name: String,
    category: String,
    /// Decimal string so amounts never pass through a float.
    price: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SandwichRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    size: Option<String>,
    #[serde(default)]
    ingredients: Vec<String>,
}

// =============================================================================
// Menu
// =============================================================================

/// A loaded catalog plus its sandwiches in file order.
#[derive(Debug)]
pub struct Menu {
    pub catalog: Catalog,
    pub sandwich_ids: Vec<String>,
}

impl Menu {
    pub fn load(path: &Path, recipe: Recipe) -> CliResult<Self> {
        let menu = Self::from_json(&read_file(path)?, recipe)?;
        info!(
            path = %path.display(),
            sandwiches = menu.sandwich_ids.len(),
            "Menu loaded"
        );
        Ok(menu)
    }

    pub fn from_json(json: &str, recipe: Recipe) -> CliResult<Self> {
        let file: MenuFile = serde_json::from_str(json)?;
        let mut catalog = Catalog::with_recipe(recipe);

        for name in &file.categories {
            catalog.ensure_category(name)?;
        }

        for record in file.ingredients {
            let price: Money = record.price.parse()?;
            catalog.new_ingredient_in(&record.category, record.name, price, record.description)?;
        }

        let mut sandwich_ids = Vec::with_capacity(file.sandwiches.len());
        for record in file.sandwiches {
            let size = match record.size.as_deref() {
                Some(size) => size.parse::<SandwichSize>()?,
                None => SandwichSize::default(),
            };
            let ids = resolve_names(&catalog, &record.ingredients)?;
            let sandwich = catalog.new_named_sandwich(record.name, size, ids)?;
            debug!(name = %sandwich.name(), size = %sandwich.size(), "Menu sandwich built");
            sandwich_ids.push(sandwich.id().to_string());
        }

        Ok(Menu {
            catalog,
            sandwich_ids,
        })
    }
}

/// Maps ingredient names to ids, keeping order and repetitions.
pub fn resolve_names(catalog: &Catalog, names: &[String]) -> CliResult<Vec<String>> {
    names
        .iter()
        .map(|name| match catalog.ingredients_named(name).as_slice() {
            [] => Err(CliError::UnknownIngredient(name.clone())),
            [ingredient] => Ok(ingredient.id().to_string()),
            many => Err(CliError::AmbiguousIngredient {
                name: name.clone(),
                count: many.len(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandwich_core::CompositionVerdict;

    const MAISON: &str = include_str!("../menus/maison.json");

    #[test]
    fn test_demo_menu_loads() {
        let menu = Menu::from_json(MAISON, Recipe::default()).unwrap();
        assert_eq!(menu.catalog.categories().len(), 7);
        assert_eq!(menu.catalog.ingredients().len(), 14);
        assert_eq!(menu.sandwich_ids.len(), 3);

        let parisien = menu.catalog.sandwich(&menu.sandwich_ids[0]).unwrap();
        assert_eq!(parisien.name(), "Le Parisien");
        assert_eq!(parisien.price(), Money::from_cents(730));
        assert!(menu.catalog.validate_sandwich(&menu.sandwich_ids[0]).unwrap());

        let gourmand = menu.catalog.sandwich(&menu.sandwich_ids[1]).unwrap();
        assert_eq!(gourmand.price(), Money::from_cents(1120));
        assert!(menu.catalog.validate_sandwich(&menu.sandwich_ids[1]).unwrap());
    }

    #[test]
    fn test_demo_ogre_has_no_sauce() {
        let menu = Menu::from_json(MAISON, Recipe::default()).unwrap();
        let id = &menu.sandwich_ids[2];

        assert_eq!(menu.catalog.sandwich(id).unwrap().price(), Money::from_cents(1580));
        assert!(matches!(
            menu.catalog.check_sandwich(id).unwrap(),
            CompositionVerdict::MissingRoles { .. }
        ));
    }

    #[test]
    fn test_lazy_categories_and_defaults() {
        let json = r#"{
            "ingredients": [{ "name": "Ketchup", "category": "Sauce", "price": "0.25" }],
            "sandwiches": [{ "ingredients": ["Ketchup"] }]
        }"#;
        let menu = Menu::from_json(json, Recipe::default()).unwrap();
        let sandwich = menu.catalog.sandwich(&menu.sandwich_ids[0]).unwrap();

        assert!(menu.catalog.category_by_name("Sauce").is_some());
        assert_eq!(sandwich.name(), "CUSTOM");
        assert_eq!(sandwich.size(), SandwichSize::Undefined);
        assert_eq!(sandwich.price(), Money::from_cents(25));
    }

    #[test]
    fn test_unknown_and_ambiguous_names() {
        let json = r#"{
            "ingredients": [
                { "name": "Brie", "category": "Fromage", "price": "1.30" },
                { "name": "Brie", "category": "Fromage", "price": "1.60" }
            ],
            "sandwiches": [{ "size": "PETIT", "ingredients": ["Brie"] }]
        }"#;
        assert!(matches!(
            Menu::from_json(json, Recipe::default()),
            Err(CliError::AmbiguousIngredient { count: 2, .. })
        ));

        let json = r#"{ "sandwiches": [{ "ingredients": ["Truffe"] }] }"#;
        assert!(matches!(
            Menu::from_json(json, Recipe::default()),
            Err(CliError::UnknownIngredient(name)) if name == "Truffe"
        ));
    }

    #[test]
    fn test_bad_records() {
        let negative = r#"{ "ingredients": [{ "name": "X", "category": "Sauce", "price": "-1.00" }] }"#;
        assert_eq!(
            Menu::from_json(negative, Recipe::default()).unwrap_err().code(),
            "VALIDATION_ERROR"
        );

        let bad_size = r#"{ "sandwiches": [{ "size": "XXL" }] }"#;
        assert!(Menu::from_json(bad_size, Recipe::default()).is_err());

        let float_price = r#"{ "ingredients": [{ "name": "X", "category": "Sauce", "price": 1.0 }] }"#;
        assert!(matches!(
            Menu::from_json(float_price, Recipe::default()),
            Err(CliError::Json(_))
        ));
    }
}
