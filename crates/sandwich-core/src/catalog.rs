//! # Catalog Arena
//!
//! In-memory storage of categories, ingredients and sandwiches, keyed by id.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog                                                               │
//! │  ├── Pantry ─────────────── implements IngredientLookup                │
//! │  │   ├── categories:  id → Category                                    │
//! │  │   └── ingredients: id → Ingredient ──(category_id)──► Category      │
//! │  ├── sandwiches:      id → Sandwich  ──(ingredient_ids)──► Ingredient  │
//! │  └── recipe:          Role → category name                             │
//! │                                                                         │
//! │  Sandwich mutations borrow `sandwiches` mutably and `pantry`           │
//! │  immutably at the same time, which is why the pantry is its own        │
//! │  struct.                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Referential Integrity
//! - an ingredient can only be inserted into an existing category
//! - a category used by an ingredient cannot be removed
//! - an ingredient used by a sandwich cannot be removed
//! - changing an ingredient's price re-prices every sandwich holding it
//!
//! No locking: the catalog is `&mut self` for every write. Callers that
//! share one across threads wrap it in a `Mutex`.

use std::collections::HashMap;

use tracing::debug;

use crate::composition::IngredientLookup;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::pricing::{self, PriceBreakdown};
use crate::recipe::Recipe;
use crate::types::{Category, Ingredient, IngredientUpdate, Sandwich, SandwichSize};
use crate::validation::CompositionVerdict;

// =============================================================================
// Pantry
// =============================================================================

/// Categories and ingredients keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Pantry {
    categories: HashMap<String, Category>,
    ingredients: HashMap<String, Ingredient>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a category and returns its id.
    pub fn insert_category(&mut self, category: Category) -> String {
        let id = category.id().to_string();
        self.categories.insert(id.clone(), category);
        id
    }

    /// Stores an ingredient and returns its id.
    ///
    /// Fails with `CoreError::InvalidCategory` when its category is unknown.
    pub fn insert_ingredient(&mut self, ingredient: Ingredient) -> CoreResult<String> {
        if !self.categories.contains_key(ingredient.category_id()) {
            return Err(CoreError::InvalidCategory(
                ingredient.category_id().to_string(),
            ));
        }
        let id = ingredient.id().to_string();
        self.ingredients.insert(id.clone(), ingredient);
        Ok(id)
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.values()
    }
}

impl IngredientLookup for Pantry {
    fn category(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.get(id)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Pantry, sandwiches and the recipe they are checked against.
///
/// ## Usage
/// ```rust
/// use sandwich_core::catalog::Catalog;
/// use sandwich_core::{Money, SandwichSize};
///
/// let mut catalog = Catalog::new();
/// let bread = catalog
///     .new_ingredient_in("Pain", "Baguette", Money::from_cents(120), "")
///     .unwrap()
///     .id()
///     .to_string();
///
/// let sandwich = catalog.new_sandwich(SandwichSize::Moyen, vec![bread]).unwrap();
/// assert_eq!(sandwich.price(), Money::from_cents(220));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pantry: Pantry,
    sandwiches: HashMap<String, Sandwich>,
    recipe: Recipe,
}

impl Catalog {
    /// Empty catalog with the default recipe.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipe(recipe: Recipe) -> Self {
        Catalog {
            recipe,
            ..Self::default()
        }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    // -------------------------------------------------------------------------
    // Categories
    // -------------------------------------------------------------------------

    /// Creates a category. Names are unique within a catalog.
    pub fn add_category(&mut self, name: impl Into<String>) -> CoreResult<&Category> {
        let name = name.into();
        if self.category_by_name(&name).is_some() {
            return Err(ValidationError::Duplicate {
                field: "category".to_string(),
                value: name,
            }
            .into());
        }

        let category = Category::new(name)?;
        debug!(category_id = %category.id(), name = %category.name(), "Category created");
        Ok(&*self
            .pantry
            .categories
            .entry(category.id().to_string())
            .or_insert(category))
    }

    /// Returns the category named `name`, creating it on first use.
    pub fn ensure_category(&mut self, name: &str) -> CoreResult<&Category> {
        let existing = self.category_by_name(name).map(|c| c.id().to_string());
        match existing {
            Some(id) => self.category(&id),
            None => self.add_category(name),
        }
    }

    pub fn category(&self, id: &str) -> CoreResult<&Category> {
        self.pantry
            .category(id)
            .ok_or_else(|| CoreError::CategoryNotFound(id.to_string()))
    }

    /// Exact, case-sensitive name match.
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.pantry.categories().find(|c| c.name() == name)
    }

    /// All categories, sorted by name.
    pub fn categories(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> = self.pantry.categories().collect();
        categories.sort_by(|a, b| a.name().cmp(b.name()));
        categories
    }

    /// Removes an unused category.
    pub fn remove_category(&mut self, id: &str) -> CoreResult<Category> {
        let users = self
            .pantry
            .ingredients()
            .filter(|i| i.category_id() == id)
            .count();
        if users > 0 {
            return Err(CoreError::CategoryInUse {
                id: id.to_string(),
                ingredients: users,
            });
        }

        let removed = self
            .pantry
            .categories
            .remove(id)
            .ok_or_else(|| CoreError::CategoryNotFound(id.to_string()))?;
        debug!(category_id = %id, "Category removed");
        Ok(removed)
    }

    // -------------------------------------------------------------------------
    // Ingredients
    // -------------------------------------------------------------------------

    /// Creates an ingredient in the category with id `category_id`.
    ///
    /// Fails with `CoreError::InvalidCategory` if that id does not resolve.
    pub fn new_ingredient(
        &mut self,
        category_id: &str,
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
    ) -> CoreResult<&Ingredient> {
        let category = self
            .pantry
            .category(category_id)
            .ok_or_else(|| CoreError::InvalidCategory(category_id.to_string()))?;
        let ingredient = Ingredient::new(category, name, price, description)?;

        debug!(
            ingredient_id = %ingredient.id(),
            category_id = %category_id,
            name = %ingredient.name(),
            price = %ingredient.price(),
            "Ingredient created"
        );
        Ok(&*self
            .pantry
            .ingredients
            .entry(ingredient.id().to_string())
            .or_insert(ingredient))
    }

    /// Creates an ingredient in the category named `category_name`,
    /// creating the category if this is the first ingredient of its kind.
    pub fn new_ingredient_in(
        &mut self,
        category_name: &str,
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
    ) -> CoreResult<&Ingredient> {
        let category_id = self.ensure_category(category_name)?.id().to_string();
        self.new_ingredient(&category_id, name, price, description)
    }

    pub fn ingredient(&self, id: &str) -> CoreResult<&Ingredient> {
        self.pantry
            .ingredient(id)
            .ok_or_else(|| CoreError::IngredientNotFound(id.to_string()))
    }

    /// Ingredients with exactly this name. Names are not unique.
    pub fn ingredients_named(&self, name: &str) -> Vec<&Ingredient> {
        self.pantry
            .ingredients()
            .filter(|i| i.name() == name)
            .collect()
    }

    /// All ingredients, sorted by category name then name.
    pub fn ingredients(&self) -> Vec<&Ingredient> {
        let mut ingredients: Vec<&Ingredient> = self.pantry.ingredients().collect();
        ingredients.sort_by(|a, b| {
            (a.category_name(&self.pantry), a.name())
                .cmp(&(b.category_name(&self.pantry), b.name()))
        });
        ingredients
    }

    /// Applies a partial update and re-prices the sandwiches using it.
    ///
    /// Unset fields keep their value. An unknown target category fails
    /// with `CoreError::InvalidCategory` and changes nothing.
    pub fn update_ingredient(&mut self, id: &str, update: IngredientUpdate) -> CoreResult<&Ingredient> {
        let mut updated = self.ingredient(id)?.clone();
        let price_changed = update.price.is_some_and(|p| p != updated.price());

        updated.apply_update(update, &self.pantry)?;
        debug!(ingredient_id = %id, price_changed, "Ingredient updated");
        self.pantry.ingredients.insert(id.to_string(), updated);

        if price_changed {
            self.reprice_sandwiches_with(id)?;
        }
        self.ingredient(id)
    }

    /// Removes an ingredient no sandwich uses.
    pub fn remove_ingredient(&mut self, id: &str) -> CoreResult<Ingredient> {
        let users = self
            .sandwiches
            .values()
            .filter(|s| s.contains_ingredient(id))
            .count();
        if users > 0 {
            return Err(CoreError::IngredientInUse {
                id: id.to_string(),
                sandwiches: users,
            });
        }

        let removed = self
            .pantry
            .ingredients
            .remove(id)
            .ok_or_else(|| CoreError::IngredientNotFound(id.to_string()))?;
        debug!(ingredient_id = %id, "Ingredient removed");
        Ok(removed)
    }

    fn reprice_sandwiches_with(&mut self, ingredient_id: &str) -> CoreResult<()> {
        let Catalog {
            pantry, sandwiches, ..
        } = self;

        for sandwich in sandwiches
            .values_mut()
            .filter(|s| s.contains_ingredient(ingredient_id))
        {
            let price = sandwich.calculate_price(&*pantry)?;
            debug!(sandwich_id = %sandwich.id(), price = %price, "Sandwich re-priced");
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Sandwiches
    // -------------------------------------------------------------------------

    /// Creates a `"CUSTOM"` sandwich.
    pub fn new_sandwich(
        &mut self,
        size: SandwichSize,
        ingredient_ids: Vec<String>,
    ) -> CoreResult<&Sandwich> {
        let sandwich = Sandwich::new(size, ingredient_ids, &self.pantry)?;
        Ok(self.store_sandwich(sandwich))
    }

    pub fn new_named_sandwich(
        &mut self,
        name: impl Into<String>,
        size: SandwichSize,
        ingredient_ids: Vec<String>,
    ) -> CoreResult<&Sandwich> {
        let sandwich = Sandwich::named(name, size, ingredient_ids, &self.pantry)?;
        Ok(self.store_sandwich(sandwich))
    }

    fn store_sandwich(&mut self, sandwich: Sandwich) -> &Sandwich {
        debug!(
            sandwich_id = %sandwich.id(),
            name = %sandwich.name(),
            size = %sandwich.size(),
            ingredients = sandwich.ingredient_ids().len(),
            price = %sandwich.price(),
            "Sandwich created"
        );
        self.sandwiches
            .entry(sandwich.id().to_string())
            .or_insert(sandwich)
    }

    pub fn sandwich(&self, id: &str) -> CoreResult<&Sandwich> {
        self.sandwiches
            .get(id)
            .ok_or_else(|| CoreError::SandwichNotFound(id.to_string()))
    }

    /// All sandwiches, sorted by name.
    pub fn sandwiches(&self) -> Vec<&Sandwich> {
        let mut sandwiches: Vec<&Sandwich> = self.sandwiches.values().collect();
        sandwiches.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(b.id())));
        sandwiches
    }

    /// Replaces a sandwich's ingredient list and re-prices it.
    pub fn update_sandwich_ingredients(
        &mut self,
        id: &str,
        ingredient_ids: Vec<String>,
    ) -> CoreResult<&Sandwich> {
        let sandwich = self
            .sandwiches
            .get_mut(id)
            .ok_or_else(|| CoreError::SandwichNotFound(id.to_string()))?;
        sandwich.update_ingredients(ingredient_ids, &self.pantry)?;

        debug!(sandwich_id = %id, price = %sandwich.price(), "Sandwich ingredients replaced");
        Ok(&*sandwich)
    }

    /// Changes a sandwich's size and re-prices it.
    pub fn resize_sandwich(&mut self, id: &str, size: SandwichSize) -> CoreResult<&Sandwich> {
        let sandwich = self
            .sandwiches
            .get_mut(id)
            .ok_or_else(|| CoreError::SandwichNotFound(id.to_string()))?;
        sandwich.resize(size, &self.pantry)?;

        debug!(sandwich_id = %id, size = %size, price = %sandwich.price(), "Sandwich resized");
        Ok(&*sandwich)
    }

    pub fn validate_sandwich(&self, id: &str) -> CoreResult<bool> {
        self.sandwich(id)?.validate(&self.pantry, &self.recipe)
    }

    pub fn check_sandwich(&self, id: &str) -> CoreResult<CompositionVerdict> {
        self.sandwich(id)?.check(&self.pantry, &self.recipe)
    }

    /// Surcharge / ingredient split of a sandwich's price.
    pub fn quote_sandwich(&self, id: &str) -> CoreResult<PriceBreakdown> {
        let sandwich = self.sandwich(id)?;
        Ok(pricing::price_breakdown(
            sandwich.size(),
            &sandwich.composition(&self.pantry)?,
        ))
    }

    pub fn find_ingredients_by_category_name(
        &self,
        id: &str,
        category_name: &str,
    ) -> CoreResult<Option<Vec<&Ingredient>>> {
        self.sandwich(id)?
            .find_ingredients_by_category_name(&self.pantry, category_name)
    }

    pub fn remove_sandwich(&mut self, id: &str) -> CoreResult<Sandwich> {
        let removed = self
            .sandwiches
            .remove(id)
            .ok_or_else(|| CoreError::SandwichNotFound(id.to_string()))?;
        debug!(sandwich_id = %id, "Sandwich removed");
        Ok(removed)
    }
}

impl IngredientLookup for Catalog {
    fn category(&self, id: &str) -> Option<&Category> {
        self.pantry.category(id)
    }

    fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.pantry.ingredient(id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn add(catalog: &mut Catalog, category: &str, name: &str, cents: i64) -> String {
        catalog
            .new_ingredient_in(category, name, Money::from_cents(cents), "")
            .unwrap()
            .id()
            .to_string()
    }

    #[test]
    fn test_add_category_rejects_duplicates() {
        let mut catalog = Catalog::new();
        catalog.add_category("Pain").unwrap();

        let err = catalog.add_category("Pain").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));
        // case-sensitive: a different key
        assert!(catalog.add_category("pain").is_ok());
    }

    #[test]
    fn test_ensure_category_is_lazy_and_idempotent() {
        let mut catalog = Catalog::new();
        let first = catalog.ensure_category("Sauce").unwrap().id().to_string();
        let second = catalog.ensure_category("Sauce").unwrap().id().to_string();

        assert_eq!(first, second);
        assert_eq!(catalog.categories().len(), 1);
    }

    #[test]
    fn test_new_ingredient_in_creates_category_once() {
        let mut catalog = Catalog::new();
        add(&mut catalog, "Pain", "Baguette", 120);
        add(&mut catalog, "Pain", "Pain de mie", 100);

        assert_eq!(catalog.categories().len(), 1);
        assert_eq!(catalog.ingredients().len(), 2);
    }

    #[test]
    fn test_new_ingredient_unknown_category() {
        let mut catalog = Catalog::new();
        let err = catalog
            .new_ingredient("no-such-id", "Ketchup", Money::from_cents(20), "")
            .unwrap_err();
        assert_eq!(err, CoreError::InvalidCategory("no-such-id".to_string()));
        assert!(catalog.ingredients().is_empty());
    }

    #[test]
    fn test_huge_prices_rejected_before_summing() {
        let mut catalog = Catalog::new();
        let huge: Money = "92233720368547758.07".parse().unwrap();

        let err = catalog
            .new_ingredient_in("Fromage", "Truffe", huge, "")
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
        assert!(catalog.ingredients().is_empty());

        let top = Money::from_cents(crate::MAX_INGREDIENT_PRICE_CENTS);
        let id = catalog
            .new_ingredient_in("Fromage", "Truffe", top, "")
            .unwrap()
            .id()
            .to_string();
        let sandwich = catalog
            .new_sandwich(SandwichSize::Ogre, vec![id.clone(), id.clone()])
            .unwrap();
        assert_eq!(
            sandwich.price(),
            Money::from_cents(2 * crate::MAX_INGREDIENT_PRICE_CENTS + 200)
        );

        let err = catalog
            .update_ingredient(&id, IngredientUpdate::new().price(huge))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_ingredients_named() {
        let mut catalog = Catalog::new();
        add(&mut catalog, "Fromage", "Comté", 150);
        add(&mut catalog, "Fromage", "Comté", 180);
        add(&mut catalog, "Fromage", "Brie", 130);

        assert_eq!(catalog.ingredients_named("Comté").len(), 2);
        assert!(catalog.ingredients_named("comté").is_empty());
    }

    #[test]
    fn test_update_ingredient_reprices_sandwiches() {
        let mut catalog = Catalog::new();
        let ham = add(&mut catalog, "Charcuterie", "Jambon", 150);
        let brie = add(&mut catalog, "Fromage", "Brie", 130);

        let with_ham = catalog
            .new_sandwich(SandwichSize::Moyen, vec![ham.clone(), ham.clone(), brie.clone()])
            .unwrap()
            .id()
            .to_string();
        let without_ham = catalog
            .new_sandwich(SandwichSize::Petit, vec![brie.clone()])
            .unwrap()
            .id()
            .to_string();

        catalog
            .update_ingredient(&ham, IngredientUpdate::new().price(Money::from_cents(200)))
            .unwrap();

        // 1.00 + 2 × 2.00 + 1.30
        assert_eq!(catalog.sandwich(&with_ham).unwrap().price(), Money::from_cents(630));
        assert_eq!(catalog.sandwich(&without_ham).unwrap().price(), Money::from_cents(130));
    }

    #[test]
    fn test_update_ingredient_partial() {
        let mut catalog = Catalog::new();
        let ham = add(&mut catalog, "Charcuterie", "Jambon", 150);
        let meat = catalog.add_category("Viande").unwrap().id().to_string();

        let updated = catalog
            .update_ingredient(&ham, IngredientUpdate::new().category(meat.clone()))
            .unwrap();
        assert_eq!(updated.category_id(), meat);
        assert_eq!(updated.name(), "Jambon");
        assert_eq!(updated.price(), Money::from_cents(150));

        let err = catalog
            .update_ingredient(&ham, IngredientUpdate::new().category("ghost"))
            .unwrap_err();
        assert_eq!(err, CoreError::InvalidCategory("ghost".to_string()));
        assert_eq!(catalog.ingredient(&ham).unwrap().category_id(), meat);
    }

    #[test]
    fn test_removal_guards() {
        let mut catalog = Catalog::new();
        let ham = add(&mut catalog, "Charcuterie", "Jambon", 150);
        let charcuterie = catalog
            .category_by_name("Charcuterie")
            .unwrap()
            .id()
            .to_string();
        let sandwich = catalog
            .new_sandwich(SandwichSize::Petit, vec![ham.clone()])
            .unwrap()
            .id()
            .to_string();

        assert!(matches!(
            catalog.remove_category(&charcuterie),
            Err(CoreError::CategoryInUse { ingredients: 1, .. })
        ));
        assert!(matches!(
            catalog.remove_ingredient(&ham),
            Err(CoreError::IngredientInUse { sandwiches: 1, .. })
        ));

        catalog.remove_sandwich(&sandwich).unwrap();
        catalog.remove_ingredient(&ham).unwrap();
        catalog.remove_category(&charcuterie).unwrap();
        assert!(catalog.categories().is_empty());
    }

    #[test]
    fn test_sandwich_mutations_reprice() {
        let mut catalog = Catalog::new();
        let bread = add(&mut catalog, "Pain", "Baguette", 120);
        let sauce = add(&mut catalog, "Sauce", "Mayonnaise", 30);

        let id = catalog
            .new_named_sandwich("Le Simple", SandwichSize::Petit, vec![bread.clone()])
            .unwrap()
            .id()
            .to_string();

        let sandwich = catalog
            .update_sandwich_ingredients(&id, vec![bread.clone(), sauce.clone(), sauce])
            .unwrap();
        assert_eq!(sandwich.price(), Money::from_cents(180));

        let sandwich = catalog.resize_sandwich(&id, SandwichSize::Grand).unwrap();
        assert_eq!(sandwich.price(), Money::from_cents(330));
        assert_eq!(sandwich.name(), "Le Simple");

        let quote = catalog.quote_sandwich(&id).unwrap();
        assert_eq!(quote.surcharge, Money::from_cents(150));
        assert_eq!(quote.ingredients, Money::from_cents(180));

        let sauces = catalog
            .find_ingredients_by_category_name(&id, "Sauce")
            .unwrap()
            .unwrap();
        assert_eq!(sauces.len(), 2);

        let listed: Vec<&str> = catalog.sandwiches().iter().map(|s| s.name()).collect();
        assert_eq!(listed, vec!["Le Simple"]);
    }

    #[test]
    fn test_unknown_sandwich() {
        let mut catalog = Catalog::new();
        assert_eq!(
            catalog.validate_sandwich("nope").unwrap_err(),
            CoreError::SandwichNotFound("nope".to_string())
        );
        assert!(catalog.resize_sandwich("nope", SandwichSize::Ogre).is_err());
    }

    #[test]
    fn test_validate_uses_catalog_recipe() {
        let recipe = Recipe::from_json(r#"{ "bread": "Bread" }"#).unwrap();
        let mut catalog = Catalog::with_recipe(recipe);

        let ids = vec![
            add(&mut catalog, "Salade", "Laitue", 100),
            add(&mut catalog, "Viande", "Poulet", 100),
            add(&mut catalog, "Charcuterie", "Jambon", 100),
            add(&mut catalog, "Fromage", "Brie", 100),
            add(&mut catalog, "Sauce", "Mayonnaise", 100),
            add(&mut catalog, "Crudité", "Tomate", 100),
            add(&mut catalog, "Bread", "Baguette", 100),
        ];
        let id = catalog
            .new_sandwich(SandwichSize::Petit, ids)
            .unwrap()
            .id()
            .to_string();

        assert!(catalog.validate_sandwich(&id).unwrap());
        assert_eq!(catalog.check_sandwich(&id).unwrap(), CompositionVerdict::Valid);
    }
}
