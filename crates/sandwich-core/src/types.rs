//! # Domain Types
//!
//! Core domain records of the sandwich catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Category     │   │   Ingredient    │   │      Sandwich       │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id (UUID)      │◄──│  category_id    │   │  id (UUID)          │   │
//! │  │  name           │   │  id (UUID)      │◄──│  ingredient_ids[]   │   │
//! │  └─────────────────┘   │  name           │   │  name ("CUSTOM")    │   │
//! │                        │  price (Money)  │   │  size               │   │
//! │                        │  description    │   │  price (derived)    │   │
//! │                        └─────────────────┘   └─────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │ SandwichSize: UNDEFINED < PETIT < MOYEN < GRAND < OGRE          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identifier References
//! Records point at each other by id, never by live reference. Ids are
//! resolved through an [`IngredientLookup`] only where the data is used:
//! validation, pricing and category lookups.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::composition::{Composition, IngredientLookup};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::pricing;
use crate::recipe::Recipe;
use crate::validation::{self, CompositionVerdict};
use crate::CUSTOM_SANDWICH_NAME;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Category
// =============================================================================

/// A named grouping tag for ingredients ("Pain", "Sauce", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    id: String,
    name: String,
}

impl Category {
    /// Creates a category with a fresh id.
    pub fn new(name: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        validation::validate_category_name(&name)?;
        Ok(Category { id: new_id(), name })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name, also the key the [`Recipe`] matches roles against.
    pub fn name(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// Ingredient
// =============================================================================

/// A priced item belonging to exactly one category.
///
/// ## Invariants
/// - `category_id` resolved to an existing category when the ingredient
///   was built or last moved
/// - `price` is never negative
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    id: String,
    name: String,
    category_id: String,
    price: Money,
    description: String,
}

impl Ingredient {
    /// Creates an ingredient inside an already-resolved category.
    ///
    /// Looking the category up is the caller's job; see
    /// `Catalog::new_ingredient` for the id-based variant that fails
    /// with `CoreError::InvalidCategory`.
    pub fn new(
        category: &Category,
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
    ) -> CoreResult<Self> {
        let name = name.into();
        validation::validate_ingredient_name(&name)?;
        validation::validate_price(price)?;

        Ok(Ingredient {
            id: new_id(),
            name,
            category_id: category.id().to_string(),
            price,
            description: description.into(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Name of the category this ingredient belongs to.
    pub fn category_name<'a, L>(&self, lookup: &'a L) -> Option<&'a str>
    where
        L: IngredientLookup + ?Sized,
    {
        lookup.category(&self.category_id).map(Category::name)
    }

    /// Merges a partial update into this ingredient.
    ///
    /// ## Behavior
    /// - `None` fields keep their current value, nothing is ever cleared
    /// - every supplied field is checked before anything is written, so an
    ///   error leaves the ingredient untouched
    /// - an unknown `category_id` fails with `CoreError::InvalidCategory`
    /// - an empty update is a no-op; use [`IngredientUpdate::is_empty`] to
    ///   reject it upstream instead
    pub fn apply_update<L>(&mut self, update: IngredientUpdate, lookup: &L) -> CoreResult<()>
    where
        L: IngredientLookup + ?Sized,
    {
        if let Some(name) = &update.name {
            validation::validate_ingredient_name(name)?;
        }
        if let Some(price) = update.price {
            validation::validate_price(price)?;
        }
        if let Some(category_id) = &update.category_id {
            if lookup.category(category_id).is_none() {
                return Err(CoreError::InvalidCategory(category_id.clone()));
            }
        }

        let IngredientUpdate {
            name,
            category_id,
            price,
            description,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(category_id) = category_id {
            self.category_id = category_id;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(description) = description {
            self.description = description;
        }
        Ok(())
    }
}

// =============================================================================
// Ingredient Update
// =============================================================================

/// Partial replacement set for an ingredient.
///
/// `None` means "not supplied". A price of zero is a real value and is
/// therefore spelled `Some(Money::zero())`.
///
/// ## Example
/// ```rust
/// use sandwich_core::types::IngredientUpdate;
/// use sandwich_core::Money;
///
/// let update = IngredientUpdate::new().price(Money::zero());
/// assert!(!update.is_empty());
/// assert!(IngredientUpdate::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngredientUpdate {
    pub name: Option<String>,
    pub category_id: Option<String>,
    pub price: Option<Money>,
    pub description: Option<String>,
}

impl IngredientUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when no field was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category_id.is_none()
            && self.price.is_none()
            && self.description.is_none()
    }
}

// =============================================================================
// Sandwich Size
// =============================================================================

/// Size tier of a sandwich, in ascending order.
///
/// ```text
/// Tier        Surcharge   Required ingredients
/// UNDEFINED   +0.00       - (not purchasable)
/// PETIT       +0.00       7
/// MOYEN       +1.00       8
/// GRAND       +1.50       9
/// OGRE        +2.00       10
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SandwichSize {
    /// No tier selected yet.
    #[default]
    Undefined,
    Petit,
    Moyen,
    Grand,
    Ogre,
}

impl SandwichSize {
    pub const ALL: [SandwichSize; 5] = [
        SandwichSize::Undefined,
        SandwichSize::Petit,
        SandwichSize::Moyen,
        SandwichSize::Grand,
        SandwichSize::Ogre,
    ];

    /// Fixed amount added to the ingredient total.
    pub const fn surcharge(self) -> Money {
        match self {
            SandwichSize::Undefined | SandwichSize::Petit => Money::zero(),
            SandwichSize::Moyen => Money::from_cents(100),
            SandwichSize::Grand => Money::from_cents(150),
            SandwichSize::Ogre => Money::from_cents(200),
        }
    }

    /// Exact ingredient count a valid sandwich of this size carries.
    ///
    /// `None` for `Undefined`, which no count can satisfy.
    pub const fn required_ingredients(self) -> Option<usize> {
        match self {
            SandwichSize::Undefined => None,
            SandwichSize::Petit => Some(7),
            SandwichSize::Moyen => Some(8),
            SandwichSize::Grand => Some(9),
            SandwichSize::Ogre => Some(10),
        }
    }

    /// False only for `Undefined`.
    pub const fn is_purchasable(self) -> bool {
        !matches!(self, SandwichSize::Undefined)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SandwichSize::Undefined => "UNDEFINED",
            SandwichSize::Petit => "PETIT",
            SandwichSize::Moyen => "MOYEN",
            SandwichSize::Grand => "GRAND",
            SandwichSize::Ogre => "OGRE",
        }
    }
}

impl fmt::Display for SandwichSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `"grand"`, `"Grand"` and `"GRAND"` all parse.
impl FromStr for SandwichSize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SandwichSize::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "size".to_string(),
                allowed: SandwichSize::ALL
                    .iter()
                    .map(|size| size.as_str().to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Sandwich
// =============================================================================

/// An ordered list of ingredient ids plus a size tier.
///
/// ## Price Consistency
/// `price` is a cache of [`pricing::calculate_price`] for the current size
/// and ingredients. There is no setter: every method that changes the size
/// or the ingredient list re-prices in the same call.
///
/// ```text
/// update_ingredients(ids) ──► resolve all ids ──► price ──► commit both
///                                  │
///                                  └── unknown id? ──► Err, nothing changed
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sandwich {
    id: String,
    name: String,
    size: SandwichSize,
    ingredient_ids: Vec<String>,
    price: Money,
}

impl Default for Sandwich {
    /// A nameless, sizeless, empty sandwich priced at zero.
    fn default() -> Self {
        Sandwich {
            id: new_id(),
            name: CUSTOM_SANDWICH_NAME.to_string(),
            size: SandwichSize::Undefined,
            ingredient_ids: Vec::new(),
            price: Money::zero(),
        }
    }
}

impl Sandwich {
    /// Creates a `"CUSTOM"` sandwich from ingredient ids, in the given order.
    pub fn new<L>(size: SandwichSize, ingredient_ids: Vec<String>, lookup: &L) -> CoreResult<Self>
    where
        L: IngredientLookup + ?Sized,
    {
        Self::named(CUSTOM_SANDWICH_NAME, size, ingredient_ids, lookup)
    }

    /// Creates a named sandwich. A blank name falls back to `"CUSTOM"`.
    pub fn named<L>(
        name: impl Into<String>,
        size: SandwichSize,
        ingredient_ids: Vec<String>,
        lookup: &L,
    ) -> CoreResult<Self>
    where
        L: IngredientLookup + ?Sized,
    {
        let mut sandwich = Sandwich {
            size,
            ..Sandwich::default()
        };
        sandwich.rename(name);
        sandwich.update_ingredients(ingredient_ids, lookup)?;
        Ok(sandwich)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> SandwichSize {
        self.size
    }

    pub fn ingredient_ids(&self) -> &[String] {
        &self.ingredient_ids
    }

    /// Price for the current size and ingredients.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn contains_ingredient(&self, ingredient_id: &str) -> bool {
        self.ingredient_ids.iter().any(|id| id == ingredient_id)
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.name = if name.trim().is_empty() {
            CUSTOM_SANDWICH_NAME.to_string()
        } else {
            name
        };
    }

    /// Resolves the ingredient ids against `lookup`.
    pub fn composition<'a, L>(&self, lookup: &'a L) -> CoreResult<Composition<'a>>
    where
        L: IngredientLookup + ?Sized,
    {
        Composition::resolve(&self.ingredient_ids, lookup)
    }

    /// Replaces the ingredient list wholesale and re-prices.
    ///
    /// Duplicates are kept and the order is preserved. If any id is
    /// unknown the sandwich is left as it was.
    pub fn update_ingredients<L>(
        &mut self,
        ingredient_ids: Vec<String>,
        lookup: &L,
    ) -> CoreResult<&mut Self>
    where
        L: IngredientLookup + ?Sized,
    {
        let price = pricing::calculate_price(
            self.size,
            &Composition::resolve(&ingredient_ids, lookup)?,
        );
        self.ingredient_ids = ingredient_ids;
        self.price = price;
        Ok(self)
    }

    /// Changes the size tier and re-prices.
    pub fn resize<L>(&mut self, size: SandwichSize, lookup: &L) -> CoreResult<&mut Self>
    where
        L: IngredientLookup + ?Sized,
    {
        let price = pricing::calculate_price(size, &self.composition(lookup)?);
        self.size = size;
        self.price = price;
        Ok(self)
    }

    /// Recomputes the cached price from the current ingredient prices.
    ///
    /// Needed after an ingredient's price changed in the lookup; calling
    /// it twice in a row yields the same value.
    pub fn calculate_price<L>(&mut self, lookup: &L) -> CoreResult<Money>
    where
        L: IngredientLookup + ?Sized,
    {
        self.price = pricing::calculate_price(self.size, &self.composition(lookup)?);
        Ok(self.price)
    }

    /// Boolean composition check.
    ///
    /// An invalid composition is `Ok(false)`; `Err` only means an id
    /// did not resolve.
    pub fn validate<L>(&self, lookup: &L, recipe: &Recipe) -> CoreResult<bool>
    where
        L: IngredientLookup + ?Sized,
    {
        Ok(self.check(lookup, recipe)?.is_valid())
    }

    /// Composition check reporting which rule failed.
    pub fn check<L>(&self, lookup: &L, recipe: &Recipe) -> CoreResult<CompositionVerdict>
    where
        L: IngredientLookup + ?Sized,
    {
        Ok(validation::check_composition(
            &self.composition(lookup)?,
            self.size,
            recipe,
        ))
    }

    /// Ingredients of this sandwich whose category is named `category_name`.
    ///
    /// `Ok(None)` when there is none.
    pub fn find_ingredients_by_category_name<'a, L>(
        &self,
        lookup: &'a L,
        category_name: &str,
    ) -> CoreResult<Option<Vec<&'a Ingredient>>>
    where
        L: IngredientLookup + ?Sized,
    {
        Ok(self
            .composition(lookup)?
            .ingredients_in_category(category_name))
    }
}

impl fmt::Display for Sandwich {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} ingredients, {})",
            self.name,
            self.size,
            self.ingredient_ids.len(),
            self.price
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
