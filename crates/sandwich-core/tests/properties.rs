mod common;

use common::stocked_catalog;
use proptest::prelude::*;
use sandwich_core::{Catalog, IngredientUpdate, Money, Role, SandwichSize};

fn any_size() -> impl Strategy<Value = SandwichSize> {
    prop::sample::select(SandwichSize::ALL.to_vec())
}

fn any_role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

/// Catalog with one ingredient per price, all in the same category.
fn priced(prices: &[i64]) -> (Catalog, Vec<String>) {
    let mut catalog = Catalog::new();
    let ids = prices
        .iter()
        .enumerate()
        .map(|(i, cents)| {
            catalog
                .new_ingredient_in("Fromage", format!("cheese {}", i), Money::from_cents(*cents), "")
                .unwrap()
                .id()
                .to_string()
        })
        .collect();
    (catalog, ids)
}

proptest! {
    #[test]
    fn missing_role_is_never_valid(role in any_role(), size in any_size(), count in 6usize..14) {
        let mut stocked = stocked_catalog();
        let full = stocked.padded_with_cheese(count + 1);
        let ids = stocked.without(&full, role);

        let id = stocked.catalog.new_sandwich(size, ids).unwrap().id().to_string();
        prop_assert!(!stocked.catalog.validate_sandwich(&id).unwrap());
    }

    #[test]
    fn full_roles_valid_iff_count_matches(size in any_size(), count in 7usize..13) {
        let mut stocked = stocked_catalog();
        let ids = stocked.padded_with_cheese(count);

        let id = stocked.catalog.new_sandwich(size, ids).unwrap().id().to_string();
        let expected = size.required_ingredients() == Some(count);
        prop_assert_eq!(stocked.catalog.validate_sandwich(&id).unwrap(), expected);
    }

    #[test]
    fn price_ignores_ingredient_order(
        prices in prop::collection::vec(0i64..10_000, 0..12),
        size in any_size(),
        rotate in 0usize..12,
    ) {
        let (mut catalog, ids) = priced(&prices);

        let mut reversed = ids.clone();
        reversed.reverse();
        let mut rotated = ids.clone();
        if !rotated.is_empty() {
            let by = rotate % rotated.len();
            rotated.rotate_left(by);
        }

        let a = catalog.new_sandwich(size, ids).unwrap().price();
        let b = catalog.new_sandwich(size, reversed).unwrap().price();
        let c = catalog.new_sandwich(size, rotated).unwrap().price();

        let expected = size.surcharge() + prices.iter().copied().map(Money::from_cents).sum::<Money>();
        prop_assert_eq!(a, expected);
        prop_assert_eq!(b, expected);
        prop_assert_eq!(c, expected);
    }

    #[test]
    fn price_is_idempotent(prices in prop::collection::vec(0i64..10_000, 0..12), size in any_size()) {
        let (mut catalog, ids) = priced(&prices);
        let id = catalog.new_sandwich(size, ids).unwrap().id().to_string();

        let mut sandwich = catalog.sandwich(&id).unwrap().clone();

        let first = sandwich.calculate_price(catalog.pantry()).unwrap();
        let second = sandwich.calculate_price(catalog.pantry()).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first, sandwich.price());
        prop_assert_eq!(first, catalog.quote_sandwich(&id).unwrap().total);
    }

    #[test]
    fn partial_update_never_clears_fields(
        name in prop::option::of("[A-Za-z][A-Za-z ]{0,20}"),
        move_category in any::<bool>(),
        price in prop::option::of(0i64..10_000),
        description in prop::option::of(".{0,30}"),
    ) {
        let mut catalog = Catalog::new();
        let original = catalog
            .new_ingredient_in("Charcuterie", "Jambon", Money::from_cents(150), "blanc")
            .unwrap()
            .clone();
        let meat = catalog.add_category("Viande").unwrap().id().to_string();

        let update = IngredientUpdate {
            name: name.clone(),
            category_id: move_category.then(|| meat.clone()),
            price: price.map(Money::from_cents),
            description: description.clone(),
        };
        let updated = catalog.update_ingredient(original.id(), update).unwrap();

        prop_assert_eq!(updated.name(), name.as_deref().unwrap_or(original.name()));
        prop_assert_eq!(
            updated.category_id(),
            if move_category { meat.as_str() } else { original.category_id() }
        );
        prop_assert_eq!(updated.price(), price.map(Money::from_cents).unwrap_or(original.price()));
        prop_assert_eq!(updated.description(), description.as_deref().unwrap_or(original.description()));
    }
}
