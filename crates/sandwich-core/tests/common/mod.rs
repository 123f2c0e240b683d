#![allow(dead_code)]

use std::collections::HashMap;

use sandwich_core::{Catalog, Money, Role};

/// Catalog holding one 1.00 ingredient per role.
pub struct Stocked {
    pub catalog: Catalog,
    pub by_role: HashMap<Role, String>,
}

impl Stocked {
    /// Ids of one ingredient per role, in role order.
    pub fn one_of_each(&self) -> Vec<String> {
        Role::ALL.iter().map(|role| self.by_role[role].clone()).collect()
    }

    /// `one_of_each` padded up to `count` with extra cheese.
    pub fn padded_with_cheese(&self, count: usize) -> Vec<String> {
        let mut ids = self.one_of_each();
        while ids.len() < count {
            ids.push(self.by_role[&Role::Cheese].clone());
        }
        ids
    }

    pub fn without(&self, ids: &[String], role: Role) -> Vec<String> {
        let skipped = &self.by_role[&role];
        ids.iter().filter(|id| *id != skipped).cloned().collect()
    }
}

/// Builds a catalog with the default French category names.
pub fn stocked_catalog() -> Stocked {
    let mut catalog = Catalog::new();
    let mut by_role = HashMap::new();

    for role in Role::ALL {
        let id = catalog
            .new_ingredient_in(
                role.default_category_name(),
                format!("{} item", role),
                Money::from_cents(100),
                "",
            )
            .expect("stock ingredient")
            .id()
            .to_string();
        by_role.insert(role, id);
    }

    Stocked { catalog, by_role }
}
