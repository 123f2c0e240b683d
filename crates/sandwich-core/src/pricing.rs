//! # Price Calculator
//!
//! ```text
//! price = size surcharge + Σ ingredient prices (one term per occurrence)
//!
//!   GRAND, [Pain 1.20, Brie 1.30, Brie 1.30]
//!   1.50 + 1.20 + 1.30 + 1.30 = 5.30
//! ```
//!
//! No bounds checking: the sum is unconditional. Non-negative prices are
//! an ingredient construction invariant, not a calculator concern.

use serde::Serialize;

use crate::composition::Composition;
use crate::money::Money;
use crate::types::SandwichSize;

/// The two parts of a sandwich price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub surcharge: Money,
    pub ingredients: Money,
    pub total: Money,
}

/// Splits the price of a composition into surcharge and ingredient total.
pub fn price_breakdown(size: SandwichSize, composition: &Composition<'_>) -> PriceBreakdown {
    let surcharge = size.surcharge();
    let ingredients: Money = composition.iter().map(|item| item.price()).sum();

    PriceBreakdown {
        surcharge,
        ingredients,
        total: surcharge + ingredients,
    }
}

/// Total price of a composition at a given size.
pub fn calculate_price(size: SandwichSize, composition: &Composition<'_>) -> Money {
    price_breakdown(size, composition).total
}
