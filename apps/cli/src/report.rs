//! # Reports
//!
//! Quote snapshots and their text rendering.
//!
//! `QuoteDto` is a plain snapshot of one sandwich: names instead of ids,
//! integer cents instead of `Money`, camelCase for JSON consumers.

use chrono::{DateTime, Utc};
use sandwich_core::{Catalog, CompositionVerdict, CoreResult};
use serde::Serialize;

use crate::config::CliConfig;

// =============================================================================
// DTOs
// =============================================================================

/// One sandwich, priced and checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDto {
    pub id: String,
    pub name: String,
    pub size: String,
    pub ingredients: Vec<String>,
    pub valid: bool,
    pub verdict: CompositionVerdict,
    pub surcharge_cents: i64,
    pub ingredients_cents: i64,
    pub total_cents: i64,
}

impl QuoteDto {
    /// Builds the snapshot of sandwich `id`.
    pub fn build(catalog: &Catalog, id: &str) -> CoreResult<Self> {
        let sandwich = catalog.sandwich(id)?;
        let ingredients = sandwich
            .ingredient_ids()
            .iter()
            .map(|ingredient_id| catalog.ingredient(ingredient_id).map(|i| i.name().to_string()))
            .collect::<CoreResult<Vec<_>>>()?;
        let verdict = catalog.check_sandwich(id)?;
        let breakdown = catalog.quote_sandwich(id)?;

        Ok(QuoteDto {
            id: sandwich.id().to_string(),
            name: sandwich.name().to_string(),
            size: sandwich.size().to_string(),
            ingredients,
            valid: verdict.is_valid(),
            verdict,
            surcharge_cents: breakdown.surcharge.cents(),
            ingredients_cents: breakdown.ingredients.cents(),
            total_cents: breakdown.total.cents(),
        })
    }
}

/// Quotes for a whole menu, stamped with the time they were computed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReport {
    pub generated_at: DateTime<Utc>,
    pub currency_symbol: String,
    pub quotes: Vec<QuoteDto>,
}

impl QuoteReport {
    pub fn build(catalog: &Catalog, ids: &[String], config: &CliConfig) -> CoreResult<Self> {
        Ok(QuoteReport {
            generated_at: Utc::now(),
            currency_symbol: config.currency_symbol.clone(),
            quotes: ids
                .iter()
                .map(|id| QuoteDto::build(catalog, id))
                .collect::<CoreResult<Vec<_>>>()?,
        })
    }
}

// =============================================================================
// Text Rendering
// =============================================================================

/// Categories with their recipe role, ingredients and prices.
pub fn render_menu(catalog: &Catalog, config: &CliConfig) -> String {
    let mut out = String::new();
    for category in catalog.categories() {
        out.push_str(category.name());
        if let Some(role) = catalog.recipe().role_of(category.name()) {
            out.push_str(&format!(" [{}]", role));
        }
        out.push('\n');
        for ingredient in catalog
            .ingredients()
            .into_iter()
            .filter(|i| i.category_id() == category.id())
        {
            out.push_str(&format!(
                "  {:<28} {:>10}",
                ingredient.name(),
                config.format_currency(ingredient.price())
            ));
            if !ingredient.description().is_empty() {
                out.push_str(&format!("  ({})", ingredient.description()));
            }
            out.push('\n');
        }
    }
    out
}

/// One block per quote: header line, ingredients, price split, verdict.
pub fn render_quote(quote: &QuoteDto, config: &CliConfig) -> String {
    let money = |cents| config.format_currency(sandwich_core::Money::from_cents(cents));
    let mark = if quote.valid { "ok" } else { "INVALID" };

    let mut out = format!("{} [{}] {}\n", quote.name, quote.size, mark);
    out.push_str(&format!("  {}\n", quote.ingredients.join(", ")));
    out.push_str(&format!(
        "  {} + {} = {}\n",
        money(quote.surcharge_cents),
        money(quote.ingredients_cents),
        money(quote.total_cents)
    ));
    if !quote.valid {
        out.push_str(&format!("  {}\n", quote.verdict));
    }
    out
}

pub fn render_report(report: &QuoteReport, config: &CliConfig) -> String {
    report
        .quotes
        .iter()
        .map(|quote| render_quote(quote, config))
        .collect::<Vec<_>>()
        .join("\n")
}
