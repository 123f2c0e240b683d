//! # CLI Configuration
//!
//! Settings resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--menu`, `--recipe`, `--currency`)
//! 2. Environment variables (`SANDWICH_*`)
//! 3. Defaults (this file)
//!
//! Read-only after startup.

use std::path::{Path, PathBuf};

use sandwich_core::{Money, Recipe};

use crate::error::{CliError, CliResult};

/// Default tracing filter when neither `RUST_LOG` nor `SANDWICH_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,sandwich=debug";

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// JSON menu file to load
    pub menu_path: PathBuf,

    /// Optional JSON recipe table; the French defaults otherwise
    pub recipe_path: Option<PathBuf>,

    /// Currency symbol for display
    pub currency_symbol: String,

    /// `EnvFilter` directives
    pub log_filter: String,
}

impl Default for CliConfig {
    /// ## Default Values
    /// - Menu: `menu.json` in the working directory
    /// - Recipe: built-in French category names
    /// - Currency: €
    fn default() -> Self {
        CliConfig {
            menu_path: PathBuf::from("menu.json"),
            recipe_path: None,
            currency_symbol: "€".to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CliConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SANDWICH_MENU`: menu file path
    /// - `SANDWICH_RECIPE`: recipe file path
    /// - `SANDWICH_CURRENCY`: currency symbol
    /// - `SANDWICH_LOG`: tracing filter
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = CliConfig::default();

        if let Some(path) = var("SANDWICH_MENU") {
            config.menu_path = PathBuf::from(path);
        }

        if let Some(path) = var("SANDWICH_RECIPE") {
            config.recipe_path = Some(PathBuf::from(path));
        }

        if let Some(symbol) = var("SANDWICH_CURRENCY") {
            config.currency_symbol = symbol;
        }

        if let Some(filter) = var("SANDWICH_LOG").filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        config
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        menu: Option<PathBuf>,
        recipe: Option<PathBuf>,
        currency: Option<String>,
    ) -> Self {
        if let Some(menu) = menu {
            self.menu_path = menu;
        }
        if recipe.is_some() {
            self.recipe_path = recipe;
        }
        if let Some(currency) = currency {
            self.currency_symbol = currency;
        }
        self
    }

    /// Loads the recipe table, or the defaults when no file is configured.
    pub fn load_recipe(&self) -> CliResult<Recipe> {
        match &self.recipe_path {
            Some(path) => Ok(Recipe::from_json(&read_file(path)?)?),
            None => Ok(Recipe::default()),
        }
    }

    /// Formats an amount with the configured symbol.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = CliConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "€12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.major().abs(),
            amount.cents_part()
        )
    }
}

/// Reads a whole file, keeping the path in the error.
pub fn read_file(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
