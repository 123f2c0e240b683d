//! # sandwich: Catalog Command Line
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          sandwich CLI                                   │
//! │                                                                         │
//! │  main.rs ────► parses flags, sets up logging, dispatches               │
//! │                                                                         │
//! │  config.rs ──► CliConfig (flags > SANDWICH_* env > defaults)           │
//! │                                                                         │
//! │  menu.rs ────► JSON menu file ──► Catalog                              │
//! │                                                                         │
//! │  report.rs ──► QuoteDto, text and JSON output                          │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                         sandwich-core                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Resolve configuration
//! 3. Initialize tracing (stderr, so JSON on stdout stays clean)
//! 4. Load recipe and menu
//! 5. Run the subcommand

mod config;
mod error;
mod menu;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sandwich_core::SandwichSize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use config::CliConfig;
use error::CliResult;
use menu::{resolve_names, Menu};
use report::{QuoteDto, QuoteReport};

#[derive(Parser)]
#[command(name = "sandwich")]
#[command(about = "Check and price sandwiches from a menu file.")]
pub struct CommandLine {
    /// Menu file (overrides SANDWICH_MENU)
    #[arg(long, global = true)]
    pub menu: Option<PathBuf>,

    /// Recipe file mapping roles to category names (overrides SANDWICH_RECIPE)
    #[arg(long, global = true)]
    pub recipe: Option<PathBuf>,

    /// Currency symbol (overrides SANDWICH_CURRENCY)
    #[arg(long, global = true)]
    pub currency: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List categories and ingredients with prices
    #[command(alias = "m")]
    Menu,
    /// Price and check every sandwich on the menu
    #[command(alias = "q")]
    Quote {
        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compose a sandwich from ingredient names and check it
    #[command(alias = "c")]
    Check {
        /// PETIT, MOYEN, GRAND or OGRE
        #[arg(long, default_value = "UNDEFINED")]
        size: SandwichSize,
        /// Ingredient names, repeated for doubles
        #[arg(required = true)]
        ingredients: Vec<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn main() -> ExitCode {
    let args = CommandLine::parse_args();
    let config = CliConfig::from_env().with_overrides(
        args.menu.clone(),
        args.recipe.clone(),
        args.currency.clone(),
    );

    init_tracing(&config);

    match run(args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error [{}]: {}", err.code(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: &CliConfig) -> CliResult<()> {
    let menu = Menu::load(&config.menu_path, config.load_recipe()?)?;

    match command {
        Commands::Menu => {
            print!("{}", report::render_menu(&menu.catalog, config));
        }
        Commands::Quote { json } => {
            let report = QuoteReport::build(&menu.catalog, &menu.sandwich_ids, config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report::render_report(&report, config));
            }
        }
        Commands::Check { size, ingredients } => {
            if !size.is_purchasable() {
                warn!(size = %size, "No size selected, the sandwich cannot be sold");
            }
            let mut catalog = menu.catalog;
            let ids = resolve_names(&catalog, &ingredients)?;
            let id = catalog.new_sandwich(size, ids)?.id().to_string();
            let quote = QuoteDto::build(&catalog, &id)?;
            print!("{}", report::render_quote(&quote, config));
        }
    }
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - otherwise `SANDWICH_LOG`, then `info,sandwich=debug`
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_line_is_consistent() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let args = CommandLine::try_parse_from([
            "sandwich", "check", "--size", "grand", "Brie", "Brie", "--menu", "m.json",
        ])
        .unwrap();

        assert_eq!(args.menu, Some(PathBuf::from("m.json")));
        match args.command {
            Commands::Check { size, ingredients } => {
                assert_eq!(size, SandwichSize::Grand);
                assert_eq!(ingredients, vec!["Brie", "Brie"]);
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_size() {
        assert!(CommandLine::try_parse_from(["sandwich", "check", "--size", "XXL", "Brie"]).is_err());
        assert!(CommandLine::try_parse_from(["sandwich", "check"]).is_err());
    }

    #[test]
    fn test_check_without_size_is_not_purchasable() {
        let args = CommandLine::try_parse_from(["sandwich", "check", "Brie"]).unwrap();
        match args.command {
            Commands::Check { size, .. } => {
                assert_eq!(size, SandwichSize::Undefined);
                assert!(!size.is_purchasable());
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_parse_quote_json() {
        let args = CommandLine::try_parse_from(["sandwich", "q", "--json"]).unwrap();
        assert!(matches!(args.command, Commands::Quote { json: true }));
    }
}
