//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the showroom CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use showroom_catalog::filter::SortSpec;

/// showroom - Browse a dealership catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "showroom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Catalog file to load (default: from config)
    #[arg(long, global = true, env = "SHOWROOM_CATALOG", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog items
    #[command(alias = "l")]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Sort order (default: catalog order or config)
        #[arg(short, long, value_enum)]
        sort: Option<SortChoice>,

        /// Limit results (default: 50 or config)
        #[arg(long)]
        limit: Option<usize>,

        /// Show all matching items (no limit)
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },

    /// Show item details
    #[command(alias = "s")]
    Show {
        /// Item ID
        id: String,
    },

    /// Show how many items each price bucket would list
    Buckets {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Filter flags shared by `list` and `buckets`.
///
/// Values are passed through as typed on the page controls: `all` or an
/// empty value clears a filter, and values that can't be read are ignored.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Search item names (case-insensitive)
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Filter by category (e.g., "scooter")
    #[arg(short, long)]
    pub category: Option<String>,

    /// Filter by brand (e.g., "honda")
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Price bucket id or range (e.g., "0-100000", "300000+")
    #[arg(short, long)]
    pub price: Option<String>,

    /// Minimum price, inclusive
    #[arg(long, value_name = "AMOUNT")]
    pub min_price: Option<String>,

    /// Maximum price, exclusive
    #[arg(long, value_name = "AMOUNT")]
    pub max_price: Option<String>,

    /// Require a feature flag (e.g., "open", "weekend", "abs")
    #[arg(short, long)]
    pub feature: Option<String>,

    /// Exact field match (repeatable; e.g., "brand=honda", "tag:region=ncr")
    #[arg(short = 'w', long = "where", value_name = "FIELD=VALUE", action = clap::ArgAction::Append)]
    pub conditions: Vec<String>,
}

/// Sort choices offered by the catalog page.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortChoice {
    /// A to Z
    Name,
    /// Cheapest first
    PriceLow,
    /// Most expensive first
    PriceHigh,
    /// Most recently listed first
    Newest,
    /// Catalog order
    None,
}

impl From<SortChoice> for SortSpec {
    fn from(choice: SortChoice) -> Self {
        match choice {
            SortChoice::Name => SortSpec::by_name(),
            SortChoice::PriceLow => SortSpec::price_asc(),
            SortChoice::PriceHigh => SortSpec::price_desc(),
            SortChoice::Newest => SortSpec::newest(),
            SortChoice::None => SortSpec::none(),
        }
    }
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["showroom", "--verbose", "list"]);
        assert!(cli.verbose);
        assert!(!cli.quiet);
        assert!(!cli.json);

        let cli = Cli::parse_from(["showroom", "--quiet", "--json", "list"]);
        assert!(!cli.verbose);
        assert!(cli.quiet);
        assert!(cli.json);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["showroom", "-v", "-q", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_flag() {
        let cli = Cli::parse_from(["showroom", "--catalog", "bikes.json", "list"]);
        assert_eq!(cli.catalog, Some(PathBuf::from("bikes.json")));
    }

    #[test]
    fn test_list_alias() {
        let cli = Cli::parse_from(["showroom", "l"]);
        assert!(matches!(cli.command, Some(Commands::List { .. })));
    }

    #[test]
    fn test_list_filters() {
        let cli = Cli::parse_from([
            "showroom",
            "list",
            "-k",
            "click",
            "--category",
            "scooter",
            "-b",
            "honda",
            "--price",
            "0-100000",
            "--where",
            "tag:abs=true",
            "-w",
            "brand=honda",
            "--sort",
            "price-low",
        ]);

        match cli.command {
            Some(Commands::List { filter, sort, .. }) => {
                assert_eq!(filter.keyword.as_deref(), Some("click"));
                assert_eq!(filter.category.as_deref(), Some("scooter"));
                assert_eq!(filter.brand.as_deref(), Some("honda"));
                assert_eq!(filter.price.as_deref(), Some("0-100000"));
                assert_eq!(filter.conditions, vec!["tag:abs=true", "brand=honda"]);
                assert_eq!(sort, Some(SortChoice::PriceLow));
            }
            other => panic!("expected list command, got {other:?}"),
        }
    }

    #[test]
    fn test_list_price_bounds() {
        let cli = Cli::parse_from([
            "showroom",
            "list",
            "--min-price",
            "₱50,000",
            "--max-price",
            "150000",
        ]);

        match cli.command {
            Some(Commands::List { filter, .. }) => {
                assert_eq!(filter.min_price.as_deref(), Some("₱50,000"));
                assert_eq!(filter.max_price.as_deref(), Some("150000"));
            }
            other => panic!("expected list command, got {other:?}"),
        }
    }

    #[test]
    fn test_list_all_conflicts_with_limit() {
        let result = Cli::try_parse_from(["showroom", "list", "--all", "--limit", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_sort_is_rejected() {
        let result = Cli::try_parse_from(["showroom", "list", "--sort", "random"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sort_choice_into_spec() {
        assert_eq!(SortSpec::from(SortChoice::PriceHigh), SortSpec::price_desc());
        assert_eq!(SortSpec::from(SortChoice::Newest), SortSpec::newest());
        assert!(SortSpec::from(SortChoice::None).is_original());
    }

    #[test]
    fn test_show_alias() {
        let cli = Cli::parse_from(["showroom", "s", "ninja400"]);
        match cli.command {
            Some(Commands::Show { id }) => assert_eq!(id, "ninja400"),
            other => panic!("expected show command, got {other:?}"),
        }
    }

    #[test]
    fn test_buckets_accepts_filters() {
        let cli = Cli::parse_from(["showroom", "buckets", "--brand", "yamaha"]);
        match cli.command {
            Some(Commands::Buckets { filter }) => {
                assert_eq!(filter.brand.as_deref(), Some("yamaha"));
            }
            other => panic!("expected buckets command, got {other:?}"),
        }
    }

    #[test]
    fn test_config_set() {
        let cli = Cli::parse_from(["showroom", "config", "set", "output.noun", "store"]);
        match cli.command {
            Some(Commands::Config {
                command: Some(ConfigCommands::Set { key, value }),
            }) => {
                assert_eq!(key, "output.noun");
                assert_eq!(value, "store");
            }
            other => panic!("expected config set, got {other:?}"),
        }
    }

    #[test]
    fn test_completions_shell() {
        let cli = Cli::parse_from(["showroom", "completions", "zsh"]);
        if let Some(Commands::Completions { shell }) = cli.command {
            assert!(matches!(shell, Shell::Zsh));
        } else {
            panic!("expected completions command");
        }
    }
}
