//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands split into those that work without a catalog (config,
//! completions, help) and those that load one first.

use showroom_catalog::Catalog;

use crate::cli::{Cli, Commands, ConfigCommands, FilterArgs, SortChoice};
use crate::commands::config::Config;
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that run without a catalog.
pub trait StandaloneCommand {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that operate on a loaded catalog.
pub trait CatalogCommand {
    /// Execute the command against `catalog`.
    fn execute(&self, ctx: &CommandContext, catalog: &Catalog, config: &Config) -> Result<()>;
}

/// Commands that don't need a catalog.
pub enum StandaloneDispatch<'a> {
    Config(&'a Option<ConfigCommands>),
    Completions(&'a crate::cli::Shell),
    Help,
}

impl<'a> StandaloneDispatch<'a> {
    /// Try to create a standalone dispatch from the CLI command.
    /// Returns None if the command needs a catalog.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl StandaloneCommand for StandaloneDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("showroom - browse a dealership catalog");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Commands that need a catalog.
pub enum CatalogDispatch<'a> {
    List {
        filter: &'a FilterArgs,
        sort: Option<SortChoice>,
        limit: Option<usize>,
        all: bool,
    },
    Show {
        id: &'a str,
    },
    Buckets {
        filter: &'a FilterArgs,
    },
}

impl<'a> CatalogDispatch<'a> {
    /// Create a catalog dispatch from the CLI command.
    /// Returns None for standalone commands (use StandaloneDispatch first).
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::List {
                filter,
                sort,
                limit,
                all,
            }) => Some(Self::List {
                filter,
                sort: *sort,
                limit: *limit,
                all: *all,
            }),
            Some(Commands::Show { id }) => Some(Self::Show { id }),
            Some(Commands::Buckets { filter }) => Some(Self::Buckets { filter }),
            _ => None,
        }
    }
}

impl CatalogCommand for CatalogDispatch<'_> {
    fn execute(&self, ctx: &CommandContext, catalog: &Catalog, config: &Config) -> Result<()> {
        match self {
            Self::List {
                filter,
                sort,
                limit,
                all,
            } => {
                let opts = commands::list::ListOptions {
                    filter: (*filter).clone(),
                    sort: *sort,
                    limit: *limit,
                    all: *all,
                };
                commands::list::execute(ctx, catalog, config, &opts)
            }
            Self::Show { id } => commands::show::execute(ctx, catalog, id),
            Self::Buckets { filter } => commands::buckets::execute(ctx, catalog, filter),
        }
    }
}
