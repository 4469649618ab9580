//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::{SortKey, StatusFilter};

/// Showroom content index builder CLI
///
/// Without a subcommand, runs `build`.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Project root directory
    #[arg(short, long, global = true, default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub root: PathBuf,

    /// Config file path, relative to the project root (optional file)
    #[arg(short = 'C', long, global = true, default_value = "showroom.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Regenerate the cars and contacts JSON indexes
    #[command(visible_alias = "b")]
    Build,

    /// List cars from the generated index
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        args: ListArgs,
    },

    /// Print the WhatsApp reservation message and link for a car
    #[command(visible_alias = "r")]
    Reserve {
        #[command(flatten)]
        args: ReserveArgs,
    },

    /// Create the per-car image folders under the image directory
    Scaffold,
}

/// List command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Only show cars with this status (all, available, sold, incoming)
    #[arg(short, long, default_value = "all")]
    pub status: StatusFilter,

    /// Sort order (featured, price-low, price-high, year-new)
    #[arg(short = 'o', long = "sort", default_value = "featured")]
    pub sort: SortKey,

    /// Print JSON instead of a table
    #[arg(short, long)]
    pub json: bool,
}

/// Reserve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ReserveArgs {
    /// Slug of the car to reserve
    pub slug: String,

    /// Contact name to reserve through (case-insensitive); first contact if omitted
    #[arg(short, long)]
    pub contact: Option<String>,
}

impl Cli {
    /// The subcommand to run, `build` when none was given.
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_builds() {
        let cli = Cli::parse_from(["showroom"]);
        assert!(matches!(cli.resolved_command(), Commands::Build));
        assert_eq!(cli.root, PathBuf::from("."));
    }

    #[test]
    fn test_list_args() {
        let cli = Cli::parse_from(["showroom", "list", "--status", "sold", "--sort", "price-high"]);
        let Commands::List { args } = cli.resolved_command() else {
            panic!("expected list");
        };
        assert_eq!(args.status, StatusFilter::Only(crate::content::CarStatus::Sold));
        assert_eq!(args.sort, SortKey::PriceHigh);
        assert!(!args.json);
    }

    #[test]
    fn test_reserve_args_with_global_root() {
        let cli = Cli::parse_from(["showroom", "reserve", "toyota-corolla", "-c", "samuel maina", "--root", "site"]);
        let Commands::Reserve { args } = cli.resolved_command() else {
            panic!("expected reserve");
        };
        assert_eq!(args.slug, "toyota-corolla");
        assert_eq!(args.contact.as_deref(), Some("samuel maina"));
        assert_eq!(cli.root, PathBuf::from("site"));
    }
}
