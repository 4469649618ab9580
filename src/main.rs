//! Showroom - content index builder for a car dealership static site.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use showroom::{
    cli::{self, Cli, Commands},
    config::ShowroomConfig,
    log, logger,
};

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Err(err) = run(&cli) {
        log!("error"; "{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ShowroomConfig::load(cli)?;

    match cli.resolved_command() {
        Commands::Build => cli::build::build_all(&config).map(|_| ()),
        Commands::List { args } => cli::list::run_list(&args, &config),
        Commands::Reserve { args } => cli::reserve::run_reserve(&args, &config),
        Commands::Scaffold => cli::scaffold::run_scaffold(&config),
    }
}
