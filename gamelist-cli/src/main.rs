//! gamelist CLI
//!
//! Command-line interface for loading machine-readable emulator listings
//! into a game catalog and reporting on the result.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::List {
            listing,
            json,
            limit,
            clones,
            no_clones,
        } => {
            let namespace = settings::resolve_prefix(cli.prefix)?;
            let filter = commands::list::CloneFilter::from_flags(clones, no_clones);
            commands::list::run_list(&listing.file, &namespace, cli.quiet, json, limit, filter)
        }
        Commands::Show { listing, name } => {
            let namespace = settings::resolve_prefix(cli.prefix)?;
            commands::show::run_show(&listing.file, &namespace, cli.quiet, &name)
        }
        Commands::Stats { listing } => {
            let namespace = settings::resolve_prefix(cli.prefix)?;
            commands::stats::run_stats(&listing.file, &namespace, cli.quiet)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetPrefix { prefix } => commands::config::run_config_set_prefix(&prefix),
            ConfigAction::ClearPrefix => commands::config::run_config_clear_prefix(),
        },
    }
}

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
