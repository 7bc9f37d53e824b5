//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gamelist")]
#[command(about = "Load emulator game listings into a catalog", long_about = None)]
pub(crate) struct Cli {
    /// Namespace prefixed to game names (defaults to the saved prefix, then "mame")
    #[arg(short, long, global = true)]
    pub prefix: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The listing document to load.
#[derive(Args, Clone)]
pub(crate) struct ListingArgs {
    /// Path to the XML listing (e.g. the output of `mame -listxml`)
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Load a listing and print one line per game
    List {
        #[command(flatten)]
        listing: ListingArgs,

        /// Print the records as JSON instead
        #[arg(long)]
        json: bool,

        /// Maximum number of games to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only show clones
        #[arg(long, conflicts_with = "no_clones")]
        clones: bool,

        /// Hide clones
        #[arg(long)]
        no_clones: bool,
    },

    /// Load a listing and print every field of one game
    Show {
        #[command(flatten)]
        listing: ListingArgs,

        /// Game name, with or without the namespace prefix
        name: String,
    },

    /// Load a listing and print summary statistics
    Stats {
        #[command(flatten)]
        listing: ListingArgs,
    },

    /// Manage saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and its contents
    Show,

    /// Print the settings file path
    Path,

    /// Save the default namespace prefix
    SetPrefix {
        /// Prefix to use when --prefix is not given
        prefix: String,
    },

    /// Remove the saved default prefix
    ClearPrefix,
}
