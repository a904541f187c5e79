//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::application::Stage;
use crate::domain::Storage;

/// Drive hardware inventories through stacked cursor decorators
#[derive(Parser, Debug)]
#[command(name = "cursorkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, env = "CURSORKIT_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Drive the inventory through a decorator chain and print the tally
    Process {
        #[command(flatten)]
        source: SourceArgs,

        /// Decorator stage, innermost first: log, count, filter or filter:<min>
        #[arg(long = "stage", value_name = "STAGE")]
        stages: Vec<Stage>,
    },

    /// Print the inventory in container order
    List {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Where elements come from and how they are stored.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Inventory TOML file (default: configured inventory, else built-in sample)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub inventory: Option<PathBuf>,

    /// Container storage: array or list
    #[arg(short, long)]
    pub storage: Option<Storage>,

    /// Capacity of the array container
    #[arg(long)]
    pub capacity: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Print global config file path
    Path,
    /// Print a commented config template
    Template,
}
