//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "noitaedit")]
#[command(about = "Locate and remember the Noita save directory")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this config file instead of <config dir>/NoitaEdit/setup.cf
    #[arg(short, long, global = true)]
    pub config_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the save path, detecting or asking for it on first run (default)
    Path,

    /// Print a value from the config file
    Get {
        /// Entry key
        key: String,
    },

    /// Store a value in the config file
    Set {
        /// Entry key
        key: String,
        /// Value, written verbatim
        value: String,
    },

    /// Print the location of the config file, creating it if missing
    Where,

    /// Open the config file in $EDITOR
    Edit,
}

impl Cli {
    /// Subcommand to run, `path` when none was given
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Path)
    }
}
