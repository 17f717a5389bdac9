//! Command execution context

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::Cli;
use crate::config::ConfigStore;
use crate::fs::RealFs;

/// Common context for command execution
pub struct Context {
    pub store: ConfigStore<RealFs>,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let store = match &cli.config_file {
            Some(path) => ConfigStore::new(RealFs, path.clone()),
            None => ConfigStore::open_default()?,
        };

        Ok(Self { store })
    }

    /// Print a success message. Goes to stderr so stdout stays a bare value.
    pub fn print_success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }
}
