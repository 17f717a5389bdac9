//! noitaedit - Noita save directory locator

use anyhow::Result;
use clap::Parser;

use noitaedit::cli::{actions, Cli, Commands, Context};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context::from_cli(&cli)?;

    match cli.command() {
        Commands::Path => actions::path::execute(&ctx),
        Commands::Get { key } => actions::value::get(&ctx, key),
        Commands::Set { key, value } => actions::value::set(&ctx, key, value),
        Commands::Where => actions::location::execute(&ctx),
        Commands::Edit => actions::edit::execute(&ctx),
    }
}
