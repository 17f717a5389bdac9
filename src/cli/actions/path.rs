//! Resolve and print the save path

use anyhow::{Context as _, Result};
use colored::Colorize;

use crate::cli::context::Context;
use crate::console::StdConsole;
use crate::platform::SystemPlatform;
use crate::resolver::PathResolver;

/// Execute the path action
pub fn execute(ctx: &Context) -> Result<()> {
    let mut resolver = PathResolver::new(ctx.store.clone(), SystemPlatform, StdConsole::new());
    let resolution = resolver
        .resolve()
        .context("Failed to resolve save path")?;

    println!("{}", resolution.path);

    if resolution.was_persisted() {
        ctx.print_success(&format!(
            "Saved save path to {}",
            ctx.store.file_path().display().to_string().cyan()
        ));
    }

    Ok(())
}
