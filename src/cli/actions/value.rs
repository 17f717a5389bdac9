//! Read and write individual config entries

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;

/// Print the value stored under `key`
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let file = ctx.store.ensure_file_exists()?;
    let value = ctx.store.get_value(&file, key)?;
    println!("{}", value);
    Ok(())
}

/// Store `value` under `key`
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let file = ctx.store.ensure_file_exists()?;
    ctx.store.set_value(&file, key, value)?;

    ctx.print_success(&format!(
        "Set {} in {}",
        key.yellow(),
        file.display().to_string().cyan()
    ));
    Ok(())
}
