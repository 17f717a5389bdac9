//! Print the config file location

use anyhow::Result;

use crate::cli::context::Context;

/// Execute the where action
pub fn execute(ctx: &Context) -> Result<()> {
    let file = ctx.store.ensure_file_exists()?;
    println!("{}", file.display());
    Ok(())
}
