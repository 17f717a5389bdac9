//! Open the config file in an editor

use anyhow::Result;
use colored::Colorize;
use std::env;
use std::process::Command;

use crate::cli::context::Context;

/// Editor from `$EDITOR`, or the platform's usual default
fn editor() -> String {
    env::var("EDITOR").unwrap_or_else(|_| {
        if cfg!(windows) {
            "notepad".to_string()
        } else {
            "vi".to_string()
        }
    })
}

/// Execute the edit action
pub fn execute(ctx: &Context) -> Result<()> {
    let file = ctx.store.ensure_file_exists()?;
    let editor = editor();

    eprintln!(
        "Opening {} in {}...",
        file.display().to_string().cyan(),
        editor.yellow()
    );

    let status = Command::new(&editor).arg(&file).status()?;

    if !status.success() {
        anyhow::bail!("Editor exited with non-zero status");
    }

    ctx.print_success("Config file edited successfully");
    Ok(())
}
