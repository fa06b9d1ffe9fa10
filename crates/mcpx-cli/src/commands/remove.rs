//! Remove command implementation

use colored::Colorize;

use super::sync::sync_config;
use crate::context::Context;
use crate::error::{CliError, Result};
use crate::interactive;

/// Run the remove command
pub fn run_remove(ctx: &Context, name: &str, yes: bool) -> Result<()> {
    let config = ctx.load_config()?;
    if !config.servers.contains_key(name) {
        return Err(CliError::user(format!("Server '{name}' not found")));
    }

    if !yes && !interactive::confirm(&format!("Remove server '{name}'?"))? {
        println!("Cancelled.");
        return Ok(());
    }

    let config = ctx.store().remove_server(name)?;
    println!("{} Removed server {}", "OK".green().bold(), name.cyan());
    sync_config(ctx, &config, true)
}
