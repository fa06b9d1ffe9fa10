//! Status command implementation

use colored::Colorize;

use mcpx_core::{ProviderStatus, check_status};

use crate::context::Context;
use crate::error::Result;

/// Run the status command
///
/// Read-only: compares each selected provider file with what `mcpx sync`
/// would write.
pub fn run_status(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let providers = ctx.registry.by_ids(&config.providers);

    println!(
        "{} {} server(s), {} provider(s)",
        "=>".blue().bold(),
        config.servers.len(),
        providers.len()
    );

    let mut stale = 0;
    for provider in &providers {
        let status = check_status(*provider, &ctx.root, &config.servers, &ctx.fs);
        if status.needs_sync() {
            stale += 1;
        }
        let label = match &status {
            ProviderStatus::InSync => "sync".green().to_string(),
            ProviderStatus::OutOfSync => "desync".yellow().to_string(),
            ProviderStatus::Missing => "missing".yellow().to_string(),
            ProviderStatus::Unreadable(message) => {
                format!("{} ({message})", "unreadable".red())
            }
        };
        println!(
            "   {:<16} {:<30} {}",
            provider.display_name(),
            provider.descriptor().display_path(),
            label
        );
    }

    println!();
    if stale == 0 {
        println!("{} All providers are in sync.", "OK".green().bold());
    } else {
        println!(
            "{} {} provider(s) out of date. Run {} to update.",
            "!".yellow().bold(),
            stale,
            "mcpx sync".cyan()
        );
    }
    Ok(())
}
