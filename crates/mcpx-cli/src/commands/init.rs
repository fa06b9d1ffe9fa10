//! Init command implementation
//!
//! Creates `.mcpx.json`, optionally seeded from one provider's existing file.

use colored::Colorize;

use mcpx_core::{Detector, import_servers, merge_imported};
use mcpx_meta::{CONFIG_FILENAME, McpxConfig, ProviderId};

use super::sync::sync_config;
use crate::context::Context;
use crate::error::{CliError, Result};
use crate::interactive;

/// Run the init command
///
/// Without `-p`, the user picks providers interactively; providers whose
/// files already exist in the project start ticked.
pub fn run_init(
    ctx: &Context,
    providers: Vec<ProviderId>,
    import: Option<ProviderId>,
    force: bool,
) -> Result<()> {
    let store = ctx.store();
    if store.exists() && !force {
        return Err(CliError::user(format!(
            "{CONFIG_FILENAME} already exists in {}. Use --force to overwrite it.",
            ctx.root
        )));
    }

    let providers = if providers.is_empty() {
        let detected: Vec<ProviderId> = Detector::new(&ctx.registry, &ctx.fs)
            .detect_all(&ctx.root)
            .into_iter()
            .map(|d| d.provider)
            .collect();
        interactive::select_providers(&ctx.registry, &detected)?
    } else {
        ProviderId::unique(&providers)
    };

    println!(
        "{} Initializing {} in {}",
        "=>".blue().bold(),
        CONFIG_FILENAME,
        ctx.root.as_str().cyan()
    );

    // Nothing is written until the import has succeeded
    let mut config = McpxConfig::new(providers);
    if let Some(id) = import {
        let provider = ctx
            .registry
            .get(id)
            .ok_or_else(|| CliError::user(format!("Unknown provider: {id}")))?;
        let servers = import_servers(provider, &ctx.root, &ctx.fs)?;
        let imported = merge_imported(&mut config, servers, None);
        println!(
            "   {} Imported {} server(s) from {}",
            "+".green(),
            imported.len(),
            provider.display_name()
        );
    }
    store.save(&config)?;

    println!("{} Created {}", "OK".green().bold(), CONFIG_FILENAME);
    sync_config(ctx, &config, true)
}
