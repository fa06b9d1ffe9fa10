//! Providers command implementation

use colored::Colorize;

use mcpx_core::{Synchronizer, removed_providers};
use mcpx_meta::ProviderId;

use super::sync::{print_results, sync_config};
use crate::context::Context;
use crate::error::Result;

/// Run the providers command
///
/// Without ids, lists every known provider and marks the selected ones.
/// With ids, replaces the selection: deselected providers lose their file,
/// the rest are synced.
pub fn run_providers(ctx: &Context, ids: Vec<ProviderId>) -> Result<()> {
    let config = ctx.load_config()?;
    if ids.is_empty() {
        return list_providers(ctx, &config.providers);
    }

    let selection = ProviderId::unique(&ids);
    let removed = removed_providers(&config.providers, &selection);
    let config = ctx.store().set_providers(selection)?;
    let names: Vec<&str> = ctx
        .registry
        .by_ids(&config.providers)
        .into_iter()
        .map(|p| p.display_name())
        .collect();
    println!("{} Providers: {}", "OK".green().bold(), names.join(", "));

    if !removed.is_empty() {
        println!("{} Removing deselected provider files...", "=>".blue().bold());
        let results = Synchronizer::new(&ctx.fs)
            .cleanup_removed(&ctx.registry.by_ids(&removed), &ctx.root);
        if results.is_empty() {
            println!("   nothing to remove");
        }
        print_results(ctx, &results);
    }

    sync_config(ctx, &config, true)
}

fn list_providers(ctx: &Context, selected: &[ProviderId]) -> Result<()> {
    println!("{} Providers:", "=>".blue().bold());
    for descriptor in ctx.registry.descriptors() {
        let mark = if selected.contains(&descriptor.id) {
            "[x]".green()
        } else {
            "[ ]".dimmed()
        };
        println!(
            "   {} {:<14} {:<16} {}",
            mark,
            descriptor.id.as_str(),
            descriptor.display_name,
            descriptor.display_path().dimmed()
        );
    }
    Ok(())
}
