//! Import command implementation
//!
//! Copies servers from an existing provider file into `.mcpx.json`,
//! creating it when needed.

use colored::Colorize;

use mcpx_core::{Detector, import_servers, merge_imported};
use mcpx_meta::{CONFIG_FILENAME, ProviderId};

use super::sync::sync_config;
use crate::context::Context;
use crate::error::{CliError, Result};
use crate::interactive;

/// Run the import command
///
/// The source is the named provider, else the only detected provider file,
/// else the user's pick among the detected ones.
pub fn run_import(
    ctx: &Context,
    provider: Option<ProviderId>,
    servers: Vec<String>,
    sync: bool,
) -> Result<()> {
    let id = match provider {
        Some(id) => id,
        None => choose_source(ctx)?,
    };
    let provider = ctx
        .registry
        .get(id)
        .ok_or_else(|| CliError::user(format!("Unknown provider: {id}")))?;

    let parsed = import_servers(provider, &ctx.root, &ctx.fs)?;
    if let Some(missing) = servers.iter().find(|name| !parsed.contains_key(*name)) {
        return Err(CliError::user(format!(
            "Server '{missing}' not found in {}",
            ctx.display_path(&provider.locate(&ctx.root))
        )));
    }
    if parsed.is_empty() {
        println!("No servers found in {}.", provider.display_name());
        return Ok(());
    }

    let store = ctx.store();
    let mut config = if store.exists() {
        ctx.load_config()?
    } else {
        store.create_empty(Vec::new())?
    };
    let selection = (!servers.is_empty()).then_some(servers.as_slice());
    let imported = merge_imported(&mut config, parsed, selection);
    store.save(&config)?;

    for name in &imported {
        println!("   {} {}", "+".green(), name);
    }
    println!(
        "{} Imported {} server(s) from {} into {}",
        "OK".green().bold(),
        imported.len(),
        provider.display_name(),
        CONFIG_FILENAME
    );

    if sync {
        sync_config(ctx, &config, true)?;
    }
    Ok(())
}

fn choose_source(ctx: &Context) -> Result<ProviderId> {
    let detections = Detector::new(&ctx.registry, &ctx.fs).detect_all(&ctx.root);
    match detections.as_slice() {
        [] => Err(CliError::user(format!(
            "No provider config files found in {}",
            ctx.root
        ))),
        [only] => Ok(only.provider),
        _ => Ok(interactive::select_detection(&ctx.registry, &detections)?.provider),
    }
}
