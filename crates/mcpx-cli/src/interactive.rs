//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based interactive selection.

use dialoguer::{Confirm, MultiSelect, Select};

use mcpx_core::Detection;
use mcpx_meta::ProviderId;
use mcpx_providers::ProviderRegistry;

use crate::error::Result;

/// Ask which providers to keep in sync, with `preselected` ticked.
pub fn select_providers(
    registry: &ProviderRegistry,
    preselected: &[ProviderId],
) -> Result<Vec<ProviderId>> {
    let descriptors = registry.descriptors();
    let items: Vec<String> = descriptors
        .iter()
        .map(|d| format!("{} ({})", d.display_name, d.display_path()))
        .collect();
    let defaults: Vec<bool> = descriptors
        .iter()
        .map(|d| preselected.contains(&d.id))
        .collect();

    let indices = MultiSelect::new()
        .with_prompt("Select providers (space to toggle, enter to confirm)")
        .items(&items)
        .defaults(&defaults)
        .interact()?;

    Ok(indices.into_iter().map(|i| descriptors[i].id).collect())
}

/// Ask which detected provider file to import from.
pub fn select_detection<'d>(
    registry: &ProviderRegistry,
    detections: &'d [Detection],
) -> Result<&'d Detection> {
    let items: Vec<String> = detections
        .iter()
        .map(|d| {
            let name = registry
                .get(d.provider)
                .map(|p| p.display_name())
                .unwrap_or(d.provider.as_str());
            format!("{name} ({} servers)", d.servers.len())
        })
        .collect();

    let index = Select::new()
        .with_prompt("Import from which provider?")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(&detections[index])
}

/// Yes/no question defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
