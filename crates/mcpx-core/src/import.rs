//! Explicit import of a provider file into the canonical configuration.

use tracing::info;

use mcpx_fs::{FileSystem, NormalizedPath};
use mcpx_meta::{McpxConfig, ServerMap};
use mcpx_providers::Provider;

use crate::Result;

/// Read and parse one provider's file.
///
/// Unlike detection, a missing, unreadable or malformed file is an error.
pub fn import_servers(
    provider: &dyn Provider,
    root: &NormalizedPath,
    fs: &dyn FileSystem,
) -> Result<ServerMap> {
    let path = provider.locate(root);
    let content = fs.read_text(&path)?;
    let servers = provider.parse(&content)?;
    info!(provider = %provider.id(), servers = servers.len(), "read provider file");
    Ok(servers)
}

/// Copy the servers named in `selection` (all of them when `None`) into
/// `config`, replacing entries of the same name.
///
/// Returns the names that were imported.
pub fn merge_imported(
    config: &mut McpxConfig,
    servers: ServerMap,
    selection: Option<&[String]>,
) -> Vec<String> {
    let mut imported = Vec::new();
    for (name, server) in servers {
        if let Some(selected) = selection
            && !selected.contains(&name)
        {
            continue;
        }
        config.servers.insert(name.clone(), server);
        imported.push(name);
    }
    imported
}
