//! Read-only comparison of provider files against the canonical servers.

use mcpx_fs::{FileSystem, NormalizedPath};
use mcpx_meta::ServerMap;
use mcpx_providers::Provider;

/// Whether a provider file matches what a sync would produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderStatus {
    /// A sync would leave the file untouched.
    InSync,
    /// A sync would rewrite the file.
    OutOfSync,
    Missing,
    Unreadable(String),
}

impl ProviderStatus {
    pub fn needs_sync(&self) -> bool {
        !matches!(self, Self::InSync)
    }
}

/// Compare the provider file with the result of merging `servers` into it.
///
/// Never writes.
pub fn check_status(
    provider: &dyn Provider,
    root: &NormalizedPath,
    servers: &ServerMap,
    fs: &dyn FileSystem,
) -> ProviderStatus {
    let path = provider.locate(root);
    if !fs.exists(&path) {
        return ProviderStatus::Missing;
    }
    let current = match fs.read_text(&path) {
        Ok(current) => current,
        Err(e) => return ProviderStatus::Unreadable(e.to_string()),
    };
    match provider.generate(servers, Some(&current)) {
        Ok(merged) if merged == current => ProviderStatus::InSync,
        Ok(_) => ProviderStatus::OutOfSync,
        Err(e) => ProviderStatus::Unreadable(e.to_string()),
    }
}
