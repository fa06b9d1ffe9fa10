//! Discovery of existing provider files in a project.

use tracing::{debug, warn};

use mcpx_fs::{FileSystem, NormalizedPath};
use mcpx_meta::ProviderId;
use mcpx_providers::{Provider, ProviderRegistry};

/// A provider file found in the project, with the server names it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub provider: ProviderId,
    pub path: NormalizedPath,
    pub servers: Vec<String>,
}

/// Scans a project for files of providers that keep per-project config.
///
/// Global-only providers are never reported: their file belongs to the
/// user, not to the project.
pub struct Detector<'a> {
    registry: &'a ProviderRegistry,
    fs: &'a dyn FileSystem,
}

impl<'a> Detector<'a> {
    pub fn new(registry: &'a ProviderRegistry, fs: &'a dyn FileSystem) -> Self {
        Self { registry, fs }
    }

    /// Every importable provider file, in catalogue order.
    pub fn detect_all(&self, root: &NormalizedPath) -> Vec<Detection> {
        self.registry
            .project_providers()
            .into_iter()
            .filter_map(|provider| self.detect_one(provider, root))
            .collect()
    }

    /// `None` when the file is absent, unreadable or not in the provider's
    /// format.
    pub fn detect_one(&self, provider: &dyn Provider, root: &NormalizedPath) -> Option<Detection> {
        if !provider.exists(self.fs, root) {
            return None;
        }
        let path = provider.locate(root);
        let content = self
            .fs
            .read_text(&path)
            .inspect_err(|e| warn!(path = %path, error = %e, "skipping unreadable provider file"))
            .ok()?;
        let servers = provider
            .parse(&content)
            .inspect_err(|e| warn!(path = %path, error = %e, "skipping unparseable provider file"))
            .ok()?;

        debug!(provider = %provider.id(), servers = servers.len(), "detected provider file");
        Some(Detection {
            provider: provider.id(),
            path,
            servers: servers.into_keys().collect(),
        })
    }
}
