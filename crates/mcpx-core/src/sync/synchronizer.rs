//! Writing and deleting provider files.

use tracing::{debug, info, warn};

use mcpx_fs::{FileSystem, NormalizedPath};
use mcpx_meta::ServerMap;
use mcpx_providers::Provider;

use super::{SyncResult, SyncStatus};
use crate::Result;

/// Writes each provider's native file from the canonical servers.
///
/// Failures are captured per provider; one provider's error never stops the
/// others.
pub struct Synchronizer<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> Synchronizer<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Bring one provider's file in line with `servers`.
    ///
    /// An existing file is merged and only rewritten when the merge changes
    /// it; a missing file is created from scratch.
    pub fn sync_one(
        &self,
        provider: &dyn Provider,
        root: &NormalizedPath,
        servers: &ServerMap,
    ) -> SyncResult {
        let path = provider.locate(root);
        let status = match self.write_provider(provider, &path, servers) {
            Ok(status) => status,
            Err(e) => {
                warn!(provider = %provider.id(), path = %path, error = %e, "sync failed");
                SyncStatus::Error(e.to_string())
            }
        };
        SyncResult::new(provider.id(), path, status)
    }

    /// Sync every provider, returning results in input order.
    pub fn sync_all(
        &self,
        providers: &[&dyn Provider],
        root: &NormalizedPath,
        servers: &ServerMap,
    ) -> Vec<SyncResult> {
        providers
            .iter()
            .map(|provider| self.sync_one(*provider, root, servers))
            .collect()
    }

    /// Delete the files of providers that are no longer selected.
    ///
    /// Files that were never there produce no result. For providers with a
    /// legacy in-project path, that path is removed too when present, and a
    /// failure to do so is only logged.
    pub fn cleanup_removed(
        &self,
        providers: &[&dyn Provider],
        root: &NormalizedPath,
    ) -> Vec<SyncResult> {
        let mut results = Vec::new();
        for provider in providers {
            let path = provider.locate(root);
            match self.fs.delete(&path) {
                Ok(true) => {
                    info!(provider = %provider.id(), path = %path, "deleted provider file");
                    results.push(SyncResult::new(provider.id(), path, SyncStatus::Deleted));
                }
                Ok(false) => debug!(provider = %provider.id(), path = %path, "nothing to delete"),
                Err(e) => {
                    warn!(provider = %provider.id(), path = %path, error = %e, "delete failed");
                    results.push(SyncResult::new(
                        provider.id(),
                        path,
                        SyncStatus::Error(e.to_string()),
                    ));
                }
            }

            if let Some(legacy) = provider.legacy_path(root)
                && self.remove_legacy(&legacy) == Some(true)
            {
                results.push(SyncResult::new(provider.id(), legacy, SyncStatus::Deleted));
            }
        }
        results
    }

    /// `None` when the delete failed.
    fn remove_legacy(&self, path: &NormalizedPath) -> Option<bool> {
        self.fs
            .delete(path)
            .inspect_err(|e| warn!(path = %path, error = %e, "could not remove legacy file"))
            .ok()
    }

    fn write_provider(
        &self,
        provider: &dyn Provider,
        path: &NormalizedPath,
        servers: &ServerMap,
    ) -> Result<SyncStatus> {
        if !self.fs.exists(path) {
            let content = provider.generate(servers, None)?;
            self.fs.write_text(path, &content)?;
            info!(provider = %provider.id(), path = %path, "created provider file");
            return Ok(SyncStatus::Created);
        }

        let current = self.fs.read_text(path)?;
        let merged = provider.generate(servers, Some(&current))?;
        if merged == current {
            debug!(provider = %provider.id(), path = %path, "provider file unchanged");
            return Ok(SyncStatus::Unchanged);
        }

        self.fs.write_text(path, &merged)?;
        info!(provider = %provider.id(), path = %path, "updated provider file");
        Ok(SyncStatus::Updated)
    }
}
