//! Load, save and mutate `.mcpx.json`.
//!
//! The store keeps no copy of the configuration between calls. Every
//! mutation reads the file, changes it in memory and writes it back, so two
//! sequential invocations never work from a stale copy. Concurrent writers
//! are last-write-wins.

use tracing::{debug, info};

use mcpx_fs::{FileSystem, NormalizedPath};
use mcpx_meta::{CONFIG_FILENAME, McpServer, McpxConfig, ProviderId, ServerMap, validate_config};

use crate::{Error, Result};

/// Access to the canonical configuration of one project.
pub struct ConfigStore<'a> {
    root: NormalizedPath,
    fs: &'a dyn FileSystem,
}

impl<'a> ConfigStore<'a> {
    pub fn new(root: NormalizedPath, fs: &'a dyn FileSystem) -> Self {
        Self { root, fs }
    }

    /// Location of `.mcpx.json`.
    pub fn path(&self) -> NormalizedPath {
        self.root.join(CONFIG_FILENAME)
    }

    pub fn exists(&self) -> bool {
        self.fs.exists(&self.path())
    }

    /// Read and validate the configuration.
    pub fn load(&self) -> Result<McpxConfig> {
        let path = self.path();
        let content = self.fs.read_text(&path).map_err(|e| {
            if e.is_not_found() {
                Error::ConfigNotFound {
                    path: path.to_string(),
                }
            } else {
                Error::Fs(e)
            }
        })?;
        let raw: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        let config = validate_config(&raw)?;
        debug!(
            path = %path,
            servers = config.servers.len(),
            providers = config.providers.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Write the configuration as pretty JSON with a trailing newline.
    pub fn save(&self, config: &McpxConfig) -> Result<()> {
        let path = self.path();
        self.fs.write_text(&path, &config.to_json_pretty()?)?;
        info!(path = %path, "saved configuration");
        Ok(())
    }

    /// Write a configuration with no servers.
    pub fn create_empty(&self, providers: Vec<ProviderId>) -> Result<McpxConfig> {
        let config = McpxConfig::new(providers);
        self.save(&config)?;
        Ok(config)
    }

    /// Insert or replace a server entry.
    pub fn add_server(&self, name: &str, server: McpServer) -> Result<McpxConfig> {
        self.update(|config| {
            config.servers.insert(name.to_string(), server);
        })
    }

    /// Remove a server entry. Removing an unknown name still rewrites the file.
    pub fn remove_server(&self, name: &str) -> Result<McpxConfig> {
        self.update(|config| {
            config.servers.remove(name);
        })
    }

    /// Replace the provider selection.
    pub fn set_providers(&self, providers: Vec<ProviderId>) -> Result<McpxConfig> {
        self.update(|config| config.providers = providers)
    }

    pub fn servers(&self) -> Result<ServerMap> {
        Ok(self.load()?.servers)
    }

    pub fn providers(&self) -> Result<Vec<ProviderId>> {
        Ok(self.load()?.providers)
    }

    fn update(&self, mutate: impl FnOnce(&mut McpxConfig)) -> Result<McpxConfig> {
        let mut config = self.load()?;
        mutate(&mut config);
        self.save(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpx_fs::LocalFs;
    use mcpx_test_utils::{TestProject, fixtures};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_empty_then_load() {
        let project = TestProject::new();
        let fs = LocalFs::new();
        let store = ConfigStore::new(project.root_path(), &fs);

        assert!(!store.exists());
        store.create_empty(vec![ProviderId::ClaudeCode]).unwrap();
        assert!(store.exists());

        let config = store.load().unwrap();
        assert_eq!(config.providers, vec![ProviderId::ClaudeCode]);
        assert!(config.servers.is_empty());
        assert_eq!(
            project.read_file(".mcpx.json"),
            "{\n  \"version\": 1,\n  \"providers\": [\n    \"claude-code\"\n  ],\n  \"servers\": {}\n}\n"
        );
    }

    #[test]
    fn test_mutations_reload_from_disk() {
        let project = TestProject::new();
        let fs = LocalFs::new();
        let store = ConfigStore::new(project.root_path(), &fs);
        store.create_empty(Vec::new()).unwrap();

        store.add_server("jira", fixtures::jira()).unwrap();
        // Another process edits the file between two invocations
        project.write_config(&[ProviderId::Vscode], store.servers().unwrap());

        let config = store.add_server("remote", fixtures::remote()).unwrap();
        assert_eq!(config.providers, vec![ProviderId::Vscode]);
        assert_eq!(config.servers.len(), 2);

        let config = store.remove_server("jira").unwrap();
        assert_eq!(config.servers.keys().collect::<Vec<_>>(), vec!["remote"]);

        store
            .set_providers(vec![ProviderId::OpenaiCodex, ProviderId::Opencode])
            .unwrap();
        assert_eq!(
            store.providers().unwrap(),
            vec![ProviderId::OpenaiCodex, ProviderId::Opencode]
        );
    }

    #[test]
    fn test_load_missing_file() {
        let project = TestProject::new();
        let fs = LocalFs::new();
        let store = ConfigStore::new(project.root_path(), &fs);
        assert!(matches!(store.load(), Err(Error::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_rejects_non_json() {
        let project = TestProject::new();
        project.write_file(".mcpx.json", "version = 1");
        let fs = LocalFs::new();
        let store = ConfigStore::new(project.root_path(), &fs);
        assert!(matches!(store.load(), Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_load_reports_validation_path() {
        let project = TestProject::new();
        project.write_file(
            ".mcpx.json",
            r#"{"version": 1, "providers": [], "servers": {"jira": {"transport": "stdio"}}}"#,
        );
        let fs = LocalFs::new();
        let store = ConfigStore::new(project.root_path(), &fs);

        match store.load().unwrap_err() {
            Error::Meta(mcpx_meta::Error::Validation { path, .. }) => {
                assert_eq!(path, "servers.jira.command");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
