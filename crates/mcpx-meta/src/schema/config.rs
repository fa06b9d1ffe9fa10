//! The canonical `.mcpx.json` document.

use serde::{Deserialize, Serialize};

use super::{McpServer, ProviderId, ServerMap};

/// File name of the canonical configuration at the project root.
pub const CONFIG_FILENAME: &str = ".mcpx.json";

/// The only schema version this build reads and writes.
pub const CONFIG_VERSION: u32 = 1;

/// Root of `.mcpx.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpxConfig {
    pub version: u32,
    /// Selected providers, in the order they are synchronized.
    #[serde(default)]
    pub providers: Vec<ProviderId>,
    #[serde(default)]
    pub servers: ServerMap,
}

impl Default for McpxConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            providers: Vec::new(),
            servers: ServerMap::new(),
        }
    }
}

impl McpxConfig {
    pub fn new(providers: Vec<ProviderId>) -> Self {
        Self {
            providers,
            ..Self::default()
        }
    }

    /// Servers that generated provider files should contain.
    pub fn enabled_servers(&self) -> ServerMap {
        self.servers
            .iter()
            .filter(|(_, server)| server.is_enabled())
            .map(|(name, server)| (name.clone(), server.clone()))
            .collect()
    }

    pub fn server(&self, name: &str) -> Option<&McpServer> {
        self.servers.get(name)
    }

    /// Serialize as pretty JSON with a trailing newline.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Transport;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_empty_v1() {
        let config = McpxConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.providers.is_empty());
        assert!(config.servers.is_empty());
    }

    #[test]
    fn test_enabled_servers_skips_disabled() {
        let mut config = McpxConfig::new(vec![ProviderId::ClaudeCode]);
        config
            .servers
            .insert("on".into(), McpServer::new(Transport::http("https://on")));
        config.servers.insert(
            "explicit".into(),
            McpServer::new(Transport::http("https://explicit")).with_enabled(true),
        );
        config.servers.insert(
            "off".into(),
            McpServer::new(Transport::http("https://off")).with_enabled(false),
        );

        let enabled: Vec<_> = config.enabled_servers().into_keys().collect();
        assert_eq!(enabled, vec!["explicit".to_string(), "on".to_string()]);
    }

    #[test]
    fn test_pretty_output() {
        let config = McpxConfig::new(vec![ProviderId::Vscode]);
        let text = config.to_json_pretty().unwrap();
        assert_eq!(
            text,
            "{\n  \"version\": 1,\n  \"providers\": [\n    \"vscode\"\n  ],\n  \"servers\": {}\n}\n"
        );
    }
}
