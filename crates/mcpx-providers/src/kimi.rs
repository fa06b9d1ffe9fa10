//! Kimi CLI: `~/.kimi/mcp.json`.
//!
//! Kimi only reads its home-directory file, so this provider writes there.
//! Earlier versions wrote `.kimi/mcp.json` inside the project; that path is
//! reported as a legacy location so it can be cleaned up.

use serde_json::{Map, Value, json};

use mcpx_fs::NormalizedPath;
use mcpx_meta::{McpServer, ProviderDescriptor, ProviderId, ServerMap, Transport};

use crate::json::{self, insert_list, insert_map};
use crate::{Provider, Result};

static DESCRIPTOR: ProviderDescriptor = ProviderDescriptor::global(
    ProviderId::KimiCli,
    "Kimi CLI",
    ".kimi/mcp.json",
    ".kimi/mcp.json",
);

const SERVERS_KEY: &str = "mcpServers";

#[derive(Debug, Clone)]
pub struct KimiCliProvider {
    home: NormalizedPath,
}

impl KimiCliProvider {
    pub fn new(home: NormalizedPath) -> Self {
        Self { home }
    }
}

fn to_native(server: &McpServer) -> Value {
    let mut obj = Map::new();
    match &server.transport {
        Transport::Stdio {
            command, args, env, ..
        } => {
            obj.insert("command".into(), json!(command));
            insert_list(&mut obj, "args", args);
            insert_map(&mut obj, "env", env);
        }
        Transport::Http { url, headers } => {
            obj.insert("url".into(), json!(url));
            obj.insert("transport".into(), json!("http"));
            insert_map(&mut obj, "headers", headers);
        }
    }
    Value::Object(obj)
}

impl Provider for KimiCliProvider {
    fn descriptor(&self) -> &ProviderDescriptor {
        &DESCRIPTOR
    }

    fn generate(&self, servers: &ServerMap, existing: Option<&str>) -> Result<String> {
        let entries = json::servers_object(servers, to_native);
        json::merge_document(existing, SERVERS_KEY, entries, Map::new)
    }

    fn parse(&self, content: &str) -> Result<ServerMap> {
        json::parse_document(DESCRIPTOR.id, content, SERVERS_KEY, |name, obj| {
            json::read_entry(DESCRIPTOR.id, name, obj, "env")
        })
    }

    fn locate(&self, _root: &NormalizedPath) -> NormalizedPath {
        self.home
            .join(DESCRIPTOR.global_path.unwrap_or(DESCRIPTOR.config_path))
    }

    fn legacy_path(&self, root: &NormalizedPath) -> Option<NormalizedPath> {
        Some(root.join(DESCRIPTOR.config_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpx_test_utils::fixtures;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_locate_ignores_project_root() {
        let provider = KimiCliProvider::new(NormalizedPath::new("/home/me"));
        let root = NormalizedPath::new("/work/project");
        assert_eq!(provider.locate(&root).as_str(), "/home/me/.kimi/mcp.json");
        assert_eq!(
            provider.legacy_path(&root).unwrap().as_str(),
            "/work/project/.kimi/mcp.json"
        );
        assert!(!provider.descriptor().supports_project);
    }

    #[test]
    fn test_http_entry_carries_transport() {
        let provider = KimiCliProvider::new(NormalizedPath::new("/home/me"));
        let servers = ServerMap::from([("remote".to_string(), fixtures::remote())]);
        let text = provider.generate(&servers, None).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["mcpServers"]["remote"]["transport"], json!("http"));
        assert_eq!(provider.parse(&text).unwrap(), servers);
    }
}
