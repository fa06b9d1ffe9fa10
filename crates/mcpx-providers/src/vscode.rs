//! VS Code: `.vscode/mcp.json`, servers under `servers` with an explicit `type`.

use serde_json::{Map, Value, json};

use mcpx_meta::{McpServer, ProviderDescriptor, ProviderId, ServerMap, Transport};

use crate::json::{self, insert_list, insert_map};
use crate::{Provider, Result};

static DESCRIPTOR: ProviderDescriptor =
    ProviderDescriptor::project(ProviderId::Vscode, "VS Code", ".vscode/mcp.json");

const SERVERS_KEY: &str = "servers";

#[derive(Debug, Default, Clone, Copy)]
pub struct VscodeProvider;

impl VscodeProvider {
    pub fn new() -> Self {
        Self
    }
}

fn to_native(server: &McpServer) -> Value {
    let mut obj = Map::new();
    match &server.transport {
        Transport::Stdio {
            command, args, env, ..
        } => {
            obj.insert("type".into(), json!("stdio"));
            obj.insert("command".into(), json!(command));
            insert_list(&mut obj, "args", args);
            insert_map(&mut obj, "env", env);
        }
        Transport::Http { url, headers } => {
            obj.insert("type".into(), json!("http"));
            obj.insert("url".into(), json!(url));
            insert_map(&mut obj, "headers", headers);
        }
    }
    Value::Object(obj)
}

impl Provider for VscodeProvider {
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
}
