//! OpenCode: `opencode.json` at the project root.
//!
//! Local servers store the command line as one array (`command[0]` is the
//! program) and their environment under `environment`. Every entry is
//! written with `enabled: true`.

use serde_json::{Map, Value, json};

use mcpx_meta::{McpServer, ProviderDescriptor, ProviderId, ServerMap, Transport, TransportKind};

use crate::json::{self, insert_map};
use crate::{Provider, Result};

static DESCRIPTOR: ProviderDescriptor =
    ProviderDescriptor::project(ProviderId::Opencode, "OpenCode", "opencode.json");

const SERVERS_KEY: &str = "mcp";
const SCHEMA_URL: &str = "https://opencode.ai/config.json";

#[derive(Debug, Default, Clone, Copy)]
pub struct OpencodeProvider;

impl OpencodeProvider {
    pub fn new() -> Self {
        Self
    }
}

fn fresh_document() -> Map<String, Value> {
    let mut root = Map::new();
    root.insert("$schema".into(), json!(SCHEMA_URL));
    root
}

fn to_native(server: &McpServer) -> Value {
    let mut obj = Map::new();
    match &server.transport {
        Transport::Stdio {
            command, args, env, ..
        } => {
            let command_line: Vec<&str> = std::iter::once(command.as_str())
                .chain(args.iter().map(String::as_str))
                .collect();
            obj.insert("type".into(), json!("local"));
            obj.insert("command".into(), json!(command_line));
            insert_map(&mut obj, "environment", env);
        }
        Transport::Http { url, headers } => {
            obj.insert("type".into(), json!("remote"));
            obj.insert("url".into(), json!(url));
            insert_map(&mut obj, "headers", headers);
        }
    }
    obj.insert("enabled".into(), json!(true));
    Value::Object(obj)
}

fn read_local(obj: &Map<String, Value>) -> Option<Transport> {
    // Older files sometimes keep a plain string command plus `args`
    let (command, args) = match obj.get("command")? {
        Value::String(command) => (command.clone(), json::string_list(obj, "args")),
        Value::Array(_) => {
            let mut parts = json::string_list(obj, "command").into_iter();
            let command = parts.next()?;
            (command, parts.collect())
        }
        _ => return None,
    };
    let env = match obj.get("environment") {
        Some(_) => json::string_map(obj, "environment"),
        None => json::string_map(obj, "env"),
    };
    Some(Transport::Stdio {
        command,
        args,
        env,
        cwd: None,
    })
}

fn from_native(name: &str, obj: &Map<String, Value>) -> Result<McpServer> {
    let transport = match json::transport_kind(obj) {
        Some(TransportKind::Stdio) => read_local(obj),
        Some(TransportKind::Http) => json::read_http(obj),
        None => None,
    }
    .ok_or_else(|| json::missing_endpoint(DESCRIPTOR.id, name))?;

    Ok(McpServer {
        enabled: json::enabled_flag(obj),
        ..McpServer::new(transport)
    })
}

impl Provider for OpencodeProvider {
    fn descriptor(&self) -> &ProviderDescriptor {
        &DESCRIPTOR
    }

    fn generate(&self, servers: &ServerMap, existing: Option<&str>) -> Result<String> {
        let entries = json::servers_object(servers, to_native);
        json::merge_document(existing, SERVERS_KEY, entries, fresh_document)
    }

    fn parse(&self, content: &str) -> Result<ServerMap> {
        json::parse_document(DESCRIPTOR.id, content, SERVERS_KEY, from_native)
    }
}
