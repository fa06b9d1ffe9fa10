//! OpenAI Codex: `.codex/config.toml`.
//!
//! Servers live in `[mcp_servers.<name>]` tables. Merging goes through
//! `toml_edit` so the rest of the user's config keeps its formatting and
//! comments.

use serde::Deserialize;
use std::collections::BTreeMap;
use toml_edit::{Array, DocumentMut, Item, Table, value};
use tracing::debug;

use mcpx_meta::{McpServer, ProviderDescriptor, ProviderId, ServerMap, Transport};

use crate::json::missing_endpoint;
use crate::{Error, Provider, Result};

static DESCRIPTOR: ProviderDescriptor =
    ProviderDescriptor::project(ProviderId::OpenaiCodex, "OpenAI Codex", ".codex/config.toml");

const SERVERS_KEY: &str = "mcp_servers";

#[derive(Debug, Default, Clone, Copy)]
pub struct OpenaiCodexProvider;

impl OpenaiCodexProvider {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Deserialize)]
struct CodexDocument {
    #[serde(default)]
    mcp_servers: BTreeMap<String, CodexServer>,
}

#[derive(Debug, Deserialize)]
struct CodexServer {
    command: Option<String>,
    #[serde(default)]
    args: Vec<String>,
    #[serde(default)]
    env: BTreeMap<String, String>,
    cwd: Option<String>,
    url: Option<String>,
    #[serde(default)]
    http_headers: BTreeMap<String, String>,
    enabled: Option<bool>,
}

impl CodexServer {
    fn into_server(self, name: &str) -> Result<McpServer> {
        let transport = match (self.url, self.command) {
            (Some(url), _) => Transport::Http {
                url,
                headers: self.http_headers,
            },
            (None, Some(command)) => Transport::Stdio {
                command,
                args: self.args,
                env: self.env,
                cwd: self.cwd,
            },
            (None, None) => return Err(missing_endpoint(DESCRIPTOR.id, name)),
        };
        Ok(McpServer {
            enabled: self.enabled.filter(|enabled| !enabled),
            ..McpServer::new(transport)
        })
    }
}

fn string_table<'a>(entries: impl IntoIterator<Item = (&'a String, &'a String)>) -> Table {
    let mut table = Table::new();
    for (key, val) in entries {
        table.insert(key, value(val.as_str()));
    }
    table
}

fn server_table(server: &McpServer) -> Table {
    let mut table = Table::new();
    match &server.transport {
        Transport::Stdio {
            command,
            args,
            env,
            cwd,
        } => {
            table.insert("command", value(command.as_str()));
            if !args.is_empty() {
                table.insert(
                    "args",
                    value(Array::from_iter(args.iter().map(String::as_str))),
                );
            }
            if let Some(cwd) = cwd {
                table.insert("cwd", value(cwd.as_str()));
            }
            if !env.is_empty() {
                table.insert("env", Item::Table(string_table(env)));
            }
        }
        Transport::Http { url, headers } => {
            table.insert("url", value(url.as_str()));
            if !headers.is_empty() {
                table.insert("http_headers", Item::Table(string_table(headers)));
            }
        }
    }
    table
}

fn servers_table(servers: &ServerMap) -> Table {
    let mut table = Table::new();
    for (name, server) in servers.iter().filter(|(_, s)| s.is_enabled()) {
        table.insert(name, Item::Table(server_table(server)));
    }
    // An empty table still needs its `[mcp_servers]` header
    table.set_implicit(!table.is_empty());
    table
}

impl Provider for OpenaiCodexProvider {
    fn descriptor(&self) -> &ProviderDescriptor {
        &DESCRIPTOR
    }

    fn generate(&self, servers: &ServerMap, existing: Option<&str>) -> Result<String> {
        let mut doc = existing
            .and_then(|text| match text.parse::<DocumentMut>() {
                Ok(doc) => Some(doc),
                Err(e) => {
                    debug!(error = %e, "existing document is not valid TOML, starting fresh");
                    None
                }
            })
            .unwrap_or_default();

        doc.insert(SERVERS_KEY, Item::Table(servers_table(servers)));
        Ok(doc.to_string())
    }

    fn parse(&self, content: &str) -> Result<ServerMap> {
        let doc: CodexDocument =
            toml::from_str(content).map_err(|e| Error::parse(DESCRIPTOR.id, e.to_string()))?;
        doc.mcp_servers
            .into_iter()
            .map(|(name, raw)| {
                let server = raw.into_server(&name)?;
                Ok((name, server))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpx_test_utils::fixtures;
    use pretty_assertions::assert_eq;

    fn test_server() -> ServerMap {
        let mut transport = Transport::stdio("npx", ["-y", "test-server"]);
        if let Transport::Stdio { env, .. } = &mut transport {
            env.insert("KEY".into(), "value".into());
        }
        ServerMap::from([("test".to_string(), McpServer::new(transport))])
    }

    #[test]
    fn test_fresh_document_layout() {
        let text = OpenaiCodexProvider.generate(&test_server(), None).unwrap();
        assert_eq!(
            text,
            "[mcp_servers.test]\ncommand = \"npx\"\nargs = [\"-y\", \"test-server\"]\n\n[mcp_servers.test.env]\nKEY = \"value\"\n"
        );
    }

    #[test]
    fn test_empty_map_keeps_header() {
        let text = OpenaiCodexProvider.generate(&ServerMap::new(), None).unwrap();
        assert_eq!(text, "[mcp_servers]\n");
        assert!(OpenaiCodexProvider.parse(&text).unwrap().is_empty());
    }

    #[test]
    fn test_parse_github_example() {
        let toml = r#"[mcp_servers.github]
command = "npx"
args = ["-y", "@anthropic-ai/mcp-github-server"]

[mcp_servers.github.env]
GITHUB_TOKEN = "ghp_xxx"
"#;
        let servers = OpenaiCodexProvider.parse(toml).unwrap();
        let Transport::Stdio {
            command, args, env, ..
        } = &servers["github"].transport
        else {
            panic!("expected stdio");
        };
        assert_eq!(command, "npx");
        assert_eq!(args, &vec!["-y".to_string(), "@anthropic-ai/mcp-github-server".to_string()]);
        assert_eq!(env["GITHUB_TOKEN"], "ghp_xxx");
    }

    #[test]
    fn test_merge_keeps_top_level_settings() {
        let existing = r#"model = "o4-mini"
approval_mode = "suggest" # keep me

[mcp_servers.old-server]
command = "npx"
args = ["-y", "old-mcp-server"]

[profiles.fast]
model = "x"
"#;
        let servers = ServerMap::from([("jira".to_string(), fixtures::jira())]);
        let text = OpenaiCodexProvider.generate(&servers, Some(existing)).unwrap();

        assert!(text.starts_with("model = \"o4-mini\"\napproval_mode = \"suggest\" # keep me\n"));
        assert!(text.contains("[profiles.fast]\nmodel = \"x\"\n"));
        assert!(text.contains("[mcp_servers.jira]"));
        assert!(!text.contains("old-server"));
        assert_eq!(OpenaiCodexProvider.parse(&text).unwrap(), servers);
    }

    #[test]
    fn test_corrupt_existing_starts_fresh() {
        let fresh = OpenaiCodexProvider.generate(&test_server(), None).unwrap();
        let merged = OpenaiCodexProvider
            .generate(&test_server(), Some("invalid toml {{{{"))
            .unwrap();
        assert_eq!(merged, fresh);
    }

    #[test]
    fn test_http_headers_and_cwd_round_trip() {
        let servers = ServerMap::from([
            ("remote".to_string(), fixtures::remote()),
            ("py".to_string(), fixtures::with_cwd()),
        ]);
        let text = OpenaiCodexProvider.generate(&servers, None).unwrap();
        assert!(text.contains("[mcp_servers.remote.http_headers]"));
        assert!(text.contains("cwd = \"tools/mcp\""));
        assert_eq!(OpenaiCodexProvider.parse(&text).unwrap(), servers);
    }

    #[test]
    fn test_parse_disabled_and_errors() {
        let servers = OpenaiCodexProvider
            .parse("[mcp_servers.x]\ncommand = \"c\"\nenabled = false\n")
            .unwrap();
        assert!(!servers["x"].is_enabled());

        assert!(OpenaiCodexProvider.parse("mcp_servers = 3\n").is_err());
        assert!(OpenaiCodexProvider.parse("[mcp_servers.x]\nargs = []\n").is_err());
        assert!(OpenaiCodexProvider.parse("not toml {{").is_err());
        assert!(OpenaiCodexProvider.parse("model = \"x\"\n").unwrap().is_empty());
    }
}
