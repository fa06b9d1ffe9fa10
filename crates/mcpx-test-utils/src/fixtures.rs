//! Canned server maps.

use std::collections::BTreeMap;

use mcpx_meta::{McpServer, ServerMap, Transport};

/// The `jira` stdio server: `uvx mcp-atlassian` with one env var.
pub fn jira() -> McpServer {
    McpServer::new(Transport::Stdio {
        command: "uvx".into(),
        args: vec!["mcp-atlassian".into()],
        env: BTreeMap::from([("JIRA_URL".into(), "https://jira.example.com".into())]),
        cwd: None,
    })
}

/// A remote server with one header.
pub fn remote() -> McpServer {
    McpServer::new(Transport::Http {
        url: "https://mcp.example.com/mcp".into(),
        headers: BTreeMap::from([("Authorization".into(), "Bearer token".into())]),
    })
}

/// A bare stdio server: command and args only.
pub fn filesystem() -> McpServer {
    McpServer::new(Transport::stdio(
        "npx",
        ["-y", "@modelcontextprotocol/server-filesystem", "."],
    ))
}

/// A stdio server with a working directory, which not every provider keeps.
pub fn with_cwd() -> McpServer {
    McpServer::new(Transport::Stdio {
        command: "python".into(),
        args: vec!["server.py".into()],
        env: BTreeMap::new(),
        cwd: Some("tools/mcp".into()),
    })
}

/// `jira` + `remote` + `filesystem`; representable by every provider.
pub fn portable_servers() -> ServerMap {
    ServerMap::from([
        ("jira".to_string(), jira()),
        ("remote".to_string(), remote()),
        ("filesystem".to_string(), filesystem()),
    ])
}

/// One enabled server and one disabled server per transport.
pub fn mixed_enabled_servers() -> ServerMap {
    ServerMap::from([
        ("jira".to_string(), jira()),
        ("remote".to_string(), remote()),
        ("off-stdio".to_string(), filesystem().with_enabled(false)),
        (
            "off-http".to_string(),
            McpServer::new(Transport::http("https://disabled.example.com")).with_enabled(false),
        ),
    ])
}
