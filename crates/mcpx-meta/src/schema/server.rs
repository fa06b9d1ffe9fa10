//! Canonical MCP server entries.
//!
//! A server is either a local process (`stdio`) or a remote endpoint (`http`).
//! The transport is an enum so that fields of one transport cannot be set on
//! the other: an http entry has no `command`, a stdio entry has no `url`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Servers keyed by their unique name.
pub type ServerMap = BTreeMap<String, McpServer>;

/// Transport discriminator without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    Stdio,
    Http,
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdio => f.write_str("stdio"),
            Self::Http => f.write_str("http"),
        }
    }
}

/// Transport-specific part of a server entry.
///
/// Serialized inline with the entry, tagged by a `transport` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "transport", rename_all = "lowercase")]
pub enum Transport {
    /// Local process spoken to over stdin/stdout.
    Stdio {
        command: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<String>,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        env: BTreeMap<String, String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cwd: Option<String>,
    },
    /// Remote server reached over (streamable) HTTP.
    Http {
        url: String,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        headers: BTreeMap<String, String>,
    },
}

impl Transport {
    /// A stdio transport with the given command and arguments.
    pub fn stdio<I, S>(command: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Stdio {
            command: command.into(),
            args: args.into_iter().map(Into::into).collect(),
            env: BTreeMap::new(),
            cwd: None,
        }
    }

    /// An http transport without headers.
    pub fn http(url: impl Into<String>) -> Self {
        Self::Http {
            url: url.into(),
            headers: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> TransportKind {
        match self {
            Self::Stdio { .. } => TransportKind::Stdio,
            Self::Http { .. } => TransportKind::Http,
        }
    }
}

/// One canonical server entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServer {
    /// Free text shown by `mcpx list`; no provider format carries it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub transport: Transport,

    /// Unset means enabled. Disabled entries stay in `.mcpx.json` but are
    /// left out of every generated provider file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl McpServer {
    pub fn new(transport: Transport) -> Self {
        Self {
            description: None,
            transport,
            enabled: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled != Some(false)
    }

    pub fn kind(&self) -> TransportKind {
        self.transport.kind()
    }

    /// The command line (stdio) or URL (http), for display.
    pub fn target(&self) -> String {
        match &self.transport {
            Transport::Stdio { command, args, .. } if args.is_empty() => command.clone(),
            Transport::Stdio { command, args, .. } => format!("{} {}", command, args.join(" ")),
            Transport::Http { url, .. } => url.clone(),
        }
    }
}

impl From<Transport> for McpServer {
    fn from(transport: Transport) -> Self {
        Self::new(transport)
    }
}
