//! Helpers shared by the JSON-based providers.
//!
//! Documents are handled as `serde_json::Value` with insertion order
//! preserved, so replacing the servers key leaves every other key where it
//! was.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

use mcpx_meta::{McpServer, ProviderId, ServerMap, Transport, TransportKind};

use crate::{Error, Result};

/// Keys that carry a remote endpoint, in lookup order.
const URL_KEYS: &[&str] = &["url", "httpUrl", "serverUrl"];

/// Build the native servers object from the enabled entries of `servers`.
pub(crate) fn servers_object(
    servers: &ServerMap,
    to_native: impl Fn(&McpServer) -> Value,
) -> Value {
    let entries = servers
        .iter()
        .filter(|(_, server)| server.is_enabled())
        .map(|(name, server)| (name.clone(), to_native(server)))
        .collect::<Map<String, Value>>();
    Value::Object(entries)
}

/// Put `servers` under `key` in `existing`, or in `fresh()` when there is
/// no existing object document.
pub(crate) fn merge_document(
    existing: Option<&str>,
    key: &str,
    servers: Value,
    fresh: impl FnOnce() -> Map<String, Value>,
) -> Result<String> {
    let root = existing.and_then(|text| match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => {
            debug!("existing document root is not an object, starting fresh");
            None
        }
        Err(e) => {
            debug!(error = %e, "existing document is not valid JSON, starting fresh");
            None
        }
    });
    let mut root = root.unwrap_or_else(fresh);
    root.insert(key.to_string(), servers);
    render(&Value::Object(root))
}

/// Pretty-print with two-space indentation and a trailing newline.
pub(crate) fn render(value: &Value) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

/// Parse `content` and convert every entry under `key` with `read`.
pub(crate) fn parse_document(
    provider: ProviderId,
    content: &str,
    key: &str,
    read: impl Fn(&str, &Map<String, Value>) -> Result<McpServer>,
) -> Result<ServerMap> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| Error::parse(provider, e.to_string()))?;
    let root = value
        .as_object()
        .ok_or_else(|| Error::parse(provider, "document root is not an object"))?;

    let entries = match root.get(key) {
        None => return Ok(ServerMap::new()),
        Some(Value::Object(entries)) => entries,
        Some(_) => {
            return Err(Error::parse(provider, format!("`{key}` is not an object")));
        }
    };

    entries
        .iter()
        .map(|(name, entry)| {
            let obj = entry.as_object().ok_or_else(|| {
                Error::parse(provider, format!("server '{name}' is not an object"))
            })?;
            Ok((name.clone(), read(name, obj)?))
        })
        .collect()
}

/// Read an entry in the common `{command, args, env, cwd}` / `{url, headers}`
/// layout, with the environment stored under `env_key`.
pub(crate) fn read_entry(
    provider: ProviderId,
    name: &str,
    obj: &Map<String, Value>,
    env_key: &str,
) -> Result<McpServer> {
    let transport = match transport_kind(obj) {
        Some(TransportKind::Stdio) => read_stdio(obj, env_key),
        Some(TransportKind::Http) => read_http(obj),
        None => None,
    }
    .ok_or_else(|| missing_endpoint(provider, name))?;

    Ok(McpServer {
        enabled: enabled_flag(obj),
        ..McpServer::new(transport)
    })
}

pub(crate) fn missing_endpoint(provider: ProviderId, name: &str) -> Error {
    Error::parse(provider, format!("server '{name}' has no command or url"))
}

/// Decide the transport of a native entry.
///
/// An explicit `type` (or Kimi's `transport`) wins; otherwise a URL field
/// means http and a `command` means stdio.
pub(crate) fn transport_kind(obj: &Map<String, Value>) -> Option<TransportKind> {
    let explicit = ["type", "transport"]
        .iter()
        .find_map(|key| obj.get(*key).and_then(|v| v.as_str()));
    match explicit {
        Some("http" | "sse" | "remote" | "streamable-http" | "streamableHttp") => {
            return Some(TransportKind::Http);
        }
        Some("stdio" | "local") => return Some(TransportKind::Stdio),
        _ => {}
    }

    if URL_KEYS.iter().any(|key| obj.contains_key(*key)) {
        Some(TransportKind::Http)
    } else if obj.contains_key("command") {
        Some(TransportKind::Stdio)
    } else {
        None
    }
}

fn read_stdio(obj: &Map<String, Value>, env_key: &str) -> Option<Transport> {
    Some(Transport::Stdio {
        command: string_field(obj, "command")?,
        args: string_list(obj, "args"),
        env: string_map(obj, env_key),
        cwd: string_field(obj, "cwd"),
    })
}

pub(crate) fn read_http(obj: &Map<String, Value>) -> Option<Transport> {
    let url = URL_KEYS.iter().find_map(|key| string_field(obj, key))?;
    Some(Transport::Http {
        url,
        headers: string_map(obj, "headers"),
    })
}

/// Native `enabled: false` becomes `Some(false)`; anything else is unset.
pub(crate) fn enabled_flag(obj: &Map<String, Value>) -> Option<bool> {
    match obj.get("enabled") {
        Some(Value::Bool(false)) => Some(false),
        _ => None,
    }
}

pub(crate) fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(|v| v.as_str()).map(String::from)
}

pub(crate) fn string_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    obj.get(key)
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn string_map(obj: &Map<String, Value>, key: &str) -> BTreeMap<String, String> {
    obj.get(key)
        .and_then(|v| v.as_object())
        .map(|map| {
            map.iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect()
        })
        .unwrap_or_default()
}

/// Insert `list` under `key` unless it is empty.
pub(crate) fn insert_list(obj: &mut Map<String, Value>, key: &str, list: &[String]) {
    if !list.is_empty() {
        obj.insert(key.into(), Value::from(list.to_vec()));
    }
}

/// Insert `map` under `key` unless it is empty.
pub(crate) fn insert_map(obj: &mut Map<String, Value>, key: &str, map: &BTreeMap<String, String>) {
    if !map.is_empty() {
        let entries = map
            .iter()
            .map(|(k, v)| (k.clone(), Value::from(v.as_str())))
            .collect::<Map<String, Value>>();
        obj.insert(key.into(), Value::Object(entries));
    }
}
