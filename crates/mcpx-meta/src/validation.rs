//! Structural validation of the canonical document and of server names.
//!
//! `validate_config` walks the raw JSON before deserializing so that a
//! mismatch is reported against the exact location in the document
//! (`servers.jira.command`, `providers[2]`) instead of serde's positional
//! message.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

use crate::{CONFIG_VERSION, Error, McpxConfig, ProviderId, Result};

static SERVER_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("static pattern"));

/// Check a server name before it is created.
///
/// Names already stored in `.mcpx.json` are not re-checked on load.
pub fn validate_server_name(name: &str) -> Result<()> {
    if SERVER_NAME.is_match(name) {
        Ok(())
    } else {
        Err(Error::InvalidServerName {
            name: name.to_string(),
        })
    }
}

/// Validate a parsed `.mcpx.json` document and convert it to [`McpxConfig`].
///
/// Unknown keys are ignored. Fields belonging to the other transport are
/// rejected.
pub fn validate_config(value: &Value) -> Result<McpxConfig> {
    let root = value
        .as_object()
        .ok_or_else(|| Error::validation("$", "expected an object"))?;

    match root.get("version") {
        Some(Value::Number(n)) if n.as_u64() == Some(u64::from(CONFIG_VERSION)) => {}
        Some(other) => {
            return Err(Error::validation(
                "version",
                format!("expected {CONFIG_VERSION}, found {other}"),
            ));
        }
        None => return Err(Error::validation("version", "missing required field")),
    }

    if let Some(providers) = root.get("providers") {
        validate_providers(providers)?;
    }

    if let Some(servers) = root.get("servers") {
        let servers = servers
            .as_object()
            .ok_or_else(|| Error::validation("servers", "expected an object"))?;
        for (name, server) in servers {
            validate_server(&format!("servers.{name}"), server)?;
        }
    }

    serde_json::from_value(value.clone()).map_err(|e| Error::validation("$", e.to_string()))
}

fn validate_providers(value: &Value) -> Result<()> {
    let list = value
        .as_array()
        .ok_or_else(|| Error::validation("providers", "expected an array"))?;
    for (idx, item) in list.iter().enumerate() {
        let path = format!("providers[{idx}]");
        let id = item
            .as_str()
            .ok_or_else(|| Error::validation(&path, "expected a string"))?;
        if id.parse::<ProviderId>().is_err() {
            return Err(Error::validation(path, format!("unknown provider '{id}'")));
        }
    }
    Ok(())
}

const STDIO_ONLY: &[&str] = &["command", "args", "env", "cwd"];
const HTTP_ONLY: &[&str] = &["url", "headers"];

fn validate_server(path: &str, value: &Value) -> Result<()> {
    let server = value
        .as_object()
        .ok_or_else(|| Error::validation(path, "expected an object"))?;

    let transport = match server.get("transport") {
        Some(Value::String(t)) => t.as_str(),
        Some(_) => return Err(Error::validation(format!("{path}.transport"), "expected a string")),
        None => {
            return Err(Error::validation(
                format!("{path}.transport"),
                "missing required field",
            ));
        }
    };

    let foreign = match transport {
        "stdio" => {
            require_string(server, path, "command")?;
            optional_string_list(server, path, "args")?;
            optional_string_map(server, path, "env")?;
            optional_string(server, path, "cwd")?;
            HTTP_ONLY
        }
        "http" => {
            require_string(server, path, "url")?;
            optional_string_map(server, path, "headers")?;
            STDIO_ONLY
        }
        other => {
            return Err(Error::validation(
                format!("{path}.transport"),
                format!("expected \"stdio\" or \"http\", found \"{other}\""),
            ));
        }
    };

    if let Some(key) = foreign.iter().find(|key| server.contains_key(**key)) {
        return Err(Error::validation(
            format!("{path}.{key}"),
            format!("not allowed for {transport} transport"),
        ));
    }

    optional_string(server, path, "description")?;
    if let Some(enabled) = server.get("enabled")
        && !enabled.is_boolean()
    {
        return Err(Error::validation(format!("{path}.enabled"), "expected a boolean"));
    }

    Ok(())
}

fn require_string(obj: &Map<String, Value>, path: &str, key: &str) -> Result<()> {
    match obj.get(key) {
        Some(Value::String(_)) => Ok(()),
        Some(_) => Err(Error::validation(format!("{path}.{key}"), "expected a string")),
        None => Err(Error::validation(format!("{path}.{key}"), "missing required field")),
    }
}

fn optional_string(obj: &Map<String, Value>, path: &str, key: &str) -> Result<()> {
    match obj.get(key) {
        None | Some(Value::String(_)) => Ok(()),
        Some(_) => Err(Error::validation(format!("{path}.{key}"), "expected a string")),
    }
}

fn optional_string_list(obj: &Map<String, Value>, path: &str, key: &str) -> Result<()> {
    let Some(value) = obj.get(key) else {
        return Ok(());
    };
    let list = value
        .as_array()
        .ok_or_else(|| Error::validation(format!("{path}.{key}"), "expected an array"))?;
    match list.iter().position(|item| !item.is_string()) {
        Some(idx) => Err(Error::validation(
            format!("{path}.{key}[{idx}]"),
            "expected a string",
        )),
        None => Ok(()),
    }
}

fn optional_string_map(obj: &Map<String, Value>, path: &str, key: &str) -> Result<()> {
    let Some(value) = obj.get(key) else {
        return Ok(());
    };
    let map = value
        .as_object()
        .ok_or_else(|| Error::validation(format!("{path}.{key}"), "expected an object"))?;
    match map.iter().find(|(_, v)| !v.is_string()) {
        Some((k, _)) => Err(Error::validation(
            format!("{path}.{key}.{k}"),
            "expected a string",
        )),
        None => Ok(()),
    }
}
