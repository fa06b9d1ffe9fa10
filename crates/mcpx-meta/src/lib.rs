//! Canonical model for mcpx.
//!
//! This crate holds the tool-agnostic description of MCP servers
//! (`.mcpx.json`), the identifiers and static descriptors of every supported
//! provider, and the structural validation applied when the canonical file is
//! loaded.

pub mod error;
pub mod schema;
pub mod validation;

pub use error::{Error, Result};
pub use schema::{
    CONFIG_FILENAME, CONFIG_VERSION, McpServer, McpxConfig, ProviderDescriptor, ProviderId,
    ServerMap, Transport, TransportKind,
};
pub use validation::{validate_config, validate_server_name};
