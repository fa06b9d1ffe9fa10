//! Schema types for the canonical configuration.

mod config;
mod provider;
mod server;

pub use config::{CONFIG_FILENAME, CONFIG_VERSION, McpxConfig};
pub use provider::{ProviderDescriptor, ProviderId};
pub use server::{McpServer, ServerMap, Transport, TransportKind};
