//! Native MCP configuration formats.
//!
//! Each supported tool gets one [`Provider`] implementation that turns the
//! canonical server map into the tool's own file and back. Providers share
//! only free helper functions (see `json`); their field layouts differ too
//! much for anything more.
//!
//! [`ProviderRegistry`] holds one instance of every provider, keyed by
//! [`mcpx_meta::ProviderId`].

pub mod claude;
pub mod codex;
pub mod copilot;
pub mod error;
pub mod gemini;
pub mod intellij;
mod json;
pub mod kimi;
pub mod opencode;
pub mod provider;
pub mod registry;
pub mod vscode;

pub use claude::ClaudeCodeProvider;
pub use codex::OpenaiCodexProvider;
pub use copilot::CopilotCliProvider;
pub use error::{Error, Result};
pub use gemini::GeminiCliProvider;
pub use intellij::IntellijProvider;
pub use kimi::KimiCliProvider;
pub use opencode::OpencodeProvider;
pub use provider::Provider;
pub use registry::ProviderRegistry;
pub use vscode::VscodeProvider;
