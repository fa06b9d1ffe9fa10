//! Provider identifiers and static descriptors.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::Error;

/// A consumer tool whose native MCP configuration mcpx can generate.
///
/// Declaration order is the catalogue order used when iterating every
/// provider (detection, `mcpx providers`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderId {
    ClaudeCode,
    GeminiCli,
    KimiCli,
    OpenaiCodex,
    Opencode,
    CopilotCli,
    Vscode,
    Intellij,
}

impl ProviderId {
    pub const ALL: [ProviderId; 8] = [
        Self::ClaudeCode,
        Self::GeminiCli,
        Self::KimiCli,
        Self::OpenaiCodex,
        Self::Opencode,
        Self::CopilotCli,
        Self::Vscode,
        Self::Intellij,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClaudeCode => "claude-code",
            Self::GeminiCli => "gemini-cli",
            Self::KimiCli => "kimi-cli",
            Self::OpenaiCodex => "openai-codex",
            Self::Opencode => "opencode",
            Self::CopilotCli => "copilot-cli",
            Self::Vscode => "vscode",
            Self::Intellij => "intellij",
        }
    }

    /// `ids` without repeats, first occurrence wins.
    pub fn unique(ids: &[ProviderId]) -> Vec<ProviderId> {
        let mut unique = Vec::with_capacity(ids.len());
        for id in ids {
            if !unique.contains(id) {
                unique.push(*id);
            }
        }
        unique
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::UnknownProvider { id: s.to_string() })
    }
}

/// Static metadata describing where and how a provider keeps its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDescriptor {
    pub id: ProviderId,
    /// Human-readable name, e.g. "Claude Code".
    pub display_name: &'static str,
    /// Native file path relative to the project root.
    ///
    /// For global-only providers this is the legacy in-project location
    /// written by earlier versions; it is only ever deleted.
    pub config_path: &'static str,
    /// Whether the provider reads a per-project file at all.
    pub supports_project: bool,
    /// Native file path relative to the home directory, for global-only
    /// providers.
    pub global_path: Option<&'static str>,
}

impl ProviderDescriptor {
    /// Descriptor for a provider with a project-local file.
    pub const fn project(
        id: ProviderId,
        display_name: &'static str,
        config_path: &'static str,
    ) -> Self {
        Self {
            id,
            display_name,
            config_path,
            supports_project: true,
            global_path: None,
        }
    }

    /// Descriptor for a provider that only reads a file in the home directory.
    pub const fn global(
        id: ProviderId,
        display_name: &'static str,
        legacy_project_path: &'static str,
        global_path: &'static str,
    ) -> Self {
        Self {
            id,
            display_name,
            config_path: legacy_project_path,
            supports_project: false,
            global_path: Some(global_path),
        }
    }

    /// The path shown to users: the project path, or `~/<global path>`.
    pub fn display_path(&self) -> String {
        match (self.supports_project, self.global_path) {
            (false, Some(global)) => format!("~/{global}"),
            _ => self.config_path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ProviderId::ClaudeCode, "claude-code")]
    #[case(ProviderId::GeminiCli, "gemini-cli")]
    #[case(ProviderId::KimiCli, "kimi-cli")]
    #[case(ProviderId::OpenaiCodex, "openai-codex")]
    #[case(ProviderId::Opencode, "opencode")]
    #[case(ProviderId::CopilotCli, "copilot-cli")]
    #[case(ProviderId::Vscode, "vscode")]
    #[case(ProviderId::Intellij, "intellij")]
    fn test_identifier_forms_agree(#[case] id: ProviderId, #[case] text: &str) {
        assert_eq!(id.to_string(), text);
        assert_eq!(text.parse::<ProviderId>().unwrap(), id);
        assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{text}\""));
    }

    #[test]
    fn test_unique_keeps_first_occurrence() {
        assert_eq!(
            ProviderId::unique(&[
                ProviderId::Vscode,
                ProviderId::ClaudeCode,
                ProviderId::Vscode,
                ProviderId::ClaudeCode,
            ]),
            vec![ProviderId::Vscode, ProviderId::ClaudeCode]
        );
        assert!(ProviderId::unique(&[]).is_empty());
    }

    #[test]
    fn test_unknown_identifier() {
        let err = "cursor".parse::<ProviderId>().unwrap_err();
        assert!(matches!(err, Error::UnknownProvider { ref id } if id == "cursor"));
    }

    #[test]
    fn test_display_path() {
        let project = ProviderDescriptor::project(ProviderId::Vscode, "VS Code", ".vscode/mcp.json");
        assert_eq!(project.display_path(), ".vscode/mcp.json");

        let global = ProviderDescriptor::global(
            ProviderId::KimiCli,
            "Kimi CLI",
            ".kimi/mcp.json",
            ".kimi/mcp.json",
        );
        assert!(!global.supports_project);
        assert_eq!(global.display_path(), "~/.kimi/mcp.json");
    }
}
