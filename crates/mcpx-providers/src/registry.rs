//! Lookup of the built-in providers.

use mcpx_fs::NormalizedPath;
use mcpx_meta::{ProviderDescriptor, ProviderId};

use crate::{
    ClaudeCodeProvider, CopilotCliProvider, GeminiCliProvider, IntellijProvider,
    KimiCliProvider, OpencodeProvider, OpenaiCodexProvider, Provider, VscodeProvider,
};

/// Every provider mcpx knows, in catalogue order.
pub struct ProviderRegistry {
    providers: Vec<Box<dyn Provider>>,
}

impl ProviderRegistry {
    /// Create a registry with all built-in providers.
    ///
    /// `home` is where global-only providers keep their files.
    pub fn with_builtins(home: NormalizedPath) -> Self {
        let providers: Vec<Box<dyn Provider>> = ProviderId::ALL
            .into_iter()
            .map(|id| -> Box<dyn Provider> {
                match id {
                    ProviderId::ClaudeCode => Box::new(ClaudeCodeProvider::new()),
                    ProviderId::GeminiCli => Box::new(GeminiCliProvider::new()),
                    ProviderId::KimiCli => Box::new(KimiCliProvider::new(home.clone())),
                    ProviderId::OpenaiCodex => Box::new(OpenaiCodexProvider::new()),
                    ProviderId::Opencode => Box::new(OpencodeProvider::new()),
                    ProviderId::CopilotCli => Box::new(CopilotCliProvider::new()),
                    ProviderId::Vscode => Box::new(VscodeProvider::new()),
                    ProviderId::Intellij => Box::new(IntellijProvider::new()),
                }
            })
            .collect();
        Self { providers }
    }

    pub fn get(&self, id: ProviderId) -> Option<&dyn Provider> {
        self.providers
            .iter()
            .find(|p| p.id() == id)
            .map(|p| p.as_ref())
    }

    pub fn all(&self) -> impl Iterator<Item = &dyn Provider> {
        self.providers.iter().map(|p| p.as_ref())
    }

    /// Providers for `ids`, in the given order, each at most once.
    pub fn by_ids(&self, ids: &[ProviderId]) -> Vec<&dyn Provider> {
        ProviderId::unique(ids)
            .into_iter()
            .filter_map(|id| self.get(id))
            .collect()
    }

    /// Providers that keep a per-project file and can be detected.
    pub fn project_providers(&self) -> Vec<&dyn Provider> {
        self.all()
            .filter(|p| p.descriptor().supports_project)
            .collect()
    }

    pub fn descriptors(&self) -> Vec<&ProviderDescriptor> {
        self.all().map(|p| p.descriptor()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registry() -> ProviderRegistry {
        ProviderRegistry::with_builtins(NormalizedPath::new("/home/me"))
    }

    #[test]
    fn test_all_builtins_in_order() {
        let registry = registry();
        let ids: Vec<_> = registry.all().map(|p| p.id()).collect();
        assert_eq!(ids, ProviderId::ALL.to_vec());
    }

    #[test]
    fn test_by_ids_keeps_order_and_dedupes() {
        let registry = registry();
        let picked: Vec<_> = registry
            .by_ids(&[ProviderId::Vscode, ProviderId::ClaudeCode, ProviderId::Vscode])
            .into_iter()
            .map(|p| p.id())
            .collect();
        assert_eq!(picked, vec![ProviderId::Vscode, ProviderId::ClaudeCode]);
    }

    #[test]
    fn test_project_providers_exclude_global_only() {
        let registry = registry();
        let ids: Vec<_> = registry.project_providers().iter().map(|p| p.id()).collect();
        assert_eq!(ids.len(), 7);
        assert!(!ids.contains(&ProviderId::KimiCli));
    }

    #[test]
    fn test_descriptor_paths() {
        let registry = registry();
        let root = NormalizedPath::new("/work/app");
        let paths: Vec<_> = registry
            .all()
            .map(|p| p.locate(&root).as_str().to_string())
            .collect();
        assert_eq!(
            paths,
            vec![
                "/work/app/.mcp.json",
                "/work/app/.gemini/settings.json",
                "/home/me/.kimi/mcp.json",
                "/work/app/.codex/config.toml",
                "/work/app/opencode.json",
                "/work/app/.copilot/mcp-config.json",
                "/work/app/.vscode/mcp.json",
                "/work/app/.idea/mcp.json",
            ]
        );
    }
}
