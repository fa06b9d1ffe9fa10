//! Properties every provider must satisfy.

use mcpx_fs::{LocalFs, NormalizedPath};
use mcpx_meta::{ProviderId, ServerMap};
use mcpx_providers::{Provider, ProviderRegistry};
use mcpx_test_utils::{TestProject, fixtures};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn registry() -> ProviderRegistry {
    ProviderRegistry::with_builtins(NormalizedPath::new("/home/tester"))
}

fn with_provider<T>(id: ProviderId, f: impl FnOnce(&dyn Provider) -> T) -> T {
    let registry = registry();
    let provider = registry.get(id).unwrap();
    f(provider)
}

/// Servers representable by `id`, including `cwd` where the format has it.
fn expressible_servers(id: ProviderId) -> ServerMap {
    let mut servers = fixtures::portable_servers();
    if matches!(
        id,
        ProviderId::GeminiCli | ProviderId::OpenaiCodex | ProviderId::CopilotCli
    ) {
        servers.insert("py".into(), fixtures::with_cwd());
    }
    servers
}

/// A document with one unrelated top-level setting plus a stale server.
fn document_with_other_settings(id: ProviderId) -> &'static str {
    match id {
        ProviderId::OpenaiCodex => {
            "model = \"x\"\n\n[mcp_servers.stale]\ncommand = \"old\"\n"
        }
        ProviderId::Vscode => {
            "{\n  \"model\": \"x\",\n  \"servers\": {\"stale\": {\"command\": \"old\"}}\n}\n"
        }
        ProviderId::Opencode => {
            "{\n  \"model\": \"x\",\n  \"mcp\": {\"stale\": {\"type\": \"local\", \"command\": [\"old\"]}}\n}\n"
        }
        _ => "{\n  \"model\": \"x\",\n  \"mcpServers\": {\"stale\": {\"command\": \"old\"}}\n}\n",
    }
}

#[rstest]
fn test_round_trip(
    #[values(
        ProviderId::ClaudeCode,
        ProviderId::GeminiCli,
        ProviderId::KimiCli,
        ProviderId::OpenaiCodex,
        ProviderId::Opencode,
        ProviderId::CopilotCli,
        ProviderId::Vscode,
        ProviderId::Intellij
    )]
    id: ProviderId,
) {
    with_provider(id, |provider| {
        let servers = expressible_servers(id);
        let text = provider.generate(&servers, None).unwrap();
        assert_eq!(provider.parse(&text).unwrap(), servers, "provider {id}");
    });
}

#[rstest]
fn test_disabled_entries_are_excluded(
    #[values(
        ProviderId::ClaudeCode,
        ProviderId::GeminiCli,
        ProviderId::KimiCli,
        ProviderId::OpenaiCodex,
        ProviderId::Opencode,
        ProviderId::CopilotCli,
        ProviderId::Vscode,
        ProviderId::Intellij
    )]
    id: ProviderId,
) {
    with_provider(id, |provider| {
        let text = provider
            .generate(&fixtures::mixed_enabled_servers(), None)
            .unwrap();
        assert!(!text.contains("off-stdio"), "{id}: {text}");
        assert!(!text.contains("off-http"), "{id}: {text}");

        let names: Vec<_> = provider.parse(&text).unwrap().into_keys().collect();
        assert_eq!(names, vec!["jira".to_string(), "remote".to_string()]);
    });
}

#[rstest]
fn test_corrupt_existing_content_falls_back_to_fresh(
    #[values(
        ProviderId::ClaudeCode,
        ProviderId::GeminiCli,
        ProviderId::KimiCli,
        ProviderId::OpenaiCodex,
        ProviderId::Opencode,
        ProviderId::CopilotCli,
        ProviderId::Vscode,
        ProviderId::Intellij
    )]
    id: ProviderId,
) {
    with_provider(id, |provider| {
        let servers = fixtures::portable_servers();
        let fresh = provider.generate(&servers, None).unwrap();
        let merged = provider.generate(&servers, Some("not valid {{{")).unwrap();
        assert_eq!(merged, fresh);
    });
}

#[rstest]
fn test_merge_preserves_other_settings(
    #[values(
        ProviderId::ClaudeCode,
        ProviderId::GeminiCli,
        ProviderId::KimiCli,
        ProviderId::OpenaiCodex,
        ProviderId::Opencode,
        ProviderId::CopilotCli,
        ProviderId::Vscode,
        ProviderId::Intellij
    )]
    id: ProviderId,
) {
    with_provider(id, |provider| {
        let servers = fixtures::portable_servers();
        let existing = document_with_other_settings(id);
        let merged = provider.generate(&servers, Some(existing)).unwrap();

        let expected_setting = if id == ProviderId::OpenaiCodex {
            "model = \"x\"\n"
        } else {
            "  \"model\": \"x\",\n"
        };
        assert!(merged.contains(expected_setting), "{id}: {merged}");
        assert!(!merged.contains("stale"), "{id}: {merged}");
        assert_eq!(provider.parse(&merged).unwrap(), servers);
    });
}

#[rstest]
fn test_merge_is_idempotent(
    #[values(
        ProviderId::ClaudeCode,
        ProviderId::GeminiCli,
        ProviderId::KimiCli,
        ProviderId::OpenaiCodex,
        ProviderId::Opencode,
        ProviderId::CopilotCli,
        ProviderId::Vscode,
        ProviderId::Intellij
    )]
    id: ProviderId,
) {
    with_provider(id, |provider| {
        let servers = expressible_servers(id);
        let first = provider
            .generate(&servers, Some(document_with_other_settings(id)))
            .unwrap();
        let second = provider.generate(&servers, Some(&first)).unwrap();
        assert_eq!(second, first);
    });
}

#[test]
fn test_exists_checks_located_file() {
    let project = TestProject::new();
    let registry = ProviderRegistry::with_builtins(project.home_path());
    let fs = LocalFs::new();
    let root = project.root_path();

    let vscode = registry.get(ProviderId::Vscode).unwrap();
    assert!(!vscode.exists(&fs, &root));
    project.write_file(".vscode/mcp.json", "{}");
    assert!(vscode.exists(&fs, &root));

    let kimi = registry.get(ProviderId::KimiCli).unwrap();
    project.write_file(".kimi/mcp.json", "{}");
    assert!(!kimi.exists(&fs, &root));
    project.write_home_file(".kimi/mcp.json", "{}");
    assert!(kimi.exists(&fs, &root));
}
