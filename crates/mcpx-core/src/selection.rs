//! Provider selection changes.

use mcpx_meta::ProviderId;

/// Providers in `old` that are not in `new`, in `old` order, each once.
pub fn removed_providers(old: &[ProviderId], new: &[ProviderId]) -> Vec<ProviderId> {
    let mut removed = Vec::new();
    for id in old {
        if !new.contains(id) && !removed.contains(id) {
            removed.push(*id);
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_removed_providers() {
        let old = [
            ProviderId::Vscode,
            ProviderId::ClaudeCode,
            ProviderId::Vscode,
            ProviderId::Opencode,
        ];
        let new = [ProviderId::ClaudeCode, ProviderId::Intellij];
        assert_eq!(
            removed_providers(&old, &new),
            vec![ProviderId::Vscode, ProviderId::Opencode]
        );
        assert!(removed_providers(&new, &new).is_empty());
        assert!(removed_providers(&[], &new).is_empty());
    }
}
