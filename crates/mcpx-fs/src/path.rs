//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path stored with forward slashes.
///
/// Provider file locations are fixed relative strings such as
/// `.codex/config.toml`; keeping every path in one separator style makes
/// `locate` a pure string join and keeps CLI output stable across platforms.
/// Conversion to a native [`PathBuf`] happens only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let inner = path.as_ref().to_string_lossy().replace('\\', "/");
        Self { inner }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a relative segment (which may contain `/`).
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let segment = segment.trim_start_matches("./");
        if self.inner.is_empty() {
            return Self {
                inner: segment.to_string(),
            };
        }
        let inner = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self { inner }
    }

    /// Express this path relative to `root` when it lives underneath it.
    ///
    /// Paths outside `root` (global provider files) are returned unchanged.
    pub fn relative_to(&self, root: &NormalizedPath) -> String {
        let prefix = root.inner.trim_end_matches('/');
        match self.inner.strip_prefix(prefix) {
            Some(rest) if rest.starts_with('/') => rest.trim_start_matches('/').to_string(),
            _ => self.inner.clone(),
        }
    }

    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/project", ".mcp.json", "/project/.mcp.json")]
    #[case("/project/", ".vscode/mcp.json", "/project/.vscode/mcp.json")]
    #[case("/project", "./opencode.json", "/project/opencode.json")]
    #[case("", ".idea/mcp.json", ".idea/mcp.json")]
    fn test_join(#[case] root: &str, #[case] segment: &str, #[case] expected: &str) {
        assert_eq!(NormalizedPath::new(root).join(segment).as_str(), expected);
    }

    #[test]
    fn test_backslashes_are_normalized() {
        let path = NormalizedPath::new("C:\\work\\project");
        assert_eq!(path.as_str(), "C:/work/project");
        assert_eq!(path.join(".codex\\config.toml").as_str(), "C:/work/project/.codex/config.toml");
    }

    #[test]
    fn test_relative_to() {
        let root = NormalizedPath::new("/project");
        let inside = root.join(".copilot/mcp-config.json");
        assert_eq!(inside.relative_to(&root), ".copilot/mcp-config.json");

        let outside = NormalizedPath::new("/home/me/.kimi/mcp.json");
        assert_eq!(outside.relative_to(&root), "/home/me/.kimi/mcp.json");

        let sibling = NormalizedPath::new("/project-other/.mcp.json");
        assert_eq!(sibling.relative_to(&root), "/project-other/.mcp.json");
    }
}
