//! [`TestProject`] builder for mcpx test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use mcpx_fs::NormalizedPath;
use mcpx_meta::{CONFIG_FILENAME, McpxConfig, ProviderId, ServerMap};

/// A temporary project directory with a sibling fake home directory.
///
/// # Example
///
/// ```rust,no_run
/// use mcpx_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write_file(".vscode/mcp.json", "{\"servers\": {}}");
/// project.assert_file_exists(".vscode/mcp.json");
/// ```
pub struct TestProject {
    project: TempDir,
    home: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty project directory and an empty home directory.
    pub fn new() -> Self {
        Self {
            project: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.project.path()
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    pub fn root_path(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    pub fn home_path(&self) -> NormalizedPath {
        NormalizedPath::new(self.home())
    }

    /// Absolute path of `rel` inside the project.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn write_file(&self, rel: &str, content: &str) {
        write_under(self.root(), rel, content);
    }

    /// Write `content` to `rel` inside the fake home directory.
    pub fn write_home_file(&self, rel: &str, content: &str) {
        write_under(self.home(), rel, content);
    }

    /// Read `rel` from the project.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_file(&self, rel: &str) -> String {
        let full_path = self.path(rel);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    pub fn read_home_file(&self, rel: &str) -> String {
        let full_path = self.home().join(rel);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Write a `.mcpx.json` with the given providers and servers.
    pub fn write_config(&self, providers: &[ProviderId], servers: ServerMap) {
        let config = McpxConfig {
            servers,
            ..McpxConfig::new(providers.to_vec())
        };
        self.write_file(CONFIG_FILENAME, &config.to_json_pretty().unwrap());
    }

    /// Parse the project's `.mcpx.json` without validation.
    pub fn read_config_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_file(CONFIG_FILENAME)).unwrap()
    }

    /// # Panics
    /// Panics with a descriptive message if `rel` does not exist.
    pub fn assert_file_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// # Panics
    /// Panics with a descriptive message if `rel` exists.
    pub fn assert_file_not_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, rel: &str, content: &str) {
        let file_content = self.read_file(rel);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            rel,
            content,
            file_content
        );
    }
}

fn write_under(base: &Path, rel: &str, content: &str) {
    let full_path = base.join(rel);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(full_path, content).unwrap();
}
