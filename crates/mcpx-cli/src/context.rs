//! Per-invocation state shared by every command.

use std::path::{Path, PathBuf};

use mcpx_core::{ConfigStore, Error as CoreError};
use mcpx_fs::{LocalFs, NormalizedPath};
use mcpx_meta::{CONFIG_FILENAME, McpxConfig};
use mcpx_providers::ProviderRegistry;

use crate::error::{CliError, Result};

/// Project root, home directory and the provider registry built from it.
pub struct Context {
    pub root: NormalizedPath,
    pub home: NormalizedPath,
    pub fs: LocalFs,
    pub registry: ProviderRegistry,
}

impl Context {
    /// Resolve the project root from `--dir` (or the current directory) and
    /// the home directory from the platform.
    pub fn resolve(dir: Option<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let root = match dir {
            Some(dir) if dir.is_absolute() => dir,
            Some(dir) => cwd.join(dir),
            None => cwd,
        };
        if !root.is_dir() {
            return Err(CliError::user(format!(
                "Project directory not found: {}",
                root.display()
            )));
        }
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::user("Could not determine the home directory"))?;
        Ok(Self::new(&root, &home))
    }

    pub fn new(root: &Path, home: &Path) -> Self {
        let home = NormalizedPath::new(home);
        Self {
            root: NormalizedPath::new(root),
            registry: ProviderRegistry::with_builtins(home.clone()),
            home,
            fs: LocalFs::new(),
        }
    }

    pub fn store(&self) -> ConfigStore<'_> {
        ConfigStore::new(self.root.clone(), &self.fs)
    }

    /// Load `.mcpx.json`, pointing at `mcpx init` when it is missing.
    pub fn load_config(&self) -> Result<McpxConfig> {
        match self.store().load() {
            Err(CoreError::ConfigNotFound { .. }) => Err(CliError::user(format!(
                "No {CONFIG_FILENAME} found in {}. Run `mcpx init` first.",
                self.root
            ))),
            other => Ok(other?),
        }
    }

    /// Path shown to the user: relative for project files, absolute otherwise.
    pub fn display_path(&self, path: &NormalizedPath) -> String {
        path.relative_to(&self.root)
    }
}
