//! A [`FileSystem`] wrapper that fails on chosen paths.

use std::collections::HashSet;
use std::io;

use mcpx_fs::{Error, FileSystem, LocalFs, NormalizedPath, Result};

/// Delegates to [`LocalFs`] except for registered paths, whose reads, writes
/// or deletes fail with `PermissionDenied`.
#[derive(Debug, Default)]
pub struct FailingFs {
    inner: LocalFs,
    fail_read: HashSet<String>,
    fail_write: HashSet<String>,
    fail_delete: HashSet<String>,
}

impl FailingFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_read(mut self, path: &NormalizedPath) -> Self {
        self.fail_read.insert(path.as_str().to_string());
        self
    }

    pub fn fail_write(mut self, path: &NormalizedPath) -> Self {
        self.fail_write.insert(path.as_str().to_string());
        self
    }

    pub fn fail_delete(mut self, path: &NormalizedPath) -> Self {
        self.fail_delete.insert(path.as_str().to_string());
        self
    }

    fn denied(path: &NormalizedPath) -> Error {
        Error::io(
            path.to_native(),
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        )
    }
}

impl FileSystem for FailingFs {
    fn read_text(&self, path: &NormalizedPath) -> Result<String> {
        if self.fail_read.contains(path.as_str()) {
            return Err(Self::denied(path));
        }
        self.inner.read_text(path)
    }

    fn write_text(&self, path: &NormalizedPath, content: &str) -> Result<()> {
        if self.fail_write.contains(path.as_str()) {
            return Err(Self::denied(path));
        }
        self.inner.write_text(path, content)
    }

    fn exists(&self, path: &NormalizedPath) -> bool {
        self.inner.exists(path)
    }

    fn delete(&self, path: &NormalizedPath) -> Result<bool> {
        if self.fail_delete.contains(path.as_str()) {
            return Err(Self::denied(path));
        }
        self.inner.delete(path)
    }
}
