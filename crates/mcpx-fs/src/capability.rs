//! The file capability consumed by the mcpx engine.
//!
//! Providers, the synchronizer, the detector and the config store never touch
//! `std::fs` directly; they go through [`FileSystem`] so that tests can swap
//! in an implementation that fails on demand.

use tracing::debug;

use crate::{NormalizedPath, Result, io};

/// Read, write, probe and delete text files.
pub trait FileSystem {
    /// Read a text file. A missing file is [`crate::Error::NotFound`].
    fn read_text(&self, path: &NormalizedPath) -> Result<String>;

    /// Write a text file, creating parent directories as needed.
    fn write_text(&self, path: &NormalizedPath, content: &str) -> Result<()>;

    /// Whether a file is present at `path`.
    fn exists(&self, path: &NormalizedPath) -> bool;

    /// Delete a file. Returns `false` if it was already absent.
    fn delete(&self, path: &NormalizedPath) -> Result<bool>;
}

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read_text(&self, path: &NormalizedPath) -> Result<String> {
        io::read_text(path)
    }

    fn write_text(&self, path: &NormalizedPath, content: &str) -> Result<()> {
        debug!(path = %path, bytes = content.len(), "writing file");
        io::write_text(path, content)
    }

    fn exists(&self, path: &NormalizedPath) -> bool {
        path.is_file()
    }

    fn delete(&self, path: &NormalizedPath) -> Result<bool> {
        let removed = io::remove_file(path)?;
        debug!(path = %path, removed, "delete requested");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_local_fs_roundtrip() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFs::new();
        let path = NormalizedPath::new(temp.path()).join("nested/dir/file.json");

        assert!(!fs.exists(&path));
        fs.write_text(&path, "{}\n").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_text(&path).unwrap(), "{}\n");

        assert!(fs.delete(&path).unwrap());
        assert!(!fs.delete(&path).unwrap());
        assert!(!fs.exists(&path));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFs::new();
        assert!(!fs.exists(&NormalizedPath::new(temp.path())));
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFs::new();
        let err = fs
            .read_text(&NormalizedPath::new(temp.path()).join("absent.toml"))
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
