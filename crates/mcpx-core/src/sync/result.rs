//! Per-provider sync outcomes.

use mcpx_fs::NormalizedPath;
use mcpx_meta::ProviderId;

/// What happened to one provider file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    Created,
    Updated,
    /// The merged content equals the file on disk; nothing was written.
    Unchanged,
    Deleted,
    /// Read, write or generation failed; the message is user-facing.
    Error(String),
}

impl SyncStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Short label for CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
            Self::Deleted => "deleted",
            Self::Error(_) => "error",
        }
    }
}

/// One record per attempted write or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncResult {
    pub provider: ProviderId,
    pub path: NormalizedPath,
    pub status: SyncStatus,
}

impl SyncResult {
    pub fn new(provider: ProviderId, path: NormalizedPath, status: SyncStatus) -> Self {
        Self {
            provider,
            path,
            status,
        }
    }
}
