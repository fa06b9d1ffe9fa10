//! The per-provider translation contract.

use mcpx_fs::{FileSystem, NormalizedPath};
use mcpx_meta::{ProviderDescriptor, ProviderId, ServerMap};

use crate::Result;

/// Bidirectional translation between the canonical server map and one
/// tool's native configuration file.
pub trait Provider: Send + Sync {
    fn descriptor(&self) -> &ProviderDescriptor;

    fn id(&self) -> ProviderId {
        self.descriptor().id
    }

    fn display_name(&self) -> &'static str {
        self.descriptor().display_name
    }

    /// Render the native file for `servers`, skipping disabled entries.
    ///
    /// With `existing` content that parses in the native syntax, only the
    /// servers-owning part is replaced and everything else is kept. Content
    /// that does not parse is discarded and a fresh document is produced.
    fn generate(&self, servers: &ServerMap, existing: Option<&str>) -> Result<String>;

    /// Read the servers out of native file content.
    fn parse(&self, content: &str) -> Result<ServerMap>;

    /// Where this provider's native file lives for a project. No I/O.
    fn locate(&self, root: &NormalizedPath) -> NormalizedPath {
        root.join(self.descriptor().config_path)
    }

    /// A stale in-project file left by earlier versions, for providers whose
    /// real file lives elsewhere.
    fn legacy_path(&self, _root: &NormalizedPath) -> Option<NormalizedPath> {
        None
    }

    fn exists(&self, fs: &dyn FileSystem, root: &NormalizedPath) -> bool {
        fs.exists(&self.locate(root))
    }
}
