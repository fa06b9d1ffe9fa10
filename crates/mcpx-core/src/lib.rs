//! Engine layer for mcpx
//!
//! Sits between the provider translators and the CLI:
//!
//! ```text
//!                 mcpx-cli
//!                    |
//!                mcpx-core
//!                    |
//!     +--------------+--------------+
//!     |              |              |
//!  mcpx-fs       mcpx-meta     mcpx-providers
//! ```
//!
//! - [`ConfigStore`]: read-modify-write access to `.mcpx.json`
//! - [`Synchronizer`]: writes provider files and classifies each outcome
//! - [`Detector`]: finds importable provider files in a project
//! - [`import_servers`] / [`merge_imported`]: explicit import
//! - [`check_status`]: read-only drift check
//!
//! Every operation takes the project root explicitly and performs I/O only
//! through [`mcpx_fs::FileSystem`].

pub mod detect;
pub mod error;
pub mod import;
pub mod selection;
pub mod store;
pub mod sync;

pub use detect::{Detection, Detector};
pub use error::{Error, Result};
pub use import::{import_servers, merge_imported};
pub use selection::removed_providers;
pub use store::ConfigStore;
pub use sync::{ProviderStatus, SyncResult, SyncStatus, Synchronizer, check_status};
