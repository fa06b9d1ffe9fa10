//! Projection of the canonical servers into provider files.

mod result;
mod status;
mod synchronizer;

pub use result::{SyncResult, SyncStatus};
pub use status::{ProviderStatus, check_status};
pub use synchronizer::Synchronizer;
