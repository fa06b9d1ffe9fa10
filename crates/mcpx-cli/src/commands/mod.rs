//! Command implementations for mcpx-cli

pub mod add;
pub mod completions;
pub mod import;
pub mod init;
pub mod list;
pub mod providers;
pub mod remove;
pub mod status;
pub mod sync;

pub use add::run_add;
pub use completions::run_completions;
pub use import::run_import;
pub use init::run_init;
pub use list::run_list;
pub use providers::run_providers;
pub use remove::run_remove;
pub use status::run_status;
pub use sync::run_sync;
