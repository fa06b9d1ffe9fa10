//! Shared test utilities for the mcpx workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`project`]: [`TestProject`] temp-dir builder with file assertions
//! - [`fixtures`]: canned server maps used across crate test suites
//! - [`failing_fs`]: a [`mcpx_fs::FileSystem`] that fails on chosen paths

pub mod failing_fs;
pub mod fixtures;
pub mod project;

pub use failing_fs::FailingFs;
pub use project::TestProject;
