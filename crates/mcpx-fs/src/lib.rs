//! Filesystem layer for mcpx
//!
//! Provides normalized path handling, atomic text I/O and the [`FileSystem`]
//! capability that the engine uses for every read, write and delete.

pub mod capability;
pub mod error;
pub mod io;
pub mod path;

pub use capability::{FileSystem, LocalFs};
pub use error::{Error, Result};
pub use path::NormalizedPath;
