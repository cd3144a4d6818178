//! FileSystem abstraction for read-only project probing

mod mock;
mod real;
mod r#trait;

pub use mock::MockFileSystem;
pub use r#trait::{DirEntry, FileSystem, FileType};
pub use real::RealFileSystem;
