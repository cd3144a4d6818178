//! FileSystem trait definition

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
    Symlink,
}

/// A directory entry returned by read_dir
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub file_type: FileType,
}

impl DirEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.name
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }
}

/// Query-only view of the project tree used by the detectors.
///
/// Nothing in the detection engine writes through this trait; persisting the
/// generated Makefile is the job of [`crate::storage::MakefileWriter`].
pub trait FileSystem: Send + Sync {
    /// Check if a path exists (file or directory)
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// List directory contents
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// List the files directly under `dir` whose extension is one of
    /// `extensions` (given without the leading dot), sorted by path.
    fn list_by_extension(&self, dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
        let mut files: Vec<PathBuf> = self
            .read_dir(dir)?
            .into_iter()
            .filter(|entry| entry.is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| extensions.contains(&ext))
                    .unwrap_or(false)
            })
            .map(|entry| entry.path)
            .collect();

        files.sort();
        Ok(files)
    }
}
