use super::{DirEntry, FileSystem, FileType};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// [`FileSystem`] backed by the local disk.
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context(format!("Failed to read file {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let entries = fs::read_dir(path).context(format!("Failed to read directory {:?}", path))?;

        let mut result = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            let file_type = if path.is_file() {
                FileType::File
            } else if path.is_dir() {
                FileType::Directory
            } else {
                FileType::Symlink
            };

            result.push(DirEntry {
                path,
                name,
                file_type,
            });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        let base = dir.path();

        fs::create_dir(base.join("tests")).unwrap();
        fs::File::create(base.join("go.mod"))
            .unwrap()
            .write_all(b"module example.com/app")
            .unwrap();
        fs::File::create(base.join("main.go"))
            .unwrap()
            .write_all(b"package main")
            .unwrap();
        fs::File::create(base.join("handler_test.go"))
            .unwrap()
            .write_all(b"package main")
            .unwrap();

        dir
    }

    #[test]
    fn test_exists() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        assert!(fs.exists(temp.path()));
        assert!(fs.exists(&temp.path().join("go.mod")));
        assert!(fs.exists(&temp.path().join("tests")));
        assert!(!fs.exists(&temp.path().join("nonexistent")));
    }

    #[test]
    fn test_is_dir_and_is_file() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        assert!(fs.is_dir(&temp.path().join("tests")));
        assert!(!fs.is_dir(&temp.path().join("go.mod")));
        assert!(fs.is_file(&temp.path().join("go.mod")));
        assert!(!fs.is_file(temp.path()));
    }

    #[test]
    fn test_read_to_string() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let content = fs.read_to_string(&temp.path().join("go.mod")).unwrap();
        assert_eq!(content, "module example.com/app");
        assert!(fs.read_to_string(&temp.path().join("missing")).is_err());
    }

    #[test]
    fn test_read_dir() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let entries = fs.read_dir(temp.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.file_name()).collect();

        assert!(names.contains(&"go.mod"));
        assert!(names.contains(&"tests"));
    }

    #[test]
    fn test_read_dir_missing_root_fails() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        assert!(fs.read_dir(&temp.path().join("does-not-exist")).is_err());
    }

    #[test]
    fn test_list_by_extension() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let files = fs.list_by_extension(temp.path(), &["go"]).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["handler_test.go", "main.go"]);
    }
}
