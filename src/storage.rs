//! Persisting the rendered Makefile

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// Writes generated Makefiles to disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct MakefileWriter;

impl MakefileWriter {
    pub fn new() -> Self {
        Self
    }

    /// Writes `text` to `path`, replacing any existing file.
    pub fn write(&self, path: &Path, text: &str) -> Result<()> {
        if path.exists() {
            warn!(path = %path.display(), "Makefile already exists and will be overwritten");
        }

        std::fs::write(path, text)
            .with_context(|| format!("Failed to write Makefile to {}", path.display()))?;

        info!(path = %path.display(), bytes = text.len(), "Makefile written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_new_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Makefile");

        MakefileWriter::new().write(&path, "build:\n\tgo build .\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "build:\n\tgo build .\n"
        );
    }

    #[test]
    fn test_overwrite_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Makefile");
        std::fs::write(&path, "old").unwrap();

        MakefileWriter::new().write(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("Makefile");

        let err = MakefileWriter::new().write(&path, "x").unwrap_err();
        assert!(err.to_string().contains("Failed to write Makefile"));
    }
}
