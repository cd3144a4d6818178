use super::types::ProjectSignals;
use super::{container, framework, language, structure};
use crate::fs::{FileSystem, RealFileSystem};
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("Cannot read project root {path}: {reason}")]
    RootInaccessible { path: PathBuf, reason: String },
}

/// Runs the four detectors against a project root.
///
/// Detectors run in a fixed order (language, frameworks, container,
/// structure). Only an unreadable root is an error; every other probe failure
/// is treated as the signal being absent.
pub struct ProjectAnalyzer<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> ProjectAnalyzer<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn analyze(&self, root: &Path) -> Result<ProjectSignals, DetectionError> {
        let start_time = Instant::now();
        self.validate_root(root)?;

        let language = language::classify(&self.fs, root);
        let frameworks = framework::classify(&self.fs, root, language);
        let container = container::classify(&self.fs, root);
        let structure = structure::classify(&self.fs, root, language);

        let signals =
            ProjectSignals::from_parts(root.to_path_buf(), language, frameworks, container, structure);

        info!(
            root = %root.display(),
            language = %signals.language,
            frameworks = signals.frameworks.len(),
            containerized = signals.containerized,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Project analysis complete"
        );
        Ok(signals)
    }

    fn validate_root(&self, root: &Path) -> Result<(), DetectionError> {
        match self.fs.read_dir(root) {
            Ok(entries) => {
                debug!(root = %root.display(), entries = entries.len(), "Project root listed");
                Ok(())
            }
            Err(e) => Err(DetectionError::RootInaccessible {
                path: root.to_path_buf(),
                reason: format!("{:#}", e),
            }),
        }
    }
}

/// Analyzes a directory on the real filesystem.
pub fn analyze_project(root: &Path) -> Result<ProjectSignals, DetectionError> {
    ProjectAnalyzer::new(RealFileSystem::new()).analyze(root)
}
