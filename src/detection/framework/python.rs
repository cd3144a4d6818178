use super::{needle, read_manifest, scan_text, FrameworkClassifier, Needle};
use crate::fs::FileSystem;
use crate::stack::{Framework, FrameworkId};
use std::path::Path;

const PYTHON_NEEDLES: &[Needle] = &[
    needle("django", FrameworkId::Django),
    needle("flask", FrameworkId::Flask),
    needle("fastapi", FrameworkId::FastApi),
    needle("sqlalchemy", FrameworkId::SqlAlchemy),
];

/// Scans `requirements.txt`, then `pyproject.toml`. A framework found in
/// both is reported once.
pub struct PythonClassifier;

impl FrameworkClassifier for PythonClassifier {
    fn manifests(&self) -> &'static [&'static str] {
        &["requirements.txt", "pyproject.toml"]
    }

    fn classify(&self, fs: &dyn FileSystem, root: &Path) -> Vec<Framework> {
        let mut frameworks = Vec::new();
        for manifest in self.manifests() {
            if let Some(content) = read_manifest(fs, &root.join(manifest)) {
                scan_text(&content, PYTHON_NEEDLES, &mut frameworks);
            }
        }
        frameworks
    }
}
