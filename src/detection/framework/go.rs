use super::{needle, read_manifest, scan_text, FrameworkClassifier, Needle};
use crate::fs::FileSystem;
use crate::stack::{Framework, FrameworkId};
use std::path::Path;

const GO_NEEDLES: &[Needle] = &[
    needle("github.com/gin-gonic/gin", FrameworkId::Gin),
    needle("github.com/labstack/echo", FrameworkId::Echo),
    needle("github.com/gofiber/fiber", FrameworkId::Fiber),
    needle("gorm.io/gorm", FrameworkId::Gorm),
    needle("github.com/spf13/cobra", FrameworkId::Cobra),
];

/// Scans `go.mod` module requirements.
pub struct GoClassifier;

impl FrameworkClassifier for GoClassifier {
    fn manifests(&self) -> &'static [&'static str] {
        &["go.mod"]
    }

    fn classify(&self, fs: &dyn FileSystem, root: &Path) -> Vec<Framework> {
        let mut frameworks = Vec::new();
        if let Some(content) = read_manifest(fs, &root.join("go.mod")) {
            scan_text(&content, GO_NEEDLES, &mut frameworks);
        }
        frameworks
    }
}
