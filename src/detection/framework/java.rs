use super::{needle, read_manifest, scan_text, FrameworkClassifier, Needle};
use crate::fs::FileSystem;
use crate::stack::{Framework, FrameworkId};
use std::path::Path;

const JVM_NEEDLES: &[Needle] = &[
    needle("spring-boot", FrameworkId::SpringBoot),
    needle("quarkus", FrameworkId::Quarkus),
];

/// Scans the first build file present; Maven wins over Gradle.
pub struct JavaClassifier;

impl FrameworkClassifier for JavaClassifier {
    fn manifests(&self) -> &'static [&'static str] {
        &["pom.xml", "build.gradle", "build.gradle.kts"]
    }

    fn classify(&self, fs: &dyn FileSystem, root: &Path) -> Vec<Framework> {
        let mut frameworks = Vec::new();
        let build_file = self
            .manifests()
            .iter()
            .map(|name| root.join(name))
            .find(|path| fs.exists(path));

        if let Some(content) = build_file.and_then(|path| read_manifest(fs, &path)) {
            scan_text(&content, JVM_NEEDLES, &mut frameworks);
        }
        frameworks
    }
}
