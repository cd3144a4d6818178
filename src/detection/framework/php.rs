use super::{json_dependency_names, needle, read_manifest, scan_names, FrameworkClassifier, Needle};
use crate::fs::FileSystem;
use crate::stack::{Framework, FrameworkId};
use std::path::Path;

const COMPOSER_DEPENDENCY_SECTIONS: &[&str] = &["require", "require-dev"];

const COMPOSER_NEEDLES: &[Needle] = &[
    needle("laravel/framework", FrameworkId::Laravel),
    needle("symfony/framework-bundle", FrameworkId::Symfony),
];

pub struct PhpClassifier;

impl FrameworkClassifier for PhpClassifier {
    fn manifests(&self) -> &'static [&'static str] {
        &["composer.json"]
    }

    fn classify(&self, fs: &dyn FileSystem, root: &Path) -> Vec<Framework> {
        let mut frameworks = Vec::new();
        let names = read_manifest(fs, &root.join("composer.json"))
            .and_then(|content| json_dependency_names(&content, COMPOSER_DEPENDENCY_SECTIONS));

        if let Some(names) = names {
            scan_names(&names, COMPOSER_NEEDLES, &mut frameworks);
        }
        frameworks
    }
}
