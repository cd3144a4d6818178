use super::{needle, read_manifest, scan_text, FrameworkClassifier, Needle};
use crate::fs::FileSystem;
use crate::stack::{Framework, FrameworkId};
use std::path::Path;

const GEM_NEEDLES: &[Needle] = &[
    needle("rails", FrameworkId::Rails),
    needle("sinatra", FrameworkId::Sinatra),
];

pub struct RubyClassifier;

impl FrameworkClassifier for RubyClassifier {
    fn manifests(&self) -> &'static [&'static str] {
        &["Gemfile"]
    }

    fn classify(&self, fs: &dyn FileSystem, root: &Path) -> Vec<Framework> {
        let mut frameworks = Vec::new();
        if let Some(content) = read_manifest(fs, &root.join("Gemfile")) {
            scan_text(&content, GEM_NEEDLES, &mut frameworks);
        }
        frameworks
    }
}
