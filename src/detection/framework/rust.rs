use super::{needle, read_manifest, scan_text, FrameworkClassifier, Needle};
use crate::fs::FileSystem;
use crate::stack::{Framework, FrameworkId};
use std::path::Path;

const CARGO_NEEDLES: &[Needle] = &[
    needle("actix-web", FrameworkId::Actix),
    needle("rocket", FrameworkId::Rocket),
    needle("axum", FrameworkId::Axum),
    needle("diesel", FrameworkId::Diesel),
    needle("clap", FrameworkId::Clap),
];

pub struct RustClassifier;

impl FrameworkClassifier for RustClassifier {
    fn manifests(&self) -> &'static [&'static str] {
        &["Cargo.toml"]
    }

    fn classify(&self, fs: &dyn FileSystem, root: &Path) -> Vec<Framework> {
        let mut frameworks = Vec::new();
        if let Some(content) = read_manifest(fs, &root.join("Cargo.toml")) {
            scan_text(&content, CARGO_NEEDLES, &mut frameworks);
        }
        frameworks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    #[test]
    fn test_axum_with_clap() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "Cargo.toml",
            "[package]\nname = \"svc\"\n\n[dependencies]\naxum = \"0.7\"\nclap = { version = \"4\", features = [\"derive\"] }\n",
        );

        let ids: Vec<_> = RustClassifier
            .classify(&fs, Path::new("/mock"))
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec![FrameworkId::Axum, FrameworkId::Clap]);
    }

    #[test]
    fn test_actix_web() {
        let fs = MockFileSystem::new();
        fs.add_file("Cargo.toml", "[dependencies]\nactix-web = \"4\"\n");
        let frameworks = RustClassifier.classify(&fs, Path::new("/mock"));
        assert_eq!(frameworks[0].id, FrameworkId::Actix);
        assert_eq!(frameworks[0].default_port, Some(8000));
    }
}
