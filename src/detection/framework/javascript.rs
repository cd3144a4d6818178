use super::{json_dependency_names, needle, read_manifest, scan_names, FrameworkClassifier, Needle};
use crate::fs::FileSystem;
use crate::stack::{Framework, FrameworkId};
use std::path::Path;

const NODE_DEPENDENCY_SECTIONS: &[&str] = &["dependencies", "devDependencies"];

const NODE_NEEDLES: &[Needle] = &[
    needle("next", FrameworkId::NextJs),
    needle("react", FrameworkId::React),
    needle("vue", FrameworkId::Vue),
    needle("@angular/core", FrameworkId::Angular),
    needle("express", FrameworkId::Express),
    needle("fastify", FrameworkId::Fastify),
    needle("@nestjs/core", FrameworkId::NestJs),
    needle("prisma", FrameworkId::Prisma),
    needle("@prisma/client", FrameworkId::Prisma),
];

/// Looks up dependency names in `package.json`, runtime and dev dependencies
/// merged. Shared by JavaScript and TypeScript projects.
pub struct JavaScriptClassifier;

impl FrameworkClassifier for JavaScriptClassifier {
    fn manifests(&self) -> &'static [&'static str] {
        &["package.json"]
    }

    fn classify(&self, fs: &dyn FileSystem, root: &Path) -> Vec<Framework> {
        let mut frameworks = Vec::new();
        let names = read_manifest(fs, &root.join("package.json"))
            .and_then(|content| json_dependency_names(&content, NODE_DEPENDENCY_SECTIONS));

        if let Some(names) = names {
            scan_names(&names, NODE_NEEDLES, &mut frameworks);
        }
        frameworks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    fn ids(fs: &MockFileSystem) -> Vec<FrameworkId> {
        JavaScriptClassifier
            .classify(fs, Path::new("/mock"))
            .into_iter()
            .map(|f| f.id)
            .collect()
    }

    #[test]
    fn test_next_app() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "package.json",
            r#"{"name": "web", "dependencies": {"next": "14.0.0", "react": "18.2.0"}}"#,
        );
        assert_eq!(ids(&fs), vec![FrameworkId::NextJs, FrameworkId::React]);
    }

    #[test]
    fn test_dev_dependencies_are_merged() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "package.json",
            r#"{"dependencies": {"express": "^4.18.0"}, "devDependencies": {"prisma": "^5.0.0", "@prisma/client": "^5.0.0"}}"#,
        );
        assert_eq!(ids(&fs), vec![FrameworkId::Express, FrameworkId::Prisma]);
    }

    #[test]
    fn test_names_match_exactly() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "package.json",
            r#"{"dependencies": {"react-dom": "18.2.0", "express-session": "1.0.0"}}"#,
        );
        assert!(ids(&fs).is_empty());
    }

    #[test]
    fn test_nest_and_angular() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "package.json",
            r#"{"dependencies": {"@nestjs/core": "10.0.0", "@angular/core": "17.0.0"}}"#,
        );
        assert_eq!(ids(&fs), vec![FrameworkId::Angular, FrameworkId::NestJs]);
    }

    #[test]
    fn test_malformed_package_json() {
        let fs = MockFileSystem::new();
        fs.add_file("package.json", "{ \"dependencies\": ");
        assert!(ids(&fs).is_empty());
    }
}
