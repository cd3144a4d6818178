//! Project layout conventions: tests, build output, vendoring, entry point,
//! dependency manifests and config files

use super::types::StructureSignals;
use crate::fs::FileSystem;
use crate::stack::LanguageId;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

const TEST_DIRS: &[&str] = &["test", "tests", "spec", "specs", "__tests__", ".test", ".tests"];

const BUILD_DIRS: &[&str] = &[
    "build",
    "dist",
    "out",
    "bin",
    "target",
    "release",
    "debug",
    ".build",
    "__pycache__",
    "node_modules/.bin",
];

const VENDOR_DIR: &str = "vendor";

const DEPENDENCY_MANIFESTS: &[&str] = &[
    "go.mod",
    "go.sum",
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "requirements.txt",
    "setup.py",
    "pyproject.toml",
    "Pipfile",
    "Gemfile",
    "Gemfile.lock",
    "Cargo.toml",
    "Cargo.lock",
    "pom.xml",
    "build.gradle",
    "composer.json",
    "composer.lock",
];

const CONFIG_FILES: &[&str] = &[
    ".env",
    ".env.local",
    ".env.example",
    "config.yaml",
    "config.yml",
    "config.json",
    ".eslintrc",
    ".eslintrc.json",
    ".prettierrc",
    "jest.config.js",
    "tsconfig.json",
    ".pylintrc",
    "setup.cfg",
    "tox.ini",
    ".gitignore",
    "Dockerfile",
    "docker-compose.yml",
    "docker-compose.yaml",
    ".github/workflows",
    ".gitlab-ci.yml",
    ".travis.yml",
    "Jenkinsfile",
];

/// Entry-point candidates per language, first existing wins.
fn entry_point_candidates(language: LanguageId) -> &'static [&'static str] {
    match language {
        LanguageId::Go => &["main.go", "cmd/main.go"],
        LanguageId::JavaScript | LanguageId::TypeScript => {
            &["index.js", "main.js", "app.js", "server.js", "index.ts", "main.ts"]
        }
        LanguageId::Python => &["main.py", "app.py", "__main__.py", "run.py", "wsgi.py"],
        LanguageId::Rust => &["src/main.rs"],
        LanguageId::Java => &["src/main/java"],
        LanguageId::Ruby => &["app.rb", "main.rb", "server.rb", "config.ru"],
        LanguageId::Php => &["index.php", "public/index.php"],
        LanguageId::Cpp => &["main.cpp", "src/main.cpp", "main.c", "src/main.c"],
        LanguageId::Unknown => &[],
    }
}

fn package_main_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""main"\s*:\s*"([^"]+)""#).expect("valid regex"))
}

pub fn classify(fs: &dyn FileSystem, root: &Path, language: LanguageId) -> StructureSignals {
    let signals = StructureSignals {
        has_test_dir: has_tests(fs, root),
        has_build_dir: first_dir(fs, root, BUILD_DIRS).is_some(),
        has_vendor_dir: fs.is_dir(&root.join(VENDOR_DIR)),
        entry_point: entry_point(fs, root, language),
        dependency_manifests: present(fs, root, DEPENDENCY_MANIFESTS),
        config_files: present(fs, root, CONFIG_FILES),
    };

    debug!(
        has_test_dir = signals.has_test_dir,
        has_build_dir = signals.has_build_dir,
        has_vendor_dir = signals.has_vendor_dir,
        entry_point = ?signals.entry_point,
        "Structure classification complete"
    );
    signals
}

fn first_dir(fs: &dyn FileSystem, root: &Path, candidates: &[&'static str]) -> Option<&'static str> {
    let found = candidates
        .iter()
        .copied()
        .find(|dir| fs.is_dir(&root.join(dir)));
    if let Some(dir) = found {
        debug!(dir, "Found directory");
    }
    found
}

fn has_tests(fs: &dyn FileSystem, root: &Path) -> bool {
    if first_dir(fs, root, TEST_DIRS).is_some() {
        return true;
    }

    let entries = match fs.read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(error = %e, "Could not list project files");
            return false;
        }
    };

    entries
        .iter()
        .filter(|entry| entry.is_file())
        .map(|entry| entry.file_name())
        .any(|name| name.contains("_test.") || name.ends_with(".test.js"))
}

fn entry_point(fs: &dyn FileSystem, root: &Path, language: LanguageId) -> Option<String> {
    let found = entry_point_candidates(language)
        .iter()
        .find(|candidate| fs.exists(&root.join(candidate)))
        .map(|candidate| candidate.to_string());

    if found.is_some() {
        return found;
    }

    match language {
        LanguageId::JavaScript | LanguageId::TypeScript => package_main(fs, root),
        _ => None,
    }
}

/// Falls back to the `"main"` field of `package.json`; when the value cannot
/// be pulled out the manifest itself is reported.
fn package_main(fs: &dyn FileSystem, root: &Path) -> Option<String> {
    let content = fs.read_to_string(&root.join("package.json")).ok()?;
    if !content.contains("\"main\"") {
        return None;
    }

    let main = package_main_regex()
        .captures(&content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "package.json".to_string());
    Some(main)
}

fn present(fs: &dyn FileSystem, root: &Path, candidates: &[&str]) -> Vec<String> {
    candidates
        .iter()
        .filter(|name| fs.exists(&root.join(name)))
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    fn root() -> &'static Path {
        Path::new("/mock")
    }

    #[test]
    fn test_test_directory() {
        let fs = MockFileSystem::new();
        fs.add_dir("__tests__");
        assert!(classify(&fs, root(), LanguageId::JavaScript).has_test_dir);
    }

    #[test]
    fn test_root_test_file() {
        let fs = MockFileSystem::new();
        fs.add_file("main.go", "package main");
        fs.add_file("handler_test.go", "package main");
        assert!(classify(&fs, root(), LanguageId::Go).has_test_dir);
    }

    #[test]
    fn test_js_test_suffix() {
        let fs = MockFileSystem::new();
        fs.add_file("sum.test.js", "");
        assert!(classify(&fs, root(), LanguageId::JavaScript).has_test_dir);
    }

    #[test]
    fn test_no_tests() {
        let fs = MockFileSystem::new();
        fs.add_file("main.py", "");
        fs.add_file("latest.txt", "");
        assert!(!classify(&fs, root(), LanguageId::Python).has_test_dir);
    }

    #[test]
    fn test_any_root_file_counts_as_test() {
        let fs = MockFileSystem::new();
        fs.add_file("smoke_test.sh", "#!/bin/sh");
        assert!(classify(&fs, root(), LanguageId::Unknown).has_test_dir);

        let fs = MockFileSystem::new();
        fs.add_file("CMakeLists.txt", "");
        fs.add_file("vector_test.hpp", "");
        assert!(classify(&fs, root(), LanguageId::Cpp).has_test_dir);
    }

    #[test]
    fn test_test_named_directory_is_not_a_test_file() {
        let fs = MockFileSystem::new();
        fs.add_dir("load_test.d");
        assert!(!classify(&fs, root(), LanguageId::Unknown).has_test_dir);
    }

    #[test]
    fn test_build_and_vendor_dirs() {
        let fs = MockFileSystem::new();
        fs.add_dir("node_modules/.bin");
        fs.add_dir("vendor");
        let signals = classify(&fs, root(), LanguageId::JavaScript);
        assert!(signals.has_build_dir);
        assert!(signals.has_vendor_dir);
    }

    #[test]
    fn test_build_file_is_not_build_dir() {
        let fs = MockFileSystem::new();
        fs.add_file("build", "#!/bin/sh");
        assert!(!classify(&fs, root(), LanguageId::Unknown).has_build_dir);
    }

    #[test]
    fn test_go_entry_point_in_cmd() {
        let fs = MockFileSystem::new();
        fs.add_file("cmd/main.go", "package main");
        assert_eq!(
            classify(&fs, root(), LanguageId::Go).entry_point.as_deref(),
            Some("cmd/main.go")
        );
    }

    #[test]
    fn test_entry_point_candidate_order() {
        let fs = MockFileSystem::new();
        fs.add_file("wsgi.py", "");
        fs.add_file("app.py", "");
        assert_eq!(
            classify(&fs, root(), LanguageId::Python).entry_point.as_deref(),
            Some("app.py")
        );
    }

    #[test]
    fn test_package_json_main_fallback() {
        let fs = MockFileSystem::new();
        fs.add_file("package.json", r#"{"name": "lib", "main": "dist/lib.js"}"#);
        assert_eq!(
            classify(&fs, root(), LanguageId::JavaScript).entry_point.as_deref(),
            Some("dist/lib.js")
        );
    }

    #[test]
    fn test_package_json_main_unextractable() {
        let fs = MockFileSystem::new();
        fs.add_file("package.json", "{\"main\": null}");
        assert_eq!(
            classify(&fs, root(), LanguageId::TypeScript).entry_point.as_deref(),
            Some("package.json")
        );
    }

    #[test]
    fn test_java_entry_point_directory() {
        let fs = MockFileSystem::new();
        fs.add_dir("src/main/java");
        assert_eq!(
            classify(&fs, root(), LanguageId::Java).entry_point.as_deref(),
            Some("src/main/java")
        );
    }

    #[test]
    fn test_unknown_has_no_entry_point() {
        let fs = MockFileSystem::new();
        fs.add_file("main.go", "");
        assert_eq!(classify(&fs, root(), LanguageId::Unknown).entry_point, None);
    }

    #[test]
    fn test_manifests_follow_static_order() {
        let fs = MockFileSystem::new();
        fs.add_file("composer.json", "{}");
        fs.add_file("Cargo.lock", "");
        fs.add_file("go.mod", "");
        fs.add_file("Cargo.toml", "");
        assert_eq!(
            classify(&fs, root(), LanguageId::Go).dependency_manifests,
            vec!["go.mod", "Cargo.toml", "Cargo.lock", "composer.json"]
        );
    }

    #[test]
    fn test_config_files_include_directories() {
        let fs = MockFileSystem::new();
        fs.add_file("Jenkinsfile", "");
        fs.add_dir(".github/workflows");
        fs.add_file(".env", "");
        assert_eq!(
            classify(&fs, root(), LanguageId::Unknown).config_files,
            vec![".env", ".github/workflows", "Jenkinsfile"]
        );
    }
}
