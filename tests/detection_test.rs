//! Detection over the fixture projects

mod support;

use makegen::{analyze_project, FrameworkId, LanguageId};
use support::fixture_path;
use yare::parameterized;

#[parameterized(
    go_gin = { "single-language/go-gin", LanguageId::Go, Some(FrameworkId::Gin) },
    node_express = { "single-language/node-express", LanguageId::JavaScript, Some(FrameworkId::Express) },
    typescript_nest = { "single-language/typescript-nest", LanguageId::TypeScript, Some(FrameworkId::NestJs) },
    python_flask = { "single-language/python-flask", LanguageId::Python, Some(FrameworkId::Flask) },
    rust_axum = { "single-language/rust-axum", LanguageId::Rust, Some(FrameworkId::Axum) },
    java_spring_boot = { "single-language/java-spring-boot", LanguageId::Java, Some(FrameworkId::SpringBoot) },
    java_gradle = { "single-language/java-gradle", LanguageId::Java, Some(FrameworkId::SpringBoot) },
    ruby_sinatra = { "single-language/ruby-sinatra", LanguageId::Ruby, Some(FrameworkId::Sinatra) },
    php_laravel = { "single-language/php-laravel", LanguageId::Php, Some(FrameworkId::Laravel) },
    cpp_cmake = { "single-language/cpp-cmake", LanguageId::Cpp, None },
)]
fn test_single_language_fixture(fixture: &str, language: LanguageId, framework: Option<FrameworkId>) {
    let signals = analyze_project(&fixture_path(fixture)).unwrap();

    assert_eq!(signals.language, language);
    assert_eq!(signals.primary_framework().map(|f| f.id.clone()), framework);
}

#[parameterized(
    go_gin = { "single-language/go-gin", Some("main.go") },
    node_express = { "single-language/node-express", Some("server.js") },
    typescript_nest = { "single-language/typescript-nest", Some("main.ts") },
    python_flask = { "single-language/python-flask", Some("app.py") },
    rust_axum = { "single-language/rust-axum", Some("src/main.rs") },
    ruby_sinatra = { "single-language/ruby-sinatra", Some("app.rb") },
    php_laravel = { "single-language/php-laravel", Some("public/index.php") },
    cpp_cmake = { "single-language/cpp-cmake", Some("src/main.cpp") },
    empty = { "edge-cases/empty", None },
)]
fn test_entry_point(fixture: &str, expected: Option<&str>) {
    let signals = analyze_project(&fixture_path(fixture)).unwrap();
    assert_eq!(signals.entry_point.as_deref(), expected);
}

#[test]
fn test_go_fixture_container_and_structure() {
    let signals = analyze_project(&fixture_path("single-language/go-gin")).unwrap();

    assert!(signals.containerized);
    assert_eq!(signals.container_services, vec!["app", "db"]);
    assert!(signals.has_test_dir);
    assert!(!signals.has_vendor_dir);
    assert!(signals.uses_package_manifest);
    assert!(signals.dependency_manifests.contains(&"go.mod".to_string()));
    assert!(signals.config_files.contains(&"Dockerfile".to_string()));
    assert!(signals
        .frameworks
        .iter()
        .any(|f| f.id == FrameworkId::Gorm));
}

#[test]
fn test_test_directory_detected() {
    let signals = analyze_project(&fixture_path("single-language/node-express")).unwrap();
    assert!(signals.has_test_dir);
    assert!(!signals.containerized);
}

#[test]
fn test_project_without_tests() {
    let signals = analyze_project(&fixture_path("single-language/python-flask")).unwrap();
    assert!(!signals.has_test_dir);
}

#[test]
fn test_polyglot_prefers_go() {
    let signals = analyze_project(&fixture_path("monorepo/polyglot")).unwrap();

    assert_eq!(signals.language, LanguageId::Go);
    assert_eq!(
        signals.primary_framework().map(|f| f.id.clone()),
        Some(FrameworkId::Echo)
    );
    assert!(signals
        .dependency_manifests
        .contains(&"package.json".to_string()));
}

#[test]
fn test_empty_project_is_unknown() {
    let signals = analyze_project(&fixture_path("edge-cases/empty")).unwrap();

    assert_eq!(signals.language, LanguageId::Unknown);
    assert!(signals.frameworks.is_empty());
    assert!(!signals.containerized);
}

#[test]
fn test_missing_root_is_an_error() {
    let result = analyze_project(&fixture_path("does-not-exist"));
    assert!(result.is_err());
}
