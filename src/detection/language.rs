//! Marker-file language classification
//!
//! Markers are evaluated in a fixed order and the first match wins. A
//! polyglot repository with both `go.mod` and `package.json` is classified as
//! Go, whatever order the filesystem lists them in.

use crate::fs::FileSystem;
use crate::stack::LanguageId;
use std::path::Path;
use tracing::debug;

struct LanguageMarker {
    files: &'static [&'static str],
    language: LanguageId,
}

const LANGUAGE_MARKERS: &[LanguageMarker] = &[
    LanguageMarker {
        files: &["go.mod"],
        language: LanguageId::Go,
    },
    LanguageMarker {
        files: &["requirements.txt", "setup.py", "pyproject.toml"],
        language: LanguageId::Python,
    },
    LanguageMarker {
        files: &["package.json"],
        language: LanguageId::JavaScript,
    },
    LanguageMarker {
        files: &["Cargo.toml"],
        language: LanguageId::Rust,
    },
    LanguageMarker {
        files: &["pom.xml"],
        language: LanguageId::Java,
    },
    LanguageMarker {
        files: &["build.gradle", "build.gradle.kts"],
        language: LanguageId::Java,
    },
    LanguageMarker {
        files: &["Gemfile"],
        language: LanguageId::Ruby,
    },
    LanguageMarker {
        files: &["composer.json"],
        language: LanguageId::Php,
    },
    LanguageMarker {
        files: &["CMakeLists.txt", "Makefile"],
        language: LanguageId::Cpp,
    },
];

/// Strict-typing config that turns a JavaScript project into TypeScript.
const TYPESCRIPT_CONFIG: &str = "tsconfig.json";

pub fn classify(fs: &dyn FileSystem, root: &Path) -> LanguageId {
    for marker in LANGUAGE_MARKERS {
        if let Some(file) = marker.files.iter().find(|f| fs.exists(&root.join(f))) {
            let language = refine(fs, root, marker.language);
            debug!(marker = %file, language = %language, "Language marker matched");
            return language;
        }
    }

    debug!("No language marker found");
    LanguageId::Unknown
}

fn refine(fs: &dyn FileSystem, root: &Path, language: LanguageId) -> LanguageId {
    match language {
        LanguageId::JavaScript if fs.exists(&root.join(TYPESCRIPT_CONFIG)) => {
            LanguageId::TypeScript
        }
        other => other,
    }
}
