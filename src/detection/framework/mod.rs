//! Framework classification
//!
//! Each language with a framework table has one [`FrameworkClassifier`].
//! Detection never fails: a missing or malformed manifest simply yields no
//! frameworks.

mod go;
mod java;
mod javascript;
mod php;
mod python;
mod ruby;
mod rust;

pub use go::GoClassifier;
pub use java::JavaClassifier;
pub use javascript::JavaScriptClassifier;
pub use php::PhpClassifier;
pub use python::PythonClassifier;
pub use ruby::RubyClassifier;
pub use rust::RustClassifier;

use crate::fs::FileSystem;
use crate::stack::{Framework, FrameworkId, LanguageId};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// Language-specific framework detection.
pub trait FrameworkClassifier: Send + Sync {
    /// Manifests consulted, in the order they are read.
    fn manifests(&self) -> &'static [&'static str];

    fn classify(&self, fs: &dyn FileSystem, root: &Path) -> Vec<Framework>;
}

/// Library identifier searched for in a manifest, mapped to the framework it
/// reveals.
pub(crate) struct Needle {
    pub pattern: &'static str,
    pub framework: FrameworkId,
}

pub(crate) const fn needle(pattern: &'static str, framework: FrameworkId) -> Needle {
    Needle { pattern, framework }
}

/// Returns the classifier for `language`, or `None` when the language has no
/// framework table.
pub fn classifier_for(language: LanguageId) -> Option<&'static dyn FrameworkClassifier> {
    match language {
        LanguageId::Go => Some(&GoClassifier),
        LanguageId::JavaScript | LanguageId::TypeScript => Some(&JavaScriptClassifier),
        LanguageId::Python => Some(&PythonClassifier),
        LanguageId::Rust => Some(&RustClassifier),
        LanguageId::Java => Some(&JavaClassifier),
        LanguageId::Ruby => Some(&RubyClassifier),
        LanguageId::Php => Some(&PhpClassifier),
        LanguageId::Cpp | LanguageId::Unknown => None,
    }
}

pub fn classify(fs: &dyn FileSystem, root: &Path, language: LanguageId) -> Vec<Framework> {
    let Some(classifier) = classifier_for(language) else {
        debug!(language = %language, "No framework table for language");
        return Vec::new();
    };

    let frameworks = classifier.classify(fs, root);
    debug!(
        language = %language,
        frameworks = ?frameworks.iter().map(|f| f.name()).collect::<Vec<_>>(),
        "Framework classification complete"
    );
    frameworks
}

/// Appends `id` unless a framework with the same identity is already present.
pub(crate) fn push_unique(frameworks: &mut Vec<Framework>, id: &FrameworkId) {
    if !frameworks.iter().any(|f| &f.id == id) {
        frameworks.push(Framework::new(id.clone()));
    }
}

/// Reads a manifest, treating any failure as "not present".
pub(crate) fn read_manifest(fs: &dyn FileSystem, path: &Path) -> Option<String> {
    if !fs.is_file(path) {
        return None;
    }
    match fs.read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Manifest unreadable");
            None
        }
    }
}

/// Case-insensitive substring scan of a plain-text manifest.
pub(crate) fn scan_text(content: &str, needles: &[Needle], frameworks: &mut Vec<Framework>) {
    let haystack = content.to_lowercase();
    for needle in needles {
        if haystack.contains(&needle.pattern.to_lowercase()) {
            push_unique(frameworks, &needle.framework);
        }
    }
}

/// Merged dependency names from the given object keys of a JSON manifest.
/// Returns `None` when the manifest is not valid JSON.
pub(crate) fn json_dependency_names(content: &str, sections: &[&str]) -> Option<BTreeSet<String>> {
    let value: serde_json::Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "Malformed JSON manifest");
            return None;
        }
    };

    let names = sections
        .iter()
        .filter_map(|section| value.get(section).and_then(|deps| deps.as_object()))
        .flat_map(|deps| deps.keys().cloned())
        .collect();
    Some(names)
}

/// Exact dependency-name lookup against a merged JSON dependency set.
pub(crate) fn scan_names(
    names: &BTreeSet<String>,
    needles: &[Needle],
    frameworks: &mut Vec<Framework>,
) {
    for needle in needles {
        if names.contains(needle.pattern) {
            push_unique(frameworks, &needle.framework);
        }
    }
}
