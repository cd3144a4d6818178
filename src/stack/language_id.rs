use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary language of a project.
///
/// Closed on purpose: every detector and command table matches on it
/// exhaustively, so adding a language is a compile error until each one
/// handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Go,
    Python,
    JavaScript,
    TypeScript,
    Rust,
    Java,
    Ruby,
    Php,
    Cpp,
    Unknown,
}

impl Default for LanguageId {
    fn default() -> Self {
        LanguageId::Unknown
    }
}

impl LanguageId {
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::Go => "go",
            LanguageId::Python => "python",
            LanguageId::JavaScript => "javascript",
            LanguageId::TypeScript => "typescript",
            LanguageId::Rust => "rust",
            LanguageId::Java => "java",
            LanguageId::Ruby => "ruby",
            LanguageId::Php => "php",
            LanguageId::Cpp => "cpp",
            LanguageId::Unknown => "unknown",
        }
    }

    pub fn all_variants() -> &'static [LanguageId] {
        &[
            LanguageId::Go,
            LanguageId::Python,
            LanguageId::JavaScript,
            LanguageId::TypeScript,
            LanguageId::Rust,
            LanguageId::Java,
            LanguageId::Ruby,
            LanguageId::Php,
            LanguageId::Cpp,
            LanguageId::Unknown,
        ]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all_variants()
            .iter()
            .copied()
            .find(|lang| lang.name() == name.to_lowercase())
    }

    /// Ecosystems whose projects are driven by a module/package manifest.
    pub fn uses_package_manifest(&self) -> bool {
        matches!(
            self,
            LanguageId::Go | LanguageId::JavaScript | LanguageId::TypeScript
        )
    }

    /// Languages whose `run` step needs a prior `build`.
    pub fn is_compiled(&self) -> bool {
        matches!(
            self,
            LanguageId::Go | LanguageId::Rust | LanguageId::Java | LanguageId::Cpp
        )
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
