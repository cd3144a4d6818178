//! Heuristic project detection
//!
//! Classifies a project from its files: primary language, frameworks,
//! container setup and layout conventions. Everything here is read-only and
//! goes through [`crate::fs::FileSystem`], so tests run against
//! [`crate::fs::MockFileSystem`].

mod analyzer;
pub mod container;
pub mod framework;
pub mod language;
pub mod structure;
mod types;

pub use analyzer::{analyze_project, DetectionError, ProjectAnalyzer};
pub use container::extract_service_names;
pub use framework::{classifier_for, FrameworkClassifier};
pub use types::{ContainerSignals, ProjectSignals, StructureSignals};
