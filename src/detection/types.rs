use crate::stack::{Framework, LanguageId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything the detectors learned about a project.
///
/// Produced once by [`super::ProjectAnalyzer::analyze`] and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSignals {
    pub root: PathBuf,
    pub language: LanguageId,
    pub frameworks: Vec<Framework>,
    pub containerized: bool,
    pub container_services: Vec<String>,
    pub has_test_dir: bool,
    pub has_build_dir: bool,
    pub has_vendor_dir: bool,
    pub uses_package_manifest: bool,
    pub dependency_manifests: Vec<String>,
    pub config_files: Vec<String>,
    pub entry_point: Option<String>,
}

impl ProjectSignals {
    pub fn from_parts(
        root: PathBuf,
        language: LanguageId,
        frameworks: Vec<Framework>,
        container: ContainerSignals,
        structure: StructureSignals,
    ) -> Self {
        Self {
            root,
            language,
            frameworks,
            containerized: container.containerized,
            container_services: container.services,
            has_test_dir: structure.has_test_dir,
            has_build_dir: structure.has_build_dir,
            has_vendor_dir: structure.has_vendor_dir,
            uses_package_manifest: language.uses_package_manifest(),
            dependency_manifests: structure.dependency_manifests,
            config_files: structure.config_files,
            entry_point: structure.entry_point,
        }
    }

    /// First detected framework, the default pick for the questionnaire.
    pub fn primary_framework(&self) -> Option<&Framework> {
        self.frameworks.first()
    }
}

/// Result of the container classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerSignals {
    pub containerized: bool,
    pub services: Vec<String>,
}

/// Result of the structure classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureSignals {
    pub has_test_dir: bool,
    pub has_build_dir: bool,
    pub has_vendor_dir: bool,
    pub entry_point: Option<String>,
    pub dependency_manifests: Vec<String>,
    pub config_files: Vec<String>,
}
