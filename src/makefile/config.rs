use super::TargetKind;
use crate::config::ConfigError;
use crate::detection::ProjectSignals;
use crate::stack::{FrameworkId, LanguageId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

pub const DEFAULT_PROJECT_NAME: &str = "myproject";

/// User-facing choices that drive Makefile composition.
///
/// Built by the questionnaire or loaded from a YAML, JSON or TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub language: LanguageId,
    #[serde(default, alias = "framework", skip_serializing_if = "Option::is_none")]
    pub selected_framework: Option<FrameworkId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<String>,
    #[serde(default)]
    pub container: ContainerConfig,
    #[serde(default)]
    pub targets: BTreeSet<TargetKind>,
    #[serde(default)]
    pub custom_targets: Vec<CustomTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_tool: Option<BuildTool>,
}

/// JVM build tool; Java recipes default to Maven when unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    Maven,
    Gradle,
}

impl BuildTool {
    /// `pom.xml` wins when both are present, matching language detection.
    fn detect(signals: &ProjectSignals) -> Option<Self> {
        if signals.language != LanguageId::Java {
            return None;
        }
        if signals.dependency_manifests.iter().any(|m| m == "pom.xml") {
            Some(BuildTool::Maven)
        } else {
            Some(BuildTool::Gradle)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub compose_targets: bool,
}

/// A target written by the user, emitted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTarget {
    pub name: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub commands: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BuildConfig {
    /// Defaults derived from detection, used when no question is asked.
    pub fn from_signals(signals: &ProjectSignals, project_name: impl Into<String>) -> Self {
        let mut targets: BTreeSet<TargetKind> = [
            TargetKind::Build,
            TargetKind::Clean,
            TargetKind::Run,
            TargetKind::Lint,
            TargetKind::Format,
        ]
        .into_iter()
        .collect();

        if signals.has_test_dir {
            targets.insert(TargetKind::Test);
            targets.insert(TargetKind::Coverage);
        }

        Self {
            project_name: project_name.into(),
            language: signals.language,
            selected_framework: signals.primary_framework().map(|f| f.id.clone()),
            entry_point: signals.entry_point.clone(),
            container: ContainerConfig {
                enabled: signals.containerized,
                image: None,
                services: signals.container_services.clone(),
                compose_targets: signals.containerized && !signals.container_services.is_empty(),
            },
            targets,
            custom_targets: Vec::new(),
            build_tool: BuildTool::detect(signals),
        }
    }

    /// Loads a configuration file, picking the format from its extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        let parse_error = |error: String| ConfigError::ParseError {
            field: path.display().to_string(),
            error,
        };

        match extension.as_deref() {
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))
            }
            Some("json") => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
            Some("toml") => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Project name with the documented fallback for an empty value.
    pub fn effective_project_name(&self) -> &str {
        let name = self.project_name.trim();
        if name.is_empty() {
            DEFAULT_PROJECT_NAME
        } else {
            name
        }
    }

    /// Port of the selected framework, if it has one.
    pub fn port(&self) -> Option<u16> {
        self.selected_framework
            .as_ref()
            .and_then(|framework| framework.profile().1)
    }

    /// Image name for container targets.
    pub fn docker_image(&self) -> &str {
        self.container
            .image
            .as_deref()
            .filter(|image| !image.trim().is_empty())
            .unwrap_or_else(|| self.effective_project_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{ContainerSignals, StructureSignals};
    use crate::stack::{Framework, FrameworkId};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn signals() -> ProjectSignals {
        ProjectSignals::from_parts(
            PathBuf::from("/work/api"),
            LanguageId::Python,
            vec![
                Framework::new(FrameworkId::Flask),
                Framework::new(FrameworkId::SqlAlchemy),
            ],
            ContainerSignals {
                containerized: true,
                services: vec!["web".to_string(), "db".to_string()],
            },
            StructureSignals {
                has_test_dir: true,
                entry_point: Some("app.py".to_string()),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_defaults_from_signals() {
        let config = BuildConfig::from_signals(&signals(), "api");

        assert_eq!(config.project_name, "api");
        assert_eq!(config.language, LanguageId::Python);
        assert_eq!(config.selected_framework, Some(FrameworkId::Flask));
        assert_eq!(config.entry_point.as_deref(), Some("app.py"));
        assert!(config.container.enabled);
        assert!(config.container.compose_targets);
        assert_eq!(config.container.services, vec!["web", "db"]);
        assert!(config.targets.contains(&TargetKind::Test));
        assert!(config.targets.contains(&TargetKind::Coverage));
        assert!(!config.targets.contains(&TargetKind::Ci));
        assert_eq!(config.port(), Some(5000));
    }

    #[test]
    fn test_java_build_tool_from_manifests() {
        let mut signals = signals();
        assert_eq!(BuildConfig::from_signals(&signals, "api").build_tool, None);

        signals.language = LanguageId::Java;
        signals.dependency_manifests = vec!["build.gradle".to_string()];
        assert_eq!(
            BuildConfig::from_signals(&signals, "api").build_tool,
            Some(BuildTool::Gradle)
        );

        // Kotlin DSL builds are not in the manifest list; no pom.xml means Gradle.
        signals.dependency_manifests.clear();
        assert_eq!(
            BuildConfig::from_signals(&signals, "api").build_tool,
            Some(BuildTool::Gradle)
        );

        signals.dependency_manifests = vec!["pom.xml".to_string(), "build.gradle".to_string()];
        assert_eq!(
            BuildConfig::from_signals(&signals, "api").build_tool,
            Some(BuildTool::Maven)
        );
    }

    #[test]
    fn test_defaults_without_tests_or_compose() {
        let mut signals = signals();
        signals.has_test_dir = false;
        signals.container_services.clear();

        let config = BuildConfig::from_signals(&signals, "api");
        assert!(!config.targets.contains(&TargetKind::Test));
        assert!(config.container.enabled);
        assert!(!config.container.compose_targets);
    }

    #[test]
    fn test_effective_project_name_fallback() {
        let config = BuildConfig::default();
        assert_eq!(config.effective_project_name(), "myproject");
        assert_eq!(config.docker_image(), "myproject");
    }

    #[test]
    fn test_load_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("makegen.yaml");
        std::fs::write(
            &path,
            "project_name: shop\nlanguage: go\nframework: gin\ntargets: [build, test]\ncontainer:\n  enabled: true\n  image: shop:dev\ncustom_targets:\n  - name: seed\n    dependencies: [build]\n    commands: [\"./bin/shop seed\"]\n",
        )
        .unwrap();

        let config = BuildConfig::from_file(&path).unwrap();
        assert_eq!(config.project_name, "shop");
        assert_eq!(config.language, LanguageId::Go);
        assert_eq!(config.selected_framework, Some(FrameworkId::Gin));
        assert_eq!(config.docker_image(), "shop:dev");
        assert_eq!(config.custom_targets[0].dependencies, vec!["build"]);
    }

    #[test]
    fn test_load_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("makegen.toml");
        std::fs::write(
            &path,
            "project_name = \"cli\"\nlanguage = \"rust\"\ntargets = [\"build\", \"lint\"]\n",
        )
        .unwrap();

        let config = BuildConfig::from_file(&path).unwrap();
        assert_eq!(config.language, LanguageId::Rust);
        assert_eq!(config.targets.len(), 2);
    }

    #[test]
    fn test_load_json_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("makegen.json");
        let original = BuildConfig::from_signals(&signals(), "api");
        std::fs::write(&path, serde_json::to_string_pretty(&original).unwrap()).unwrap();

        assert_eq!(BuildConfig::from_file(&path).unwrap(), original);
    }

    #[test]
    fn test_unsupported_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("makegen.ini");
        std::fs::write(&path, "").unwrap();
        assert!(matches!(
            BuildConfig::from_file(&path),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_malformed_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("makegen.yml");
        std::fs::write(&path, "targets: [build\n").unwrap();
        assert!(matches!(
            BuildConfig::from_file(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }
}
