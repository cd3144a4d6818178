//! Output formatting for detection results
//!
//! JSON and YAML serialize [`ProjectSignals`] as-is; the human format is a
//! short tree-style summary.

use anyhow::{Context, Result};

use crate::detection::ProjectSignals;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format (human-friendly, version-control friendly)
    Yaml,
    /// Human-readable formatted text
    Human,
}

const RULE: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";

/// Output formatter for detection results
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, signals: &ProjectSignals) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(signals),
            OutputFormat::Yaml => self.format_yaml(signals),
            OutputFormat::Human => Ok(self.format_human(signals)),
        }
    }

    fn format_json(&self, signals: &ProjectSignals) -> Result<String> {
        serde_json::to_string_pretty(signals).context("Failed to serialize project signals to JSON")
    }

    fn format_yaml(&self, signals: &ProjectSignals) -> Result<String> {
        serde_yaml::to_string(signals).context("Failed to serialize project signals to YAML")
    }

    fn format_human(&self, signals: &ProjectSignals) -> String {
        let mut output = String::new();

        output.push_str("\u{2713} Project Detection Result\n");
        output.push_str(RULE);
        output.push_str("\n\n");

        output.push_str(&format!("Project:       {}\n", signals.root.display()));
        output.push_str(&format!("Language:      {}\n", signals.language));
        output.push_str(&format!(
            "Entry Point:   {}\n\n",
            signals.entry_point.as_deref().unwrap_or("(not found)")
        ));

        output.push_str("Frameworks:\n");
        if signals.frameworks.is_empty() {
            output.push_str("\u{2514}\u{2500} (none detected)\n");
        }
        for (i, framework) in signals.frameworks.iter().enumerate() {
            let connector = tree_connector(i, signals.frameworks.len());
            let port = framework
                .default_port
                .map(|p| format!(", port {}", p))
                .unwrap_or_default();
            output.push_str(&format!(
                "{}\u{2500} {} ({}{})\n",
                connector,
                framework.name(),
                framework.category,
                port
            ));
        }
        output.push('\n');

        output.push_str("Containers:\n");
        output.push_str(&format!(
            "\u{251C}\u{2500} Containerized: {}\n",
            yes_no(signals.containerized)
        ));
        if signals.container_services.is_empty() {
            output.push_str("\u{2514}\u{2500} Services:      (none)\n\n");
        } else {
            output.push_str(&format!(
                "\u{2514}\u{2500} Services:      {}\n\n",
                signals.container_services.join(", ")
            ));
        }

        output.push_str("Layout:\n");
        output.push_str(&format!(
            "\u{251C}\u{2500} Tests:            {}\n",
            yes_no(signals.has_test_dir)
        ));
        output.push_str(&format!(
            "\u{251C}\u{2500} Build output:     {}\n",
            yes_no(signals.has_build_dir)
        ));
        output.push_str(&format!(
            "\u{251C}\u{2500} Vendored deps:    {}\n",
            yes_no(signals.has_vendor_dir)
        ));
        output.push_str(&format!(
            "\u{2514}\u{2500} Package manifest: {}\n\n",
            yes_no(signals.uses_package_manifest)
        ));

        output.push_str(&format!(
            "Dependency manifests: {}\n",
            list_or_none(&signals.dependency_manifests)
        ));
        output.push_str(&format!(
            "Config files:         {}\n",
            list_or_none(&signals.config_files)
        ));

        output
    }
}

fn tree_connector(index: usize, len: usize) -> &'static str {
    if index + 1 == len {
        "\u{2514}"
    } else {
        "\u{251C}"
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{ContainerSignals, StructureSignals};
    use crate::stack::{Framework, FrameworkId, LanguageId};
    use std::path::PathBuf;

    fn signals() -> ProjectSignals {
        ProjectSignals::from_parts(
            PathBuf::from("/work/api"),
            LanguageId::Go,
            vec![
                Framework::new(FrameworkId::Gin),
                Framework::new(FrameworkId::Gorm),
            ],
            ContainerSignals {
                containerized: true,
                services: vec!["api".to_string(), "db".to_string()],
            },
            StructureSignals {
                has_test_dir: true,
                entry_point: Some("main.go".to_string()),
                dependency_manifests: vec!["go.mod".to_string(), "go.sum".to_string()],
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_json_format() {
        let output = OutputFormatter::new(OutputFormat::Json)
            .format(&signals())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["language"], "go");
        assert_eq!(value["frameworks"][0]["name"], "gin");
        assert_eq!(value["frameworks"][0]["default_port"], 3000);
        assert_eq!(value["container_services"][1], "db");
        assert_eq!(value["uses_package_manifest"], true);
    }

    #[test]
    fn test_yaml_round_trip() {
        let output = OutputFormatter::new(OutputFormat::Yaml)
            .format(&signals())
            .unwrap();
        let parsed: ProjectSignals = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed, signals());
    }

    #[test]
    fn test_human_format() {
        let output = OutputFormatter::new(OutputFormat::Human)
            .format(&signals())
            .unwrap();

        assert!(output.contains("Language:      go"));
        assert!(output.contains("Gin (web, port 3000)"));
        assert!(output.contains("GORM (orm)"));
        assert!(output.contains("Services:      api, db"));
        assert!(output.contains("Dependency manifests: go.mod, go.sum"));
        assert!(output.contains("Config files:         (none)"));
    }
}
