//! Container setup detection and compose service extraction

use super::types::ContainerSignals;
use crate::fs::FileSystem;
use std::path::Path;
use tracing::{debug, warn};

const CONTAINER_MARKERS: &[&str] = &["Dockerfile", "docker-compose.yml", "docker-compose.yaml"];

const COMPOSE_FILES: &[&str] = &["docker-compose.yml", "docker-compose.yaml"];

pub fn classify(fs: &dyn FileSystem, root: &Path) -> ContainerSignals {
    let containerized = CONTAINER_MARKERS
        .iter()
        .any(|marker| fs.exists(&root.join(marker)));

    let mut services: Vec<String> = Vec::new();
    for compose_file in COMPOSE_FILES {
        let path = root.join(compose_file);
        if !fs.exists(&path) {
            continue;
        }

        match fs.read_to_string(&path) {
            Ok(text) => {
                for name in extract_service_names(&text) {
                    if !services.contains(&name) {
                        services.push(name);
                    }
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read compose file");
            }
        }
    }

    debug!(containerized, services = ?services, "Container classification complete");
    ContainerSignals {
        containerized,
        services,
    }
}

/// Extracts top-level service names from a compose file.
///
/// Only two-space indentation is understood: a service line starts with
/// exactly two spaces. With four-space indentation every service line looks
/// nested and is skipped.
pub fn extract_service_names(text: &str) -> Vec<String> {
    let mut services: Vec<String> = Vec::new();
    let mut in_services = false;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if trimmed == "services:" {
            in_services = true;
            continue;
        }

        if !in_services {
            continue;
        }

        if !line.starts_with(char::is_whitespace) {
            in_services = false;
            continue;
        }

        let is_service_line = line
            .strip_prefix("  ")
            .map_or(false, |rest| !rest.starts_with(char::is_whitespace))
            && trimmed.ends_with(':');
        if !is_service_line {
            continue;
        }

        let name = trimmed.trim_end_matches(':').trim();
        if name.is_empty() || name.contains(' ') {
            continue;
        }
        if !services.iter().any(|s| s == name) {
            services.push(name.to_string());
        }
    }

    services
}
