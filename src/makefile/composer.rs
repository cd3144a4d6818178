use super::commands::{recipe, Recipe, RecipeContext};
use super::config::{BuildConfig, BuildTool};
use super::document::{MakefileDocument, Target, Variable};
use super::TargetKind;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

/// Largest edit distance at which an unknown dependency still gets a
/// suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    #[error("Unknown target kind '{0}'. Valid kinds: build, clean, run, test, coverage, lint, format, ci, deploy")]
    UnknownTargetKind(String),

    #[error("Target '{target}' depends on unknown target '{dependency}'{}", suggestion_suffix(.suggestion))]
    UnknownDependency {
        target: String,
        dependency: String,
        suggestion: Option<String>,
    },

    #[error("Custom target '{0}' is defined more than once")]
    DuplicateTarget(String),

    #[error("Invalid target name '{0}'")]
    InvalidTargetName(String),

    #[error("Dependency cycle: {}", .0.join(" -> "))]
    DependencyCycle(Vec<String>),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{}'?)", s))
        .unwrap_or_default()
}

fn target_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.\-]*$").expect("valid regex"))
}

/// Renders a build configuration to Makefile text.
pub fn render(config: &BuildConfig) -> Result<String, CompositionError> {
    Ok(compose(config)?.to_string())
}

/// Assembles the Makefile document for `config`.
///
/// Pure: the output depends only on `config`, so composing the same value
/// twice gives identical documents.
pub fn compose(config: &BuildConfig) -> Result<MakefileDocument, CompositionError> {
    for kind in &config.targets {
        if let TargetKind::Custom(name) = kind {
            return Err(CompositionError::UnknownTargetKind(name.clone()));
        }
    }

    let mut seen_custom = HashSet::new();
    for custom in &config.custom_targets {
        validate_name(&custom.name)?;
        if !seen_custom.insert(custom.name.as_str()) {
            return Err(CompositionError::DuplicateTarget(custom.name.clone()));
        }
    }

    let mut targets = generated_targets(config);
    targets.extend(container_targets(config)?);
    targets.retain(|target| !seen_custom.contains(target.name.as_str()));

    targets.extend(config.custom_targets.iter().map(|custom| Target {
        name: custom.name.clone(),
        dependencies: custom.dependencies.clone(),
        commands: custom.commands.clone(),
        phony: true,
        description: custom.description.clone(),
    }));

    let document = MakefileDocument {
        variables: variables(config),
        targets,
    };

    validate_dependencies(&document)?;
    detect_cycles(&document)?;

    debug!(
        variables = document.variables.len(),
        targets = document.targets.len(),
        "Makefile composed"
    );
    Ok(document)
}

fn validate_name(name: &str) -> Result<(), CompositionError> {
    if target_name_regex().is_match(name) {
        Ok(())
    } else {
        Err(CompositionError::InvalidTargetName(name.to_string()))
    }
}

fn variables(config: &BuildConfig) -> Vec<Variable> {
    let mut variables = vec![Variable::new("PROJECT_NAME", config.effective_project_name())];

    if let Some(entry_point) = config.entry_point.as_deref().filter(|e| !e.is_empty()) {
        variables.push(Variable::new("ENTRY_POINT", entry_point));
    }
    if let Some(port) = config.port() {
        variables.push(Variable::new("PORT", port.to_string()));
    }
    if config.container.enabled {
        variables.push(Variable::new("DOCKER_IMAGE", config.docker_image()));
        if config.container.compose_targets {
            variables.push(Variable::new("COMPOSE", "docker compose"));
        }
    }

    variables
}

fn generated_targets(config: &BuildConfig) -> Vec<Target> {
    let requested = |kind: &TargetKind| config.targets.contains(kind);
    let ctx = RecipeContext {
        framework: config.selected_framework.as_ref(),
        has_entry_point: config.entry_point.as_deref().map_or(false, |e| !e.is_empty()),
        gradle: config.build_tool == Some(BuildTool::Gradle),
    };

    let mut targets = Vec::new();
    for kind in TargetKind::all_variants().iter().filter(|k| requested(*k)) {
        let target = match kind {
            TargetKind::Ci => {
                let mut ci = Target::phony("ci")
                    .with_description("Run the checks a CI pipeline runs")
                    .with_command("@echo \"CI checks passed\"");
                for dependency in [TargetKind::Lint, TargetKind::Test, TargetKind::Build] {
                    if requested(&dependency) {
                        ci = ci.with_dependency(dependency.target_name());
                    }
                }
                ci
            }
            TargetKind::Deploy => deploy_target(config, requested(&TargetKind::Build)),
            _ => {
                let Recipe {
                    description,
                    commands,
                } = recipe(config.language, kind, ctx)
                    .unwrap_or_else(|| Recipe::placeholder(config.language, kind));

                let mut target = Target::phony(kind.target_name()).with_description(description);
                target.commands = commands;
                if *kind == TargetKind::Run
                    && config.language.is_compiled()
                    && requested(&TargetKind::Build)
                {
                    target = target.with_dependency("build");
                }
                target
            }
        };
        targets.push(target);
    }
    targets
}

fn deploy_target(config: &BuildConfig, build_requested: bool) -> Target {
    let mut deploy = Target::phony("deploy").with_description("Deploy the application");
    if build_requested {
        deploy = deploy.with_dependency("build");
    }
    if config.container.enabled {
        deploy
            .with_dependency("docker-build")
            .with_command("docker push $(DOCKER_IMAGE)")
    } else {
        deploy.with_command("@echo \"Add deployment steps for $(PROJECT_NAME) here.\"")
    }
}

fn container_targets(config: &BuildConfig) -> Result<Vec<Target>, CompositionError> {
    if !config.container.enabled {
        return Ok(Vec::new());
    }

    let run_command = if config.port().is_some() {
        "docker run --rm -p $(PORT):$(PORT) $(DOCKER_IMAGE)"
    } else {
        "docker run --rm $(DOCKER_IMAGE)"
    };

    let mut targets = vec![
        Target::phony("docker-build")
            .with_description("Build the Docker image")
            .with_command("docker build -t $(DOCKER_IMAGE) ."),
        Target::phony("docker-run")
            .with_description("Run the Docker image")
            .with_dependency("docker-build")
            .with_command(run_command),
    ];

    if config.container.compose_targets {
        targets.push(
            Target::phony("compose-up")
                .with_description("Start all compose services")
                .with_command("$(COMPOSE) up -d"),
        );
        targets.push(
            Target::phony("compose-down")
                .with_description("Stop all compose services")
                .with_command("$(COMPOSE) down"),
        );

        let mut seen = HashSet::new();
        for service in &config.container.services {
            if !seen.insert(service.as_str()) {
                continue;
            }
            let name = format!("compose-up-{}", service);
            validate_name(&name)?;
            targets.push(
                Target::phony(name)
                    .with_description(format!("Start the {} service", service))
                    .with_command(format!("$(COMPOSE) up -d {}", service)),
            );
        }
    }

    Ok(targets)
}

fn validate_dependencies(document: &MakefileDocument) -> Result<(), CompositionError> {
    let names = document.target_names();
    for target in &document.targets {
        for dependency in &target.dependencies {
            if !names.contains(&dependency.as_str()) {
                return Err(CompositionError::UnknownDependency {
                    target: target.name.clone(),
                    dependency: dependency.clone(),
                    suggestion: closest(dependency, &names),
                });
            }
        }
    }
    Ok(())
}

fn closest(name: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|candidate| (strsim::levenshtein(name, candidate), *candidate))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

fn detect_cycles(document: &MakefileDocument) -> Result<(), CompositionError> {
    let edges: HashMap<&str, &[String]> = document
        .targets
        .iter()
        .map(|t| (t.name.as_str(), t.dependencies.as_slice()))
        .collect();

    let mut state: HashMap<&str, Visit> = HashMap::new();
    let mut path: Vec<&str> = Vec::new();
    for target in &document.targets {
        visit(target.name.as_str(), &edges, &mut state, &mut path)?;
    }
    Ok(())
}

fn visit<'a>(
    name: &'a str,
    edges: &HashMap<&'a str, &'a [String]>,
    state: &mut HashMap<&'a str, Visit>,
    path: &mut Vec<&'a str>,
) -> Result<(), CompositionError> {
    match state.get(name) {
        Some(Visit::Done) => return Ok(()),
        Some(Visit::InProgress) => {
            let start = path.iter().position(|n| *n == name).unwrap_or(0);
            let mut cycle: Vec<String> = path[start..].iter().map(|n| n.to_string()).collect();
            cycle.push(name.to_string());
            return Err(CompositionError::DependencyCycle(cycle));
        }
        None => {}
    }

    state.insert(name, Visit::InProgress);
    path.push(name);
    for dependency in edges.get(name).copied().unwrap_or_default() {
        visit(dependency.as_str(), edges, state, path)?;
    }
    path.pop();
    state.insert(name, Visit::Done);
    Ok(())
}
