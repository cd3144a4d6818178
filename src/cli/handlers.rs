//! Subcommand handlers. Each returns the process exit code.

use super::commands::{DetectArgs, GenerateArgs};
use super::output::{OutputFormat, OutputFormatter};
use crate::config::MakegenConfig;
use crate::detection::{analyze_project, ProjectSignals};
use crate::makefile::{render, BuildConfig};
use crate::questionnaire::{Prompter, Questionnaire, StdinPrompter};
use crate::storage::MakefileWriter;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_INVALID_CONFIG: i32 = 2;

pub fn handle_detect(args: &DetectArgs) -> i32 {
    let root = match resolve_project_path(args.project_path.as_deref()) {
        Ok(root) => root,
        Err(code) => return code,
    };

    let signals = match analyze_project(&root) {
        Ok(signals) => signals,
        Err(e) => {
            error!("Detection failed: {}", e);
            return EXIT_FAILURE;
        }
    };

    let format: OutputFormat = args.format.into();
    match OutputFormatter::new(format).format(&signals) {
        Ok(output) => {
            println!("{}", output);
            EXIT_SUCCESS
        }
        Err(e) => {
            error!("Failed to format output: {:#}", e);
            EXIT_FAILURE
        }
    }
}

pub fn handle_generate(args: &GenerateArgs, quiet: bool, base_config: MakegenConfig) -> i32 {
    let config = MakegenConfig {
        assume_yes: base_config.assume_yes || args.yes,
        output_file: args.output.clone().unwrap_or(base_config.output_file),
        ..base_config
    };
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return EXIT_INVALID_CONFIG;
    }

    let root = match resolve_project_path(args.project_path.as_deref()) {
        Ok(root) => root,
        Err(code) => return code,
    };

    info!("Analyzing project: {}", root.display());
    let signals = match analyze_project(&root) {
        Ok(signals) => signals,
        Err(e) => {
            error!("Detection failed: {}", e);
            return EXIT_FAILURE;
        }
    };

    let project_name = args
        .project_name
        .clone()
        .or_else(|| directory_name(&root))
        .unwrap_or_else(|| config.default_project_name.clone());

    let interactive = !config.assume_yes && args.config.is_none() && atty::is(atty::Stream::Stdin);
    debug!(interactive, project = %project_name, "Building configuration");

    let build_config = if let Some(path) = &args.config {
        match BuildConfig::from_file(path) {
            Ok(loaded) => with_project_name(loaded, args.project_name.is_some(), &project_name),
            Err(e) => {
                error!("Invalid build configuration: {}", e);
                return EXIT_INVALID_CONFIG;
            }
        }
    } else if interactive {
        if !quiet {
            print_detection_summary(&signals);
        }
        let prompter = StdinPrompter::stdio();
        match Questionnaire::new(&signals, prompter, project_name).ask() {
            Ok(config) => config,
            Err(e) => {
                error!("Questionnaire failed: {:#}", e);
                return EXIT_FAILURE;
            }
        }
    } else {
        BuildConfig::from_signals(&signals, project_name)
    };

    let makefile = match render(&build_config) {
        Ok(text) => text,
        Err(e) => {
            error!("Makefile generation failed: {}", e);
            return EXIT_INVALID_CONFIG;
        }
    };

    if args.stdout {
        print!("{}", makefile);
        return EXIT_SUCCESS;
    }

    let output_path = if config.output_file.is_absolute() {
        config.output_file.clone()
    } else {
        root.join(&config.output_file)
    };

    if interactive {
        println!("\nPreview:\n");
        println!("{}", makefile);
        let mut prompter = StdinPrompter::stdio();
        match prompter.confirm(&format!("Save to {}?", output_path.display()), true) {
            Ok(true) => {}
            Ok(false) => {
                println!("Makefile not saved");
                return EXIT_SUCCESS;
            }
            Err(e) => {
                error!("Failed to read answer: {:#}", e);
                return EXIT_FAILURE;
            }
        }
    }

    if let Err(e) = MakefileWriter::new().write(&output_path, &makefile) {
        error!("{:#}", e);
        return EXIT_FAILURE;
    }

    if !quiet {
        println!("Makefile written to {}", output_path.display());
    }
    EXIT_SUCCESS
}

fn resolve_project_path(path: Option<&Path>) -> Result<PathBuf, i32> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => env::current_dir().map_err(|e| {
            error!("Failed to get current directory: {}", e);
            EXIT_FAILURE
        })?,
    };
    debug!("Project path: {}", path.display());

    if !path.exists() {
        error!("Project path does not exist: {}", path.display());
        return Err(EXIT_FAILURE);
    }
    if !path.is_dir() {
        error!("Project path is not a directory: {}", path.display());
        return Err(EXIT_FAILURE);
    }

    path.canonicalize().map_err(|e| {
        error!("Failed to canonicalize project path: {}", e);
        EXIT_FAILURE
    })
}

/// A config file keeps its own project name unless `--project-name` was
/// given; a blank one takes the resolved name like detected defaults do.
fn with_project_name(mut config: BuildConfig, explicit: bool, resolved: &str) -> BuildConfig {
    if explicit || config.project_name.trim().is_empty() {
        config.project_name = resolved.to_string();
    }
    config
}

fn directory_name(root: &Path) -> Option<String> {
    root.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .filter(|name| !name.is_empty())
}

fn print_detection_summary(signals: &ProjectSignals) {
    println!("Makefile Generator");
    println!("==================\n");
    println!("\u{2713} Language: {}", signals.language);
    println!("\u{2713} Frameworks found: {}", signals.frameworks.len());
    println!("\u{2713} Docker detected: {}", signals.containerized);
    if signals.containerized && !signals.container_services.is_empty() {
        println!("  Services: {}", signals.container_services.join(", "));
    }
    println!();
}
