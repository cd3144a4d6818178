//! Interactive questionnaire turning detected signals into a build
//! configuration

use crate::detection::ProjectSignals;
use crate::makefile::{BuildConfig, CustomTarget, TargetKind};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use tracing::debug;

/// Line-oriented question and answer channel.
pub trait Prompter {
    /// Prints informational text.
    fn say(&mut self, message: &str) -> Result<()>;

    /// Asks a free-form question. Returns the trimmed answer, or `default`
    /// (or an empty string) when the answer is blank.
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String>;

    /// Asks a yes/no question; a blank answer picks `default_yes`.
    fn confirm(&mut self, question: &str, default_yes: bool) -> Result<bool>;
}

/// [`Prompter`] over any reader and writer. End of input counts as a blank
/// answer, so a closed stdin falls through to the defaults.
pub struct StdinPrompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StdinPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .context("Failed to read answer")?;
        Ok(line.trim().to_string())
    }
}

impl StdinPrompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for StdinPrompter<R, W> {
    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }

    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        match default {
            Some(default) if !default.is_empty() => {
                write!(self.writer, "{} [{}]: ", question, default)?
            }
            _ => write!(self.writer, "{}: ", question)?,
        }
        self.writer.flush()?;

        let answer = self.read_answer()?;
        if answer.is_empty() {
            Ok(default.unwrap_or_default().to_string())
        } else {
            Ok(answer)
        }
    }

    fn confirm(&mut self, question: &str, default_yes: bool) -> Result<bool> {
        let suffix = if default_yes { "[Y/n]" } else { "[y/N]" };
        write!(self.writer, "{} {}: ", question, suffix)?;
        self.writer.flush()?;

        let answer = self.read_answer()?.to_lowercase();
        if answer.is_empty() {
            return Ok(default_yes);
        }
        Ok(answer == "y" || answer == "yes")
    }
}

/// Walks the user through the build configuration, one phase at a time.
pub struct Questionnaire<'a, P: Prompter> {
    signals: &'a ProjectSignals,
    prompter: P,
    default_project_name: String,
}

impl<'a, P: Prompter> Questionnaire<'a, P> {
    pub fn new(signals: &'a ProjectSignals, prompter: P, default_project_name: impl Into<String>) -> Self {
        Self {
            signals,
            prompter,
            default_project_name: default_project_name.into(),
        }
    }

    pub fn ask(mut self) -> Result<BuildConfig> {
        let mut config = BuildConfig::from_signals(self.signals, self.default_project_name.clone());
        config.targets.clear();

        self.ask_project_name(&mut config)?;
        self.ask_framework(&mut config)?;
        self.ask_container(&mut config)?;
        self.ask_build_targets(&mut config)?;
        self.ask_test_setup(&mut config)?;
        self.ask_quality(&mut config)?;
        self.ask_pipeline(&mut config)?;
        self.ask_custom_targets(&mut config)?;

        debug!(
            project = %config.project_name,
            targets = config.targets.len(),
            custom_targets = config.custom_targets.len(),
            "Questionnaire complete"
        );
        Ok(config)
    }

    fn ask_project_name(&mut self, config: &mut BuildConfig) -> Result<()> {
        let name = self
            .prompter
            .ask("Project name", Some(self.default_project_name.as_str()))?;
        config.project_name = name;
        Ok(())
    }

    fn ask_framework(&mut self, config: &mut BuildConfig) -> Result<()> {
        let frameworks = &self.signals.frameworks;
        if frameworks.is_empty() {
            return Ok(());
        }

        self.prompter.say("\nDetected frameworks:")?;
        for (i, framework) in frameworks.iter().enumerate() {
            self.prompter
                .say(&format!("  {}. {} ({})", i + 1, framework.name(), framework.category))?;
        }

        let answer = self.prompter.ask("Framework to use (0 for none)", Some("1"))?;
        config.selected_framework = match answer.parse::<usize>() {
            Ok(0) => None,
            Ok(n) if n <= frameworks.len() => Some(frameworks[n - 1].id.clone()),
            _ => {
                self.prompter
                    .say(&format!("Invalid choice '{}', using {}", answer, frameworks[0].name()))?;
                Some(frameworks[0].id.clone())
            }
        };
        Ok(())
    }

    fn ask_container(&mut self, config: &mut BuildConfig) -> Result<()> {
        let services = self.signals.container_services.clone();

        let enabled = if self.signals.containerized {
            self.prompter.say("\nDocker setup detected.")?;
            if !services.is_empty() {
                self.prompter.say(&format!("  Services: {}", services.join(", ")))?;
            }
            self.prompter.confirm("Add Docker targets?", true)?
        } else {
            self.prompter.confirm("\nAdd Docker support?", false)?
        };

        config.container.enabled = enabled;
        config.container.compose_targets = false;
        if !enabled {
            return Ok(());
        }

        let image = self
            .prompter
            .ask("Docker image name", Some(config.effective_project_name()))?;
        config.container.image = Some(image).filter(|image| !image.is_empty());

        if !services.is_empty() {
            config.container.compose_targets =
                self.prompter.confirm("Add docker compose targets?", true)?;
        }
        Ok(())
    }

    fn ask_build_targets(&mut self, config: &mut BuildConfig) -> Result<()> {
        self.prompter.say("\nBuild configuration")?;
        self.offer(config, TargetKind::Build, "Add 'build' target?", true)?;
        self.offer(config, TargetKind::Clean, "Add 'clean' target?", true)?;
        self.offer(config, TargetKind::Run, "Add 'run' target?", true)?;
        Ok(())
    }

    fn ask_test_setup(&mut self, config: &mut BuildConfig) -> Result<()> {
        self.prompter.say("\nTesting configuration")?;
        if !self.signals.has_test_dir
            && !self
                .prompter
                .confirm("No tests found. Add a test target anyway?", false)?
        {
            return Ok(());
        }

        if self.offer(config, TargetKind::Test, "Add 'test' target?", true)? {
            self.offer(config, TargetKind::Coverage, "Add 'coverage' target?", true)?;
        }
        Ok(())
    }

    fn ask_quality(&mut self, config: &mut BuildConfig) -> Result<()> {
        self.prompter.say("\nCode quality")?;
        self.offer(config, TargetKind::Lint, "Add 'lint' target?", true)?;
        self.offer(config, TargetKind::Format, "Add 'format' target?", true)?;
        Ok(())
    }

    fn ask_pipeline(&mut self, config: &mut BuildConfig) -> Result<()> {
        self.prompter.say("\nCI and deployment")?;
        self.offer(config, TargetKind::Ci, "Add 'ci' target?", false)?;
        self.offer(config, TargetKind::Deploy, "Add 'deploy' target?", false)?;
        Ok(())
    }

    fn ask_custom_targets(&mut self, config: &mut BuildConfig) -> Result<()> {
        while self.prompter.confirm("\nAdd a custom target?", false)? {
            let name = self.prompter.ask("Target name", None)?;
            if name.is_empty() {
                self.prompter.say("A target name is required; skipping.")?;
                continue;
            }

            let dependencies = self
                .prompter
                .ask("Dependencies (space or comma separated)", None)?
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .collect();

            self.prompter.say("Commands (blank line to finish):")?;
            let mut commands = Vec::new();
            loop {
                let command = self.prompter.ask("  >", None)?;
                if command.is_empty() {
                    break;
                }
                commands.push(command);
            }

            let description = self.prompter.ask("Description", None)?;
            config.custom_targets.push(CustomTarget {
                name,
                dependencies,
                commands,
                description: Some(description).filter(|d| !d.is_empty()),
            });
        }
        Ok(())
    }

    fn offer(
        &mut self,
        config: &mut BuildConfig,
        kind: TargetKind,
        question: &str,
        default_yes: bool,
    ) -> Result<bool> {
        let accepted = self.prompter.confirm(question, default_yes)?;
        if accepted {
            config.targets.insert(kind);
        }
        Ok(accepted)
    }
}
