use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub value: String,
}

impl Variable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub dependencies: Vec<String>,
    pub commands: Vec<String>,
    pub phony: bool,
    pub description: Option<String>,
}

impl Target {
    pub fn phony(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: Vec::new(),
            commands: Vec::new(),
            phony: true,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_dependency(mut self, dependency: impl Into<String>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.commands.push(command.into());
        self
    }
}

/// A fully composed Makefile, ready to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MakefileDocument {
    pub variables: Vec<Variable>,
    pub targets: Vec<Target>,
}

impl MakefileDocument {
    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name == name)
    }

    pub fn target_names(&self) -> Vec<&str> {
        self.targets.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn phony_targets(&self) -> Vec<&str> {
        self.targets
            .iter()
            .filter(|t| t.phony)
            .map(|t| t.name.as_str())
            .collect()
    }
}

const HEADER: &str = "# Generated by makegen. Edit freely; rerunning makegen overwrites this file.";

impl fmt::Display for MakefileDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", HEADER)?;
        writeln!(f)?;

        if !self.variables.is_empty() {
            for variable in &self.variables {
                writeln!(f, "{} = {}", variable.name, variable.value)?;
            }
            writeln!(f)?;
        }

        let phony = self.phony_targets();
        if phony.is_empty() {
            writeln!(f, ".PHONY:")?;
        } else {
            writeln!(f, ".PHONY: {}", phony.join(" "))?;
        }

        for target in &self.targets {
            writeln!(f)?;
            if let Some(description) = &target.description {
                writeln!(f, "# {}", description)?;
            }
            if target.dependencies.is_empty() {
                writeln!(f, "{}:", target.name)?;
            } else {
                writeln!(f, "{}: {}", target.name, target.dependencies.join(" "))?;
            }
            for command in &target.commands {
                writeln!(f, "\t{}", command)?;
            }
        }

        Ok(())
    }
}
