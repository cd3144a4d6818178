use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Project-aware Makefile generator
#[derive(Parser, Debug)]
#[command(
    name = "makegen",
    about = "Generate a Makefile from what your project already looks like",
    version,
    author,
    long_about = "makegen inspects a project directory, detects its language, frameworks, \
                  container setup and layout, asks a few questions and writes a Makefile \
                  with matching build, test, lint and container targets."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Show what makegen detects in a project",
        long_about = "Runs project detection and prints the signals: language, frameworks, \
                      container services, test and build directories, manifests, config \
                      files and entry point.\n\n\
                      Examples:\n  \
                      makegen detect\n  \
                      makegen detect /path/to/project\n  \
                      makegen detect --format json"
    )]
    Detect(DetectArgs),

    #[command(
        about = "Generate a Makefile",
        long_about = "Detects the project, asks configuration questions (or takes the \
                      detected defaults with --yes, or a configuration file with --config), \
                      previews the Makefile and writes it.\n\n\
                      Examples:\n  \
                      makegen generate\n  \
                      makegen generate --yes\n  \
                      makegen generate ./service --config makegen.yaml --stdout"
    )]
    Generate(GenerateArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the project (defaults to current directory)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the project (defaults to current directory)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(
        short = 'c',
        long,
        value_name = "FILE",
        help = "Read the build configuration from a YAML, JSON or TOML file"
    )]
    pub config: Option<PathBuf>,

    #[arg(short = 'y', long, help = "Accept detected defaults without prompting")]
    pub yes: bool,

    #[arg(long, value_name = "NAME", help = "Project name (defaults to the directory name)")]
    pub project_name: Option<String>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Output file, relative to the project (default: Makefile)"
    )]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Print the Makefile to stdout instead of writing it")]
    pub stdout: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
