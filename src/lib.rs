//! makegen - project-aware Makefile generator
//!
//! Inspects a project directory, works out its language, frameworks,
//! container setup and layout, and turns that into a ready-to-edit Makefile.
//!
//! # Pipeline
//!
//! 1. [`detection`] classifies the project into [`ProjectSignals`]
//! 2. [`questionnaire`] (or detected defaults) produces a [`BuildConfig`]
//! 3. [`makefile`] composes and renders the Makefile text
//! 4. [`storage`] writes it next to the project
//!
//! # Example
//!
//! ```no_run
//! use makegen::{analyze_project, render, BuildConfig};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let signals = analyze_project(Path::new("."))?;
//! let config = BuildConfig::from_signals(&signals, "myapp");
//! print!("{}", render(&config)?);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod fs;
pub mod makefile;
pub mod questionnaire;
pub mod stack;
pub mod storage;
pub mod util;

pub use config::{ConfigError, MakegenConfig};
pub use detection::{analyze_project, DetectionError, ProjectAnalyzer, ProjectSignals};
pub use makefile::{compose, render, BuildConfig, CompositionError, MakefileDocument};
pub use stack::{Framework, FrameworkCategory, FrameworkId, LanguageId};
pub use storage::MakefileWriter;
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
