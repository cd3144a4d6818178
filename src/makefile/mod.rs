//! Makefile composition
//!
//! Turns a [`BuildConfig`] into a [`MakefileDocument`] and renders it. No
//! filesystem access happens here; writing the result is the job of
//! [`crate::storage::MakefileWriter`].

mod commands;
mod composer;
mod config;
mod document;
mod target_kind;

pub use commands::{recipe, Recipe, RecipeContext};
pub use composer::{compose, render, CompositionError};
pub use config::{BuildConfig, BuildTool, ContainerConfig, CustomTarget, DEFAULT_PROJECT_NAME};
pub use document::{MakefileDocument, Target, Variable};
pub use target_kind::TargetKind;
