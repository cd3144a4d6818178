//! Strongly-typed identifiers for languages and frameworks.
//!
//! Every ID enum carries a `Custom(String)` variant so that values read from a
//! build configuration file never fail to parse just because makegen does not
//! know them yet.

#[macro_use]
pub mod id_enum_macro;
pub mod framework_id;
pub mod language_id;

pub use framework_id::{Framework, FrameworkCategory, FrameworkId};
pub use language_id::LanguageId;
