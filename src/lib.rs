//! goreplace - point a go.mod dependency at its local checkout
//!
//! This crate provides the library behind the `goreplace` command: go.mod
//! parsing, match filtering, local checkout resolution, and the atomic
//! append of a `replace` directive.

pub mod core;
pub mod ops;
pub mod resolver;
pub mod util;

pub use crate::core::{dependency::DependencyRecord, manifest::ParsedManifest};

pub use ops::{replace_dependency, ReplaceOptions, ReplaceOutcome};
pub use resolver::LocalPathResolver;
pub use util::{Config, ReplaceError};
