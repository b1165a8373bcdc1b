//! Core data structures for goreplace.
//!
//! - Dependency records and match filtering
//! - go.mod parsing

pub mod dependency;
pub mod manifest;

pub use dependency::{filter_dependencies, DependencyRecord};
pub use manifest::{parse, ParsedManifest, MANIFEST_NAME};
