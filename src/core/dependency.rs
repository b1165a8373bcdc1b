//! Dependency records and match filtering.
//!
//! A [`DependencyRecord`] is one `require` entry from go.mod. Records are
//! short-lived: they exist only long enough to be filtered against the
//! operator's partial name.

use std::collections::HashSet;

/// A required module and the version it is pinned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    /// Module path, e.g. `github.com/foo/proto/v2`
    pub path: String,

    /// Version as written, e.g. `v2.0.0`
    pub version: String,
}

impl DependencyRecord {
    /// Create a new record.
    pub fn new(path: impl Into<String>, version: impl Into<String>) -> Self {
        DependencyRecord {
            path: path.into(),
            version: version.into(),
        }
    }
}

/// Select the module paths that contain `partial` and are not yet replaced.
///
/// Matching is a plain, case-sensitive substring test. Input order is kept
/// and duplicates in `records` come through as duplicates.
pub fn filter_dependencies(
    records: &[DependencyRecord],
    replaced: &HashSet<String>,
    partial: &str,
) -> Vec<String> {
    records
        .iter()
        .filter(|dep| !replaced.contains(&dep.path))
        .filter(|dep| dep.path.contains(partial))
        .map(|dep| dep.path.clone())
        .collect()
}
