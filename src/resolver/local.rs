//! Resolution of a module path to a local checkout.

use std::path::{Path, PathBuf};

use crate::resolver::version::strip_major_version;
use crate::util::errors::{ReplaceError, ReplaceResult};

/// Finds local checkouts under `<root>/src/<module path>`.
#[derive(Debug, Clone)]
pub struct LocalPathResolver {
    root: PathBuf,
}

impl LocalPathResolver {
    /// Create a resolver probing under `root` (a GOPATH-style directory).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LocalPathResolver { root: root.into() }
    }

    /// Candidate directory for a module path.
    pub fn candidate(&self, module_path: &str) -> PathBuf {
        self.root.join("src").join(module_path)
    }

    /// Resolve `module_path` to an existing local directory.
    ///
    /// The exact path is always tried first. If it is missing and the module
    /// path ends in a major version segment (`/v2`), the path without that
    /// segment is tried next.
    pub fn resolve(&self, module_path: &str) -> ReplaceResult<PathBuf> {
        let exact = self.candidate(module_path);
        tracing::debug!("probing {}", exact.display());
        if exact.exists() {
            return Ok(exact);
        }

        let base = strip_major_version(module_path);
        let fallback = self.candidate(base);
        if base != module_path {
            tracing::debug!("probing {}", fallback.display());
            if fallback.exists() {
                return Ok(fallback);
            }
        }

        Err(ReplaceError::LocalPathNotFound {
            tried: exact,
            fallback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn checkout(root: &Path, module_path: &str) -> PathBuf {
        let dir = root.join("src").join(module_path);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_resolve_exact_path() {
        let tmp = TempDir::new().unwrap();
        let dir = checkout(tmp.path(), "github.com/foo/proto/v2");

        let resolver = LocalPathResolver::new(tmp.path());
        assert_eq!(resolver.resolve("github.com/foo/proto/v2").unwrap(), dir);
    }

    #[test]
    fn test_resolve_falls_back_to_stripped_path() {
        let tmp = TempDir::new().unwrap();
        let dir = checkout(tmp.path(), "github.com/foo/proto");

        let resolver = LocalPathResolver::new(tmp.path());
        assert_eq!(resolver.resolve("github.com/foo/proto/v2").unwrap(), dir);
    }

    #[test]
    fn test_resolve_prefers_versioned_path() {
        let tmp = TempDir::new().unwrap();
        checkout(tmp.path(), "github.com/foo/proto");
        let versioned = checkout(tmp.path(), "github.com/foo/proto/v2");

        let resolver = LocalPathResolver::new(tmp.path());
        assert_eq!(resolver.resolve("github.com/foo/proto/v2").unwrap(), versioned);
    }

    #[test]
    fn test_resolve_not_found_names_both_paths() {
        let tmp = TempDir::new().unwrap();
        let resolver = LocalPathResolver::new(tmp.path());

        let err = resolver.resolve("github.com/foo/proto/v2").unwrap_err();
        match err {
            ReplaceError::LocalPathNotFound { tried, fallback } => {
                assert_eq!(tried, tmp.path().join("src/github.com/foo/proto/v2"));
                assert_eq!(fallback, tmp.path().join("src/github.com/foo/proto"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_unversioned_missing() {
        let tmp = TempDir::new().unwrap();
        let resolver = LocalPathResolver::new(tmp.path());

        let err = resolver.resolve("github.com/foo/bar").unwrap_err();
        assert!(matches!(
            err,
            ReplaceError::LocalPathNotFound { ref tried, ref fallback } if tried == fallback
        ));
    }

    #[test]
    fn test_resolve_accepts_plain_file() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src/example.com")).unwrap();
        fs::write(tmp.path().join("src/example.com/mod"), "").unwrap();

        let resolver = LocalPathResolver::new(tmp.path());
        assert!(resolver.resolve("example.com/mod").is_ok());
    }
}
