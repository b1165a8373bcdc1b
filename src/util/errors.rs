//! Error types for goreplace operations.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error raised while locating, resolving or writing a replace directive.
///
/// Every variant is terminal for the current invocation. Zero matches and an
/// operator cancellation are not errors; see [`crate::ops::ReplaceOutcome`].
#[derive(Debug, Error, Diagnostic)]
pub enum ReplaceError {
    #[error("missing required argument <partial-package-name>")]
    #[diagnostic(help("Usage: goreplace <partial-package-name>"))]
    MissingArgument,

    #[error("input too long (max {max} characters)")]
    InputTooLong { max: usize },

    #[error("error reading {}: {source}", .path.display())]
    #[diagnostic(help("Run goreplace from a directory containing go.mod, or pass --manifest"))]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid selection `{input}`")]
    #[diagnostic(help("Enter one of the listed numbers"))]
    InvalidSelection { input: String },

    #[error("failed to read input: {0}")]
    PromptRead(#[source] io::Error),

    #[error("local copy not found: tried {} and {}", .tried.display(), .fallback.display())]
    #[diagnostic(help("Check out the module under $GOPATH/src, or pass --gopath"))]
    LocalPathNotFound { tried: PathBuf, fallback: PathBuf },

    #[error("failed to update {}: {source}", .path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Convenience alias for results carrying a [`ReplaceError`].
pub type ReplaceResult<T> = Result<T, ReplaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_both_candidates() {
        let err = ReplaceError::LocalPathNotFound {
            tried: PathBuf::from("/go/src/github.com/foo/proto/v2"),
            fallback: PathBuf::from("/go/src/github.com/foo/proto"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/go/src/github.com/foo/proto/v2"));
        assert!(msg.ends_with("/go/src/github.com/foo/proto"));
    }

    #[test]
    fn test_write_error_appends_cause() {
        let err = ReplaceError::ManifestWrite {
            path: PathBuf::from("go.mod"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(err.to_string(), "failed to update go.mod: permission denied");
    }

    #[test]
    fn test_help_text_present_for_selection() {
        let err = ReplaceError::InvalidSelection {
            input: "3".to_string(),
        };
        assert!(err.help().is_some());
        assert_eq!(err.to_string(), "invalid selection `3`");
    }
}
