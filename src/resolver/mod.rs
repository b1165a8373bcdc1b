//! Local checkout resolution.
//!
//! Maps a module path to a directory under `$GOPATH/src`, tolerating checkouts
//! that omit the module's major version suffix.

pub mod local;
pub mod version;

pub use local::LocalPathResolver;
pub use version::strip_major_version;
