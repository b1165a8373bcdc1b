//! Filesystem utilities.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Atomically replace `path` with `contents`.
///
/// The data goes to a temporary file in the same directory, which is synced
/// and then renamed over the target. The target keeps its old contents if
/// anything fails, and the temporary file is removed on every error path.
pub fn atomic_write(path: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tracing::trace!("writing {} via {}", path.display(), tmp.path().display());

    // NamedTempFile is created 0600; keep whatever mode the target had.
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }

    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
