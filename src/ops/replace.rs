//! Implementation of `goreplace <partial-name>`.
//!
//! Parse go.mod, filter requirements by the partial name, let the operator
//! pick one, resolve its local checkout and append a `replace` directive.

use std::path::{Path, PathBuf};

use crate::core::manifest;
use crate::ops::prompt::{validate_input, Prompt};
use crate::resolver::LocalPathResolver;
use crate::util::errors::{ReplaceError, ReplaceResult};
use crate::util::{fs, Config};

/// Options for a replace run.
#[derive(Debug, Clone)]
pub struct ReplaceOptions {
    /// Path to go.mod
    pub manifest_path: PathBuf,

    /// Substring to look for in required module paths
    pub partial: String,

    /// Resolve everything but leave go.mod untouched
    pub dry_run: bool,

    /// Skip the confirmation prompt
    pub assume_yes: bool,
}

/// How a replace run ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// No unreplaced requirement contains the partial name.
    NoMatches { partial: String },

    /// The operator declined the confirmation prompt.
    Cancelled { module: String },

    /// The directive was appended to go.mod.
    Replaced { module: String, local_path: PathBuf },

    /// Dry run: the directive that would have been appended.
    DryRun {
        module: String,
        local_path: PathBuf,
        directive: String,
    },
}

/// Run the full replace workflow.
pub fn replace_dependency<P: Prompt>(
    opts: &ReplaceOptions,
    config: &Config,
    prompt: &mut P,
) -> ReplaceResult<ReplaceOutcome> {
    validate_input(&opts.partial, config.max_input_len)?;

    let text = read_manifest(&opts.manifest_path)?;
    let matches = manifest::parse(&text).matches(&opts.partial);
    tracing::debug!("{} match(es) for `{}`", matches.len(), opts.partial);

    let module = match matches.as_slice() {
        [] => {
            return Ok(ReplaceOutcome::NoMatches {
                partial: opts.partial.clone(),
            })
        }
        [only] => only.clone(),
        _ => {
            let idx = prompt.select(&matches)?;
            matches
                .get(idx)
                .cloned()
                .ok_or_else(|| ReplaceError::InvalidSelection {
                    input: (idx + 1).to_string(),
                })?
        }
    };

    if !opts.assume_yes && !prompt.confirm(&module)? {
        return Ok(ReplaceOutcome::Cancelled { module });
    }

    let resolver = LocalPathResolver::new(config.gopath_root());
    let local_path = resolver.resolve(&module)?;

    if opts.dry_run {
        let directive = replace_directive(&module, &local_path);
        return Ok(ReplaceOutcome::DryRun {
            module,
            local_path,
            directive,
        });
    }

    apply_replace(&opts.manifest_path, &text, &module, &local_path)?;

    Ok(ReplaceOutcome::Replaced { module, local_path })
}

/// Read go.mod in full.
pub fn read_manifest(path: &Path) -> ReplaceResult<String> {
    std::fs::read_to_string(path).map_err(|source| ReplaceError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })
}

/// The `replace <module> => <local>` line for a module.
pub fn replace_directive(module_path: &str, local_path: &Path) -> String {
    format!("replace {} => {}", module_path, local_path.display())
}

/// Manifest text with a replace directive appended on its own line.
pub fn append_replace_directive(manifest_text: &str, module_path: &str, local_path: &Path) -> String {
    format!(
        "{}\n{}\n",
        manifest_text,
        replace_directive(module_path, local_path)
    )
}

/// Append a replace directive to `manifest_text` and atomically write it to `manifest_path`.
///
/// On failure the file at `manifest_path` is left as it was.
pub fn apply_replace(
    manifest_path: &Path,
    manifest_text: &str,
    module_path: &str,
    local_path: &Path,
) -> ReplaceResult<()> {
    let updated = append_replace_directive(manifest_text, module_path, local_path);

    fs::atomic_write(manifest_path, updated.as_bytes()).map_err(|source| {
        ReplaceError::ManifestWrite {
            path: manifest_path.to_path_buf(),
            source,
        }
    })?;

    tracing::debug!("wrote {}", manifest_path.display());
    Ok(())
}
