//! High-level operations.
//!
//! This module contains the replace workflow and its interactive seam.

pub mod prompt;
pub mod replace;

pub use prompt::{parse_selection, validate_input, Prompt, TerminalPrompt};
pub use replace::{
    append_replace_directive, apply_replace, read_manifest, replace_dependency, replace_directive,
    ReplaceOptions, ReplaceOutcome,
};
