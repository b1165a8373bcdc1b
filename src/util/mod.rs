//! Shared utilities

pub mod config;
pub mod errors;
pub mod fs;
pub mod shell;

pub use config::Config;
pub use errors::{ReplaceError, ReplaceResult};
pub use shell::{ColorChoice, Shell, Status, Style};
