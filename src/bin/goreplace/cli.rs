//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;
use goreplace::core::MANIFEST_NAME;
use goreplace::util::ColorChoice;

/// Searches go.mod for a matching dependency and replaces it with its local checkout
#[derive(Parser, Debug)]
#[command(name = "goreplace")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example:\n  goreplace proto")]
pub struct Cli {
    /// Part of the module path to look for
    #[arg(value_name = "PARTIAL_PACKAGE_NAME")]
    pub partial: Option<String>,

    /// Path to the go.mod to update
    #[arg(long, value_name = "PATH", default_value = MANIFEST_NAME)]
    pub manifest: PathBuf,

    /// Directory whose src/ holds local checkouts
    #[arg(long, env = "GOPATH", value_name = "DIR")]
    pub gopath: Option<PathBuf>,

    /// Print the replace directive instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Do not ask for confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Coloring: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorChoice,

    /// Disable colored output (same as `--color never`)
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Effective color choice; `--no-color` wins over `--color`.
    pub fn color_choice(&self) -> ColorChoice {
        if self.no_color {
            ColorChoice::Never
        } else {
            self.color
        }
    }
}
