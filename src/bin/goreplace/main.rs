//! goreplace CLI - point a go.mod dependency at its local checkout

use std::io;

use anyhow::Result;
use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

use goreplace::ops::{replace_dependency, ReplaceOptions, ReplaceOutcome, TerminalPrompt};
use goreplace::util::config::load_config;
use goreplace::util::{ReplaceError, Shell, Status};

mod cli;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let shell = Shell::new(cli.color_choice(), cli.verbose);

    // Set up logging
    let filter = if shell.is_verbose() {
        EnvFilter::new("goreplace=debug")
    } else {
        EnvFilter::new("goreplace=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run(cli, &shell) {
        match e.downcast_ref::<ReplaceError>() {
            Some(err) => {
                shell.error(err);
                if let Some(help) = err.help() {
                    shell.help(help);
                }
            }
            None => shell.error(format!("{:#}", e)),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, shell: &Shell) -> Result<()> {
    let partial = cli.partial.ok_or(ReplaceError::MissingArgument)?;
    let config = load_config().with_gopath(cli.gopath);
    tracing::debug!("using GOPATH root {}", config.gopath_root().display());

    let opts = ReplaceOptions {
        manifest_path: cli.manifest,
        partial,
        dry_run: cli.dry_run,
        assume_yes: cli.yes,
    };

    let stdin = io::stdin();
    let mut prompt = TerminalPrompt::new(stdin.lock(), io::stderr(), config.max_input_len)
        .with_color(shell.use_color());

    match replace_dependency(&opts, &config, &mut prompt)? {
        ReplaceOutcome::NoMatches { partial } => {
            shell.note(format!("No matches found for `{}`.", partial));
        }
        ReplaceOutcome::Cancelled { module } => {
            shell.status(
                Status::Cancelled,
                format!("Operation canceled, {} left as is.", module),
            );
        }
        ReplaceOutcome::Replaced { module, local_path } => {
            shell.status(
                Status::Replaced,
                format!("{} => {}", module, local_path.display()),
            );
        }
        ReplaceOutcome::DryRun { directive, .. } => {
            println!("{}", directive);
            shell.status(
                Status::Skipped,
                format!("dry run, {} not modified", opts.manifest_path.display()),
            );
        }
    }

    Ok(())
}
