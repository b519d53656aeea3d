//! gpwd: a small random password generator.
//!
//! This file is the application entry point. It is kept small and is
//! responsible only for:
//!
//! - Parsing CLI arguments
//! - Setting up logging
//! - Handing off to the command layer and returning its exit status
//!
//! Flag definitions live in `cli.rs`, output helpers in `ui.rs`, and all
//! generation logic in the `gpwd` library.

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod ui;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    ui::init_logging(cli.verbose);
    commands::dispatch(cli)
}
