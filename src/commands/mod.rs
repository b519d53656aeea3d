//! Command layer for gpwd.
//!
//! [`dispatch`] wires the real process resources (clock-seeded RNG, the
//! PowerShell clipboard, stdout and stderr) into the generate command.

use std::io;
use std::process::ExitCode;

use gpwd::{PowerShellClipboard, SeededRng};

use crate::cli::Cli;

pub mod gen_pw;

pub fn dispatch(cli: Cli) -> ExitCode {
    let mut rng = SeededRng::from_time();
    let mut clipboard = PowerShellClipboard;
    let stdout = io::stdout();
    let stderr = io::stderr();

    match gen_pw::run(&cli, &mut rng, &mut clipboard, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            tracing::error!(error = %e, "failed to write output");
            ExitCode::FAILURE
        }
    }
}
