//! Generate passwords and print them.

use std::io::{self, Write};

use gpwd::{generate_batch, ClipboardWriter, RandomSource};

use crate::cli::Cli;
use crate::ui;

/// Run one invocation. Returns the process exit status.
///
/// Generation errors stop the run before anything is printed to `out` and
/// yield status 1. Clipboard failures are reported on `err` but still
/// exit 0.
pub fn run<R, C, W, E>(
    cli: &Cli,
    rng: &mut R,
    clipboard: &mut C,
    out: &mut W,
    err: &mut E,
) -> io::Result<u8>
where
    R: RandomSource,
    C: ClipboardWriter,
    W: Write,
    E: Write,
{
    let config = cli.generator_config();

    let passwords = match generate_batch(&config, cli.batch, rng) {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!(?config, "generation failed");
            writeln!(err, "error: {}", e)?;
            return Ok(1);
        }
    };

    ui::print_passwords(out, &passwords)?;

    if cli.copy {
        if let Some(first) = passwords.first() {
            let result = clipboard.write(first.as_str());
            ui::report_clipboard(out, err, result)?;
        }
    }

    Ok(0)
}
