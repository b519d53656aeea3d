//! Terminal output and logging setup for gpwd.
//!
//! Everything the binary writes goes through here. No generation logic
//! should live in this module.

use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

use gpwd::{ClipboardError, Password};

pub const BANNER: &str = "=== Generated passwords ===";

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

pub fn print_passwords<W: Write>(out: &mut W, passwords: &[Password]) -> io::Result<()> {
    writeln!(out, "{}", BANNER)?;
    for (i, pwd) in passwords.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, pwd)?;
    }
    Ok(())
}

pub fn report_clipboard<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    result: Result<(), ClipboardError>,
) -> io::Result<()> {
    match result {
        Ok(()) => writeln!(out, "\nFirst password copied to clipboard."),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard export failed");
            writeln!(err, "Failed to copy to clipboard: {}", e)
        }
    }
}
