//! Clipboard export.
//!
//! Copying goes through PowerShell's `Set-Clipboard`. The text is embedded
//! in a single-quoted PowerShell string, so single quotes are doubled.

use std::process::Command;

use crate::error::ClipboardError;

/// Something that can receive text destined for the clipboard.
pub trait ClipboardWriter {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Writes to the system clipboard by running `powershell`.
#[derive(Debug, Default)]
pub struct PowerShellClipboard;

impl PowerShellClipboard {
    pub fn command(text: &str) -> Command {
        let mut cmd = Command::new("powershell");
        cmd.arg("-NoProfile")
            .arg("-Command")
            .arg(format!("Set-Clipboard -Value '{}'", escape_single_quotes(text)));
        cmd
    }
}

impl ClipboardWriter for PowerShellClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        let status = Self::command(text).status()?;
        if !status.success() {
            return Err(ClipboardError::ExportFailed(status));
        }
        Ok(())
    }
}

/// Keeps everything written to it. Used where no real clipboard exists.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Vec<String>,
}

impl MemoryClipboard {
    pub fn last(&self) -> Option<&str> {
        self.contents.last().map(String::as_str)
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents.push(text.to_string());
        Ok(())
    }
}

pub fn escape_single_quotes(text: &str) -> String {
    text.replace('\'', "''")
}
