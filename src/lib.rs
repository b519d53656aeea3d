//! gpwd: random password generation.
//!
//! The library holds everything with logic in it: character classes, the
//! generator, batching and clipboard export. The binary in `main.rs` only
//! parses flags and prints.

pub mod batch;
pub mod charset;
pub mod clipboard;
pub mod error;
pub mod generator;
pub mod random;

pub use batch::generate_batch;
pub use charset::CharClass;
pub use clipboard::{ClipboardWriter, MemoryClipboard, PowerShellClipboard};
pub use error::{ClipboardError, GenerateError};
pub use generator::{generate, GeneratorConfig, Password, MAX_LENGTH};
pub use random::{RandomSource, SeededRng};
