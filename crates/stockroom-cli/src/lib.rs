// Rust guideline compliant 2026-10-15

//! Stockroom CLI library.
//!
//! This library exposes the shell modules for use in tests and external code.

pub mod command;
pub mod init;
pub mod logging;
pub mod output;
pub mod shell;
pub mod terminal;

pub use command::{Command, CommandError};
pub use output::{create_formatter, OutputFormatter};
pub use shell::{Flow, Shell};
pub use terminal::{is_interactive, should_use_color};
