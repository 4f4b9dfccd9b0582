// Rust guideline compliant 2026-10-15

//! Terminal detection utilities for the Stockroom CLI.

use std::env;

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Returns whether input comes from an interactive terminal.
///
/// The shell only prints prompts and the banner in that case, so piped
/// scripts produce clean output.
pub fn is_interactive() -> bool {
    atty::is(atty::Stream::Stdin)
}
