// Rust guideline compliant 2026-10-15

//! Implementation of the `stockroom init` command.
//!
//! Writes a configuration file holding the default settings so they can be
//! edited by hand.

use anyhow::Result;
use std::path::Path;
use stockroom_core::Config;

/// Writes the default configuration to `path`.
///
/// # Arguments
///
/// * `path` - Destination config file
/// * `force` - Overwrite an existing file
///
/// # Returns
///
/// `true` if the file was written, `false` if it already existed and `force`
/// was not set.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn execute(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        tracing::info!(path = %path.display(), "config exists, leaving it untouched");
        return Ok(false);
    }

    Config::default().save(path)?;
    tracing::info!(path = %path.display(), "wrote default config");
    Ok(true)
}
