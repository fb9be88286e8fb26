//! Error conversion utilities for CLI.
//!
//! Converts modelzip-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use modelzip_core::ModelZipError;
use std::path::Path;

/// Converts `ModelZipError` to a user-friendly anyhow error.
///
/// `target` names what the command was working on (models root, archive,
/// models directory) and is used where the error carries no path itself.
pub fn convert_error(err: ModelZipError, target: &Path) -> anyhow::Error {
    match err {
        ModelZipError::NotFound { path } => {
            anyhow!(
                "Path not found: '{}'\n\
                 HINT: Check that the directory exists and that no model.xml was removed during the scan.",
                path.display()
            )
        }
        ModelZipError::PermissionDenied { path } => {
            anyhow!(
                "Permission denied: '{}'\n\
                 HINT: Make sure the file is readable and the output location is writable.",
                path.display()
            )
        }
        ModelZipError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {}",
                target.display(),
                io_err
            )
        }
        ModelZipError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The archive may be corrupted or not a zip file.",
                target.display(),
                reason
            )
        }
        ModelZipError::ModelNotFound { name } => {
            anyhow!(
                "Model '{}' not found in '{}'\n\
                 HINT: Models are looked up as <name>/model.xml folders, <name>.<ext> files, \
                 or inside *.zip archives.",
                name,
                target.display()
            )
        }
        ModelZipError::InvalidCompressionLevel { .. } => {
            anyhow::Error::from(err).context("Invalid --compression-level")
        }
    }
}

/// Adds CLI context to a core result.
pub fn add_context<T>(result: Result<T, ModelZipError>, target: &Path) -> anyhow::Result<T> {
    result.map_err(|e| convert_error(e, target))
}
