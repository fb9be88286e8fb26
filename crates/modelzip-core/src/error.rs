//! Error types for model collection and archiving.

use std::io;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ModelZipError`.
pub type Result<T> = std::result::Result<T, ModelZipError>;

/// Errors that can occur while collecting, archiving or locating models.
#[derive(Error, Debug)]
pub enum ModelZipError {
    /// A root directory or a referenced model file does not exist.
    #[error("not found: {path}")]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The process lacks permission to read or write a path.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The inaccessible path.
        path: PathBuf,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Archive is corrupted, or the zip library rejected an operation.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// No model with the given name could be resolved.
    #[error("model not found: {name}")]
    ModelNotFound {
        /// The requested model name.
        name: String,
    },

    /// Compression level is outside the supported range.
    #[error("invalid compression level {level}, expected 0-9")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },
}

impl ModelZipError {
    /// Classifies an I/O error raised while touching `path`.
    ///
    /// `NotFound` and `PermissionDenied` kinds keep the path; every other
    /// kind is wrapped as [`ModelZipError::Io`].
    ///
    /// # Examples
    ///
    /// ```
    /// use modelzip_core::ModelZipError;
    /// use std::io;
    /// use std::path::Path;
    ///
    /// let err = io::Error::new(io::ErrorKind::NotFound, "gone");
    /// let err = ModelZipError::from_io(err, Path::new("models/a/model.xml"));
    /// assert!(matches!(err, ModelZipError::NotFound { .. }));
    /// ```
    #[must_use]
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io(err),
        }
    }

    /// Returns the path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path } | Self::PermissionDenied { path } => Some(path),
            _ => None,
        }
    }
}

impl From<zip::result::ZipError> for ModelZipError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io_err) => Self::Io(io_err),
            other => Self::InvalidArchive(other.to_string()),
        }
    }
}

impl From<walkdir::Error> for ModelZipError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf);
        match (err.io_error().map(io::Error::kind), path) {
            (Some(io::ErrorKind::NotFound), Some(path)) => Self::NotFound { path },
            (Some(io::ErrorKind::PermissionDenied), Some(path)) => Self::PermissionDenied { path },
            _ => Self::Io(io::Error::other(format!("walkdir error: {err}"))),
        }
    }
}

/// Extension for attaching a path to fallible I/O calls.
pub(crate) trait IoResultExt<T> {
    fn at_path(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| ModelZipError::from_io(e, path))
    }
}
