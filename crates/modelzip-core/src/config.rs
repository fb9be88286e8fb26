//! Configuration for model bundling.

use crate::ModelZipError;
use crate::Result;
use std::path::PathBuf;

/// File name that marks a directory as a model directory. Matched literally
/// and case-sensitively.
pub const MODEL_FILE_NAME: &str = "model.xml";

/// Default archive output path, relative to the working directory.
pub const DEFAULT_ARCHIVE_PATH: &str = "models.zip";

/// Default manifest output path, relative to the working directory.
pub const DEFAULT_MANIFEST_PATH: &str = "models.txt";

/// Configuration for a bundle run.
///
/// # Examples
///
/// ```
/// use modelzip_core::BundleConfig;
///
/// let config = BundleConfig::default()
///     .with_archive_path("out/models.zip")
///     .with_compression_level(9);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// Where the zip archive is written. Overwritten if it exists.
    ///
    /// Default: `models.zip`.
    pub archive_path: PathBuf,

    /// Where the manifest is written. Overwritten if it exists.
    ///
    /// Default: `models.txt`.
    pub manifest_path: PathBuf,

    /// Deflate level (1-9), or `Some(0)` to store entries uncompressed.
    ///
    /// `None` uses the zip library default.
    ///
    /// Default: `Some(6)`.
    pub compression_level: Option<u8>,

    /// Follow symbolic links while walking the tree.
    ///
    /// Default: `false`.
    pub follow_symlinks: bool,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            archive_path: PathBuf::from(DEFAULT_ARCHIVE_PATH),
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            compression_level: Some(6),
            follow_symlinks: false,
        }
    }
}

impl BundleConfig {
    /// Creates a new `BundleConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the archive output path.
    #[must_use]
    pub fn with_archive_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.archive_path = path.into();
        self
    }

    /// Sets the manifest output path.
    #[must_use]
    pub fn with_manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = path.into();
        self
    }

    /// Sets the compression level. Out-of-range values are caught by
    /// [`validate`](Self::validate).
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = Some(level);
        self
    }

    /// Sets whether to follow symlinks.
    #[must_use]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ModelZipError::InvalidCompressionLevel`] if the level is
    /// above 9.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && level > 9
        {
            return Err(ModelZipError::InvalidCompressionLevel { level });
        }
        Ok(())
    }
}
