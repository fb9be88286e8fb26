//! Bundle operation reporting and progress callbacks.

use crate::entry::Collision;
use std::path::Path;
use std::time::Duration;

/// Report of a bundle operation.
///
/// # Examples
///
/// ```
/// use modelzip_core::BundleReport;
///
/// let mut report = BundleReport::new();
/// report.models_found = 3;
/// report.models_archived = 2;
/// report.add_warning("duplicate model name: busybox");
/// assert!(report.has_warnings());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BundleReport {
    /// Model names discovered by the walk, in collection order.
    pub model_names: Vec<String>,

    /// Number of directories holding a model file.
    pub models_found: usize,

    /// Number of entries written to the archive.
    pub models_archived: usize,

    /// Uncompressed bytes copied into the archive.
    pub bytes_written: u64,

    /// Size of the finished archive file.
    pub bytes_compressed: u64,

    /// Names shared by more than one directory.
    pub collisions: Vec<Collision>,

    /// Duration of the operation.
    pub duration: Duration,

    /// Warnings generated during the run.
    pub warnings: Vec<String>,
}

impl BundleReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns whether any model name was shared by several directories.
    #[must_use]
    pub fn has_collisions(&self) -> bool {
        !self.collisions.is_empty()
    }

    /// Returns the compression ratio (uncompressed / compressed).
    ///
    /// Returns 0.0 if either size is 0.
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_compressed == 0 || self.bytes_written == 0 {
            return 0.0;
        }
        self.bytes_written as f64 / self.bytes_compressed as f64
    }
}

/// Callback trait for progress reporting while writing an archive.
///
/// Implement this trait to receive updates as each model file is copied.
pub trait ProgressCallback: Send {
    /// Called when starting to write an entry.
    ///
    /// # Arguments
    ///
    /// * `path` - Archive path of the entry being written
    /// * `total` - Total number of entries that will be written
    /// * `current` - Current entry number (1-indexed)
    fn on_entry_start(&mut self, path: &Path, total: usize, current: usize);

    /// Called for each chunk of model data copied into the archive.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called when an entry has been completely written.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called once when the archive is finished.
    fn on_complete(&mut self);
}

/// No-op implementation of `ProgressCallback`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}
