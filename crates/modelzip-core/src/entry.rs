//! Model entries discovered during a tree walk.

use crate::ModelZipError;
use crate::Result;
use crate::config::MODEL_FILE_NAME;
use std::path::Path;
use std::path::PathBuf;

/// One discovered model: a name and the directory holding its model file.
///
/// The name is the final component of `source_dir`. Names are not unique;
/// two directories with the same base name yield two entries with the same
/// name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEntry {
    /// Model name (base name of the containing directory).
    pub name: String,

    /// Directory containing the model file, as produced by the walk.
    pub source_dir: PathBuf,
}

impl ModelEntry {
    /// Creates an entry, deriving the name from `source_dir`.
    ///
    /// Directories without a final component (`/`, `..`, `.`) are
    /// canonicalized first; if that still yields no base name the whole
    /// path is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelzip_core::ModelEntry;
    /// use std::path::Path;
    ///
    /// let entry = ModelEntry::from_dir(Path::new("models/sub/busybox"))?;
    /// assert_eq!(entry.name, "busybox");
    /// assert_eq!(entry.archive_path(), "busybox/model.xml");
    /// # Ok::<(), modelzip_core::ModelZipError>(())
    /// ```
    pub fn from_dir(source_dir: &Path) -> Result<Self> {
        let name = match base_name(source_dir) {
            Some(name) => name,
            None => {
                let canonical = source_dir
                    .canonicalize()
                    .map_err(|e| ModelZipError::from_io(e, source_dir))?;
                base_name(&canonical).unwrap_or_else(|| canonical.display().to_string())
            }
        };

        Ok(Self {
            name,
            source_dir: source_dir.to_path_buf(),
        })
    }

    /// Path of the model file on disk (`<source_dir>/model.xml`).
    #[must_use]
    pub fn model_file(&self) -> PathBuf {
        self.source_dir.join(MODEL_FILE_NAME)
    }

    /// Path of the model inside the archive (`<name>/model.xml`).
    ///
    /// Always uses forward slashes, as the zip format requires.
    #[must_use]
    pub fn archive_path(&self) -> String {
        format!("{}/{MODEL_FILE_NAME}", self.name)
    }
}

/// A model name shared by more than one discovered directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// The shared model name.
    pub name: String,

    /// Every directory carrying this name, in collection order. The last one
    /// wins in the archive.
    pub sources: Vec<PathBuf>,
}

fn base_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
