//! Directory tree walking for model discovery.
//!
//! A directory is a model directory when its immediate file list contains a
//! non-directory entry literally named `model.xml`. Directories are visited
//! depth-first in pre-order, children sorted by file name, so the order of
//! discovered models is stable for a given filesystem state.

use crate::BundleConfig;
use crate::Result;
use crate::config::MODEL_FILE_NAME;
use crate::entry::Collision;
use crate::entry::ModelEntry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Walks a directory tree and yields a [`ModelEntry`] per model directory.
///
/// # Examples
///
/// ```no_run
/// use modelzip_core::BundleConfig;
/// use modelzip_core::ModelWalker;
/// use std::path::Path;
///
/// let config = BundleConfig::default();
/// let walker = ModelWalker::new(Path::new("./models"), &config);
///
/// for entry in walker.walk() {
///     let entry = entry?;
///     println!("{}", entry.name);
/// }
/// # Ok::<(), modelzip_core::ModelZipError>(())
/// ```
pub struct ModelWalker<'a> {
    root: &'a Path,
    config: &'a BundleConfig,
}

impl<'a> ModelWalker<'a> {
    /// Creates a new walker for the given root directory.
    #[must_use]
    pub fn new(root: &'a Path, config: &'a BundleConfig) -> Self {
        Self { root, config }
    }

    /// Returns a lazy iterator over discovered models, in traversal order.
    ///
    /// The root itself is included in the walk. A missing root yields a
    /// single [`ModelZipError::NotFound`](crate::ModelZipError::NotFound).
    ///
    /// # Errors
    ///
    /// Entries error if a directory cannot be read or a loop is detected
    /// while following symlinks.
    pub fn walk(&self) -> impl Iterator<Item = Result<ModelEntry>> + '_ {
        WalkDir::new(self.root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) if entry.file_type().is_dir() => {
                    if holds_model_file(entry.path()) {
                        let found = ModelEntry::from_dir(entry.path());
                        if let Ok(model) = &found {
                            tracing::debug!(
                                name = %model.name,
                                dir = %model.source_dir.display(),
                                "found model"
                            );
                        }
                        Some(found)
                    } else {
                        None
                    }
                }
                Ok(_) => None,
                Err(e) => Some(Err(e.into())),
            })
    }
}

/// Collects every model under `root` into a vector, in traversal order.
///
/// # Examples
///
/// ```no_run
/// use modelzip_core::BundleConfig;
/// use modelzip_core::collect_models;
///
/// let entries = collect_models("./models", &BundleConfig::default())?;
/// println!("Found {} models", entries.len());
/// # Ok::<(), modelzip_core::ModelZipError>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `root` does not exist
/// - a directory cannot be read
pub fn collect_models<P: AsRef<Path>>(root: P, config: &BundleConfig) -> Result<Vec<ModelEntry>> {
    ModelWalker::new(root.as_ref(), config).walk().collect()
}

/// Groups entries sharing a model name.
///
/// Returns one [`Collision`] per name that appears more than once, ordered
/// by the first appearance of the name. Sources keep collection order.
///
/// # Examples
///
/// ```
/// use modelzip_core::ModelEntry;
/// use modelzip_core::find_collisions;
/// use std::path::PathBuf;
///
/// let entries = vec![
///     ModelEntry { name: "A".into(), source_dir: PathBuf::from("x/A") },
///     ModelEntry { name: "B".into(), source_dir: PathBuf::from("x/B") },
///     ModelEntry { name: "A".into(), source_dir: PathBuf::from("y/A") },
/// ];
/// let collisions = find_collisions(&entries);
/// assert_eq!(collisions.len(), 1);
/// assert_eq!(collisions[0].sources.len(), 2);
/// ```
#[must_use]
pub fn find_collisions(entries: &[ModelEntry]) -> Vec<Collision> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<PathBuf>> = HashMap::new();

    for entry in entries {
        let sources = groups.entry(entry.name.as_str()).or_insert_with(|| {
            order.push(entry.name.as_str());
            Vec::new()
        });
        sources.push(entry.source_dir.clone());
    }

    order
        .into_iter()
        .filter_map(|name| {
            groups
                .remove(name)
                .filter(|sources| sources.len() > 1)
                .map(|sources| Collision {
                    name: name.to_string(),
                    sources,
                })
        })
        .collect()
}

/// Returns whether `dir` directly contains a non-directory `model.xml`.
///
/// Dangling symlinks count as files; reading them fails later, at archive
/// time.
fn holds_model_file(dir: &Path) -> bool {
    let candidate = dir.join(MODEL_FILE_NAME);
    match fs::metadata(&candidate) {
        Ok(metadata) => !metadata.is_dir(),
        Err(_) => fs::symlink_metadata(&candidate).is_ok(),
    }
}
