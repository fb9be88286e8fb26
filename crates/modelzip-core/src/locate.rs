//! Model lookup by name.
//!
//! A models location may hold models in three shapes, tried in this order:
//!
//! 1. a folder `<root>/<name>/` with `model.xml`, or failing that any
//!    `model.<ext>` file inside it
//! 2. a file `<root>/<name>.<ext>`
//! 3. the same two shapes inside every `*.zip` archive directly under
//!    `<root>`, such as the archive written by [`bundle`](crate::bundle)
//!
//! Directory listings are sorted by file name so lookups are deterministic.

use crate::ModelZipError;
use crate::Result;
use crate::config::MODEL_FILE_NAME;
use crate::error::IoResultExt;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use zip::ZipArchive;

/// Where a model was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// Model file inside a `<root>/<name>/` folder.
    Folder(PathBuf),

    /// Standalone `<root>/<name>.<ext>` file.
    File(PathBuf),

    /// Entry inside a zip archive.
    Zip {
        /// Path of the archive on disk.
        archive: PathBuf,
        /// Entry name inside the archive.
        entry: String,
    },
}

impl std::fmt::Display for ModelSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Folder(path) | Self::File(path) => write!(f, "{}", path.display()),
            Self::Zip { archive, entry } => write!(f, "{}!{entry}", archive.display()),
        }
    }
}

/// Resolves models by name below a models root.
///
/// # Examples
///
/// ```no_run
/// use modelzip_core::ModelLocator;
///
/// let locator = ModelLocator::new("./models");
/// let source = locator.locate("busybox")?;
/// let xml = locator.read("busybox")?;
/// println!("{source}: {} bytes", xml.len());
/// # Ok::<(), modelzip_core::ModelZipError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ModelLocator {
    root: PathBuf,
}

impl ModelLocator {
    /// Creates a locator rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the models root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Finds where the model called `name` is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ModelZipError::ModelNotFound`] if `name` is not a single
    /// path component or no shape matches, or an I/O error if the root
    /// cannot be listed.
    pub fn locate(&self, name: &str) -> Result<ModelSource> {
        if !is_plain_name(name) {
            return Err(ModelZipError::ModelNotFound {
                name: name.to_string(),
            });
        }

        if let Some(path) = find_in_folder(&self.root.join(name))? {
            return Ok(ModelSource::Folder(path));
        }

        if let Some(path) = find_named_file(&self.root, name)? {
            return Ok(ModelSource::File(path));
        }

        for archive in sorted_files(&self.root)?
            .into_iter()
            .filter(|p| p.extension().is_some_and(|ext| ext == "zip"))
        {
            tracing::debug!(archive = %archive.display(), name, "searching archive");
            match find_in_zip(&archive, name) {
                Ok(Some(entry)) => return Ok(ModelSource::Zip { archive, entry }),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(archive = %archive.display(), error = %e, "skipping unreadable archive");
                }
            }
        }

        Err(ModelZipError::ModelNotFound {
            name: name.to_string(),
        })
    }

    /// Reads the content of the model called `name`.
    ///
    /// # Errors
    ///
    /// Same as [`locate`](Self::locate), plus read failures.
    pub fn read(&self, name: &str) -> Result<Vec<u8>> {
        match self.locate(name)? {
            ModelSource::Folder(path) | ModelSource::File(path) => fs::read(&path).at_path(&path),
            ModelSource::Zip { archive, entry } => {
                let file = File::open(&archive).at_path(&archive)?;
                let mut zip = ZipArchive::new(BufReader::new(file))?;
                let mut zipped = zip.by_name(&entry)?;
                let mut content = Vec::new();
                zipped.read_to_end(&mut content)?;
                Ok(content)
            }
        }
    }
}

/// Looks for `model.xml`, then `model.<ext>`, inside a model folder.
fn find_in_folder(folder: &Path) -> Result<Option<PathBuf>> {
    if !folder.is_dir() {
        return Ok(None);
    }
    let preferred = folder.join(MODEL_FILE_NAME);
    if preferred.is_file() {
        return Ok(Some(preferred));
    }
    find_named_file(folder, "model")
}

/// Looks for a regular file `<stem>.<ext>` directly inside `dir`.
fn find_named_file(dir: &Path, stem: &str) -> Result<Option<PathBuf>> {
    Ok(sorted_files(dir)?.into_iter().find(|path| {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|file_name| matches_stem(file_name, stem))
    }))
}

/// Searches one archive for `<name>/model.xml`, `<name>/model.<ext>`, then
/// `<name>.<ext>`.
fn find_in_zip(archive: &Path, name: &str) -> Result<Option<String>> {
    let file = File::open(archive).at_path(archive)?;
    let zip = ZipArchive::new(BufReader::new(file))?;
    let mut entries: Vec<&str> = zip.file_names().collect();
    entries.sort_unstable();

    let preferred = format!("{name}/{MODEL_FILE_NAME}");
    if entries.contains(&preferred.as_str()) {
        return Ok(Some(preferred));
    }

    let in_folder = entries.iter().find(|entry| {
        entry
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('/'))
            .is_some_and(|file_name| matches_stem(file_name, "model"))
    });
    if let Some(entry) = in_folder {
        return Ok(Some((*entry).to_string()));
    }

    Ok(entries
        .iter()
        .find(|entry| matches_stem(entry, name))
        .map(|entry| (*entry).to_string()))
}

/// Returns whether `file_name` is `<stem>.<ext>` with a non-empty word
/// extension (letters, digits, underscore).
fn matches_stem(file_name: &str, stem: &str) -> bool {
    file_name
        .strip_prefix(stem)
        .and_then(|rest| rest.strip_prefix('.'))
        .is_some_and(|ext| {
            !ext.is_empty() && ext.chars().all(|c| c.is_alphanumeric() || c == '_')
        })
}

/// A model name must be a single normal path component, so lookups stay
/// inside the models root.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

/// Lists the regular files directly inside `dir`, sorted by name.
fn sorted_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).at_path(dir)? {
        let path = entry.at_path(dir)?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn write_zip(path: &Path, entries: &[(&str, &str)]) {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in entries {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        fs::write(path, zip.finish().unwrap().into_inner()).unwrap();
    }

    #[test]
    fn test_matches_stem() {
        assert!(matches_stem("model.xml", "model"));
        assert!(matches_stem("busybox.dimacs", "busybox"));
        assert!(!matches_stem("model.", "model"));
        assert!(!matches_stem("model.tar.gz", "model"));
        assert!(!matches_stem("models.xml", "model"));
        assert!(!matches_stem("model", "model"));
    }

    #[test]
    fn test_is_plain_name() {
        assert!(is_plain_name("busybox"));
        assert!(is_plain_name("linux-2.6.33"));
        assert!(!is_plain_name(""));
        assert!(!is_plain_name("."));
        assert!(!is_plain_name(".."));
        assert!(!is_plain_name("../x"));
        assert!(!is_plain_name("a/b"));
        assert!(!is_plain_name("a\\b"));
        assert!(!is_plain_name("/etc/passwd"));
    }

    #[test]
    fn test_locate_rejects_names_outside_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("models");
        fs::create_dir(&root).unwrap();
        fs::create_dir(temp.path().join("outside")).unwrap();
        fs::write(temp.path().join("outside/model.xml"), "<o/>").unwrap();

        let locator = ModelLocator::new(&root);

        for name in ["../outside", "..", "sub/../../outside"] {
            let err = locator.locate(name).unwrap_err();
            assert!(matches!(err, ModelZipError::ModelNotFound { .. }), "{name}");
        }
        let absolute = temp.path().join("outside");
        assert!(matches!(
            locator.read(absolute.to_str().unwrap()),
            Err(ModelZipError::ModelNotFound { .. })
        ));
    }

    #[test]
    fn test_locate_folder_model_xml() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("linux")).unwrap();
        fs::write(temp.path().join("linux/model.xml"), "<linux/>").unwrap();
        fs::write(temp.path().join("linux.dimacs"), "p cnf").unwrap();

        let locator = ModelLocator::new(temp.path());

        assert_eq!(
            locator.locate("linux").unwrap(),
            ModelSource::Folder(temp.path().join("linux/model.xml"))
        );
        assert_eq!(locator.read("linux").unwrap(), b"<linux/>");
    }

    #[test]
    fn test_locate_folder_other_extension() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("ecos")).unwrap();
        fs::write(temp.path().join("ecos/model.dimacs"), "p cnf 1 1").unwrap();

        let locator = ModelLocator::new(temp.path());

        assert_eq!(
            locator.locate("ecos").unwrap(),
            ModelSource::Folder(temp.path().join("ecos/model.dimacs"))
        );
    }

    #[test]
    fn test_locate_standalone_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("busybox.xml"), "<bb/>").unwrap();

        let locator = ModelLocator::new(temp.path());

        assert_eq!(
            locator.locate("busybox").unwrap(),
            ModelSource::File(temp.path().join("busybox.xml"))
        );
    }

    #[test]
    fn test_locate_inside_zip() {
        let temp = TempDir::new().unwrap();
        write_zip(
            &temp.path().join("models.zip"),
            &[("A/model.xml", "<a/>"), ("B/model.xml", "<b/>")],
        );

        let locator = ModelLocator::new(temp.path());

        assert_eq!(
            locator.locate("B").unwrap(),
            ModelSource::Zip {
                archive: temp.path().join("models.zip"),
                entry: "B/model.xml".into(),
            }
        );
        assert_eq!(locator.read("B").unwrap(), b"<b/>");
    }

    #[test]
    fn test_locate_zip_root_file() {
        let temp = TempDir::new().unwrap();
        write_zip(&temp.path().join("more.zip"), &[("fiasco.xml", "<f/>")]);

        let locator = ModelLocator::new(temp.path());

        assert_eq!(locator.read("fiasco").unwrap(), b"<f/>");
    }

    #[test]
    fn test_corrupt_zip_is_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a_broken.zip"), "garbage".repeat(40)).unwrap();
        write_zip(&temp.path().join("b_good.zip"), &[("X/model.xml", "<x/>")]);

        let locator = ModelLocator::new(temp.path());

        assert_eq!(locator.read("X").unwrap(), b"<x/>");
    }

    #[test]
    fn test_model_not_found() {
        let temp = TempDir::new().unwrap();
        let err = ModelLocator::new(temp.path()).locate("nothing").unwrap_err();
        assert!(matches!(err, ModelZipError::ModelNotFound { ref name } if name == "nothing"));
    }

    #[test]
    fn test_missing_root() {
        let temp = TempDir::new().unwrap();
        let err = ModelLocator::new(temp.path().join("missing"))
            .locate("a")
            .unwrap_err();
        assert!(matches!(err, ModelZipError::NotFound { .. }));
    }

    #[test]
    fn test_display_source() {
        let source = ModelSource::Zip {
            archive: PathBuf::from("models.zip"),
            entry: "A/model.xml".into(),
        };
        assert_eq!(source.to_string(), "models.zip!A/model.xml");
    }
}
