//! Model listing for existing archives.

use crate::Result;
use crate::config::MODEL_FILE_NAME;
use crate::error::IoResultExt;
use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;
use zip::ZipArchive;

/// Lists the model names stored in a bundle archive, in archive order.
///
/// Only entries of the form `<name>/model.xml` are reported; anything else
/// in the archive is ignored.
///
/// # Examples
///
/// ```no_run
/// use modelzip_core::list_models;
///
/// for name in list_models("models.zip")? {
///     println!("{name}");
/// }
/// # Ok::<(), modelzip_core::ModelZipError>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - the archive cannot be opened
/// - the archive is not a valid zip file
pub fn list_models<P: AsRef<Path>>(archive_path: P) -> Result<Vec<String>> {
    let archive_path = archive_path.as_ref();
    let file = File::open(archive_path).at_path(archive_path)?;
    list_models_from(BufReader::new(file))
}

pub(crate) fn list_models_from<R: Read + Seek>(reader: R) -> Result<Vec<String>> {
    let mut zip = ZipArchive::new(reader)?;
    let mut names = Vec::with_capacity(zip.len());

    for i in 0..zip.len() {
        let file = zip.by_index(i)?;
        if let Some(name) = model_name_of(file.name()) {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

/// Extracts `<name>` from an archive path `<name>/model.xml`.
pub(crate) fn model_name_of(entry_path: &str) -> Option<&str> {
    let (name, file) = entry_path.split_once('/')?;
    (!name.is_empty() && file == MODEL_FILE_NAME).then_some(name)
}
