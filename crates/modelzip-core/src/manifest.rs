//! Plain-text model manifest.
//!
//! The manifest lists one model name per line, in collection order, each
//! line terminated by `\n`. Duplicate names are kept.

use crate::Result;
use crate::entry::ModelEntry;
use crate::error::IoResultExt;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

/// Writes the names of `entries` to `output`, one per line.
///
/// An existing file is overwritten. An empty slice produces an empty file.
///
/// # Examples
///
/// ```no_run
/// use modelzip_core::ModelEntry;
/// use modelzip_core::write_manifest;
/// use std::path::PathBuf;
///
/// let entries = vec![ModelEntry { name: "busybox".into(), source_dir: PathBuf::from("m/busybox") }];
/// write_manifest(&entries, "models.txt")?;
/// # Ok::<(), modelzip_core::ModelZipError>(())
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_manifest<P: AsRef<Path>>(entries: &[ModelEntry], output: P) -> Result<()> {
    let output = output.as_ref();
    let file = File::create(output).at_path(output)?;
    let mut writer = BufWriter::new(file);

    for entry in entries {
        writeln!(writer, "{}", entry.name).at_path(output)?;
    }
    writer.flush().at_path(output)?;

    tracing::debug!(path = %output.display(), lines = entries.len(), "wrote manifest");
    Ok(())
}

/// Reads model names back from a manifest. Blank lines are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not valid UTF-8.
pub fn read_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path).at_path(path)?);

    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line.at_path(path)?;
        let name = line.trim_end_matches('\r');
        if !name.trim().is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}
