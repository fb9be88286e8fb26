//! ZIP archive writing for collected models.
//!
//! Each [`ModelEntry`] becomes one archive entry at `<name>/model.xml`. The
//! zip writer rejects duplicate entry names, so when several directories
//! share a name only the last one collected is written (last write wins) and
//! the collision is recorded in the report. Shadowed model files are still
//! read, so a missing or unreadable one fails the run.

use crate::BundleConfig;
use crate::ProgressCallback;
use crate::Result;
use crate::collect::find_collisions;
use crate::entry::ModelEntry;
use crate::error::IoResultExt;
use crate::report::BundleReport;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Writes the model files of `entries` into a ZIP archive at `output`.
///
/// An existing file at `output` is truncated. If a source file is missing
/// or unreadable the run fails and the archive may be left partially
/// written.
///
/// # Examples
///
/// ```no_run
/// use modelzip_core::BundleConfig;
/// use modelzip_core::NoopProgress;
/// use modelzip_core::collect_models;
/// use modelzip_core::write_archive;
///
/// let config = BundleConfig::default();
/// let entries = collect_models("./models", &config)?;
/// let report = write_archive(&entries, "models.zip", &config, &mut NoopProgress)?;
/// println!("Archived {} models", report.models_archived);
/// # Ok::<(), modelzip_core::ModelZipError>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - the output file cannot be created
/// - a model file is missing or unreadable
/// - the zip library fails to write or finish the archive
pub fn write_archive<P: AsRef<Path>>(
    entries: &[ModelEntry],
    output: P,
    config: &BundleConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<BundleReport> {
    config.validate()?;
    let output = output.as_ref();
    let file = File::create(output).at_path(output)?;
    let mut report = write_archive_to(file, entries, config, progress)?;
    report.bytes_compressed = std::fs::metadata(output).at_path(output)?.len();
    Ok(report)
}

/// Writes the archive into any seekable writer.
fn write_archive_to<W: Write + Seek>(
    writer: W,
    entries: &[ModelEntry],
    config: &BundleConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<BundleReport> {
    let start = std::time::Instant::now();
    let mut zip = ZipWriter::new(writer);
    let mut report = BundleReport::new();
    let options = file_options(config);

    report.models_found = entries.len();
    report.model_names = entries.iter().map(|e| e.name.clone()).collect();
    report.collisions = find_collisions(entries);
    for collision in &report.collisions {
        tracing::debug!(
            name = %collision.name,
            count = collision.sources.len(),
            "duplicate model name, keeping the last one"
        );
    }
    let warnings: Vec<String> = report
        .collisions
        .iter()
        .map(|c| {
            format!(
                "duplicate model name '{}' ({} directories), archived {}",
                c.name,
                c.sources.len(),
                c.sources.last().map_or_else(String::new, |p| p.display().to_string())
            )
        })
        .collect();
    report.warnings.extend(warnings);

    let is_last = last_occurrence_mask(entries);
    let total = is_last.iter().filter(|&&last| last).count();
    let mut current = 0;
    let mut buffer = vec![0u8; 64 * 1024];

    for (entry, last) in entries.iter().zip(is_last) {
        // Shadowed duplicates are still read so a broken source fails the run
        if !last {
            let bytes = drain_model_file(entry)?;
            tracing::debug!(dir = %entry.source_dir.display(), bytes, "skipped shadowed model");
            continue;
        }

        let archive_name = entry.archive_path();
        let archive_path = Path::new(&archive_name);

        current += 1;
        progress.on_entry_start(archive_path, total, current);
        let bytes = add_model_to_zip(&mut zip, entry, &archive_name, options, progress, &mut buffer)?;
        progress.on_entry_complete(archive_path);

        tracing::debug!(entry = %archive_name, bytes, "archived model");
        report.models_archived += 1;
        report.bytes_written += bytes;
    }

    zip.finish()?;

    report.duration = start.elapsed();
    progress.on_complete();

    Ok(report)
}

/// Copies one model file into the archive, returning the bytes copied.
fn add_model_to_zip<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    entry: &ModelEntry,
    archive_name: &str,
    options: SimpleFileOptions,
    progress: &mut dyn ProgressCallback,
    buffer: &mut [u8],
) -> Result<u64> {
    let source = entry.model_file();
    let mut file = File::open(&source).at_path(&source)?;

    zip.start_file(archive_name, options)?;

    let mut bytes_written = 0u64;
    loop {
        let bytes_read = file.read(buffer).at_path(&source)?;
        if bytes_read == 0 {
            break;
        }
        zip.write_all(&buffer[..bytes_read])?;
        bytes_written += bytes_read as u64;
        progress.on_bytes_written(bytes_read as u64);
    }

    Ok(bytes_written)
}

/// Reads a model file to the end without storing it.
fn drain_model_file(entry: &ModelEntry) -> Result<u64> {
    let source = entry.model_file();
    let mut file = File::open(&source).at_path(&source)?;
    io::copy(&mut file, &mut io::sink()).at_path(&source)
}

/// Marks, in collection order, the entries that are the last one with their
/// name.
fn last_occurrence_mask(entries: &[ModelEntry]) -> Vec<bool> {
    let mut last_index: HashMap<&str, usize> = HashMap::new();
    for (idx, entry) in entries.iter().enumerate() {
        last_index.insert(entry.name.as_str(), idx);
    }

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| last_index.get(entry.name.as_str()) == Some(&idx))
        .collect()
}

fn file_options(config: &BundleConfig) -> SimpleFileOptions {
    match config.compression_level {
        Some(0) => SimpleFileOptions::default().compression_method(CompressionMethod::Stored),
        level => SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(level.map(i64::from)),
    }
}
