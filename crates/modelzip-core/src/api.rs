//! High-level public API for bundling a model tree.

use std::path::Path;

use crate::BundleConfig;
use crate::BundleReport;
use crate::ProgressCallback;
use crate::Result;
use crate::archive::write_archive;
use crate::collect::collect_models;
use crate::entry::ModelEntry;
use crate::manifest::write_manifest;

/// Collects every model below `root`, writes the archive, then the manifest.
///
/// The three steps run in that order over the same in-memory entry list.
/// Output locations come from `config.archive_path` and
/// `config.manifest_path`.
///
/// # Arguments
///
/// * `root` - Directory tree to scan
/// * `config` - Output paths and archive options
/// * `progress` - Receives archive-writing progress
///
/// # Errors
///
/// Returns an error if:
/// - `root` does not exist or cannot be read
/// - a model file cannot be read
/// - the archive or manifest cannot be written
///
/// # Examples
///
/// ```no_run
/// use modelzip_core::BundleConfig;
/// use modelzip_core::NoopProgress;
/// use modelzip_core::bundle;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = BundleConfig::default().with_archive_path("/tmp/models.zip");
/// let report = bundle("./models", &config, &mut NoopProgress)?;
/// for name in &report.model_names {
///     println!("{name}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn bundle<P: AsRef<Path>>(
    root: P,
    config: &BundleConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<BundleReport> {
    config.validate()?;
    let entries = collect_models(root, config)?;
    bundle_entries(&entries, config, progress)
}

/// Writes the archive and then the manifest for already collected entries.
///
/// Useful when the caller drives [`ModelWalker`](crate::ModelWalker) itself,
/// for example to print each model as it is discovered.
///
/// # Errors
///
/// Returns an error if the archive or manifest cannot be written.
pub fn bundle_entries(
    entries: &[ModelEntry],
    config: &BundleConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<BundleReport> {
    let start = std::time::Instant::now();
    let mut report = write_archive(entries, &config.archive_path, config, progress)?;
    write_manifest(entries, &config.manifest_path)?;
    report.duration = start.elapsed();

    tracing::info!(
        models = report.models_found,
        archived = report.models_archived,
        archive = %config.archive_path.display(),
        manifest = %config.manifest_path.display(),
        "bundle complete"
    );
    Ok(report)
}
