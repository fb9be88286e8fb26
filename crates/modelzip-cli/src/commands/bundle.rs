//! Bundle command implementation.

use crate::cli::BundleArgs;
use crate::error::add_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use modelzip_core::BundleConfig;
use modelzip_core::ModelWalker;
use modelzip_core::NoopProgress;
use modelzip_core::write_archive;
use modelzip_core::write_manifest;
use std::time::Instant;

pub fn execute(
    args: &BundleArgs,
    formatter: &dyn OutputFormatter,
    show_progress: bool,
) -> Result<()> {
    let config = BundleConfig::default()
        .with_archive_path(&args.archive)
        .with_manifest_path(&args.manifest)
        .with_compression_level(args.compression_level)
        .with_follow_symlinks(args.follow_symlinks);
    add_context(config.validate(), &args.root)?;

    // Names are reported as the walk finds them, before anything is written
    let walker = ModelWalker::new(&args.root, &config);
    let mut entries = Vec::new();
    for entry in walker.walk() {
        let entry = add_context(entry, &args.root)?;
        formatter.format_model_found(&entry.name);
        entries.push(entry);
    }

    // Archive and manifest are written separately so failures name the right file
    let start = Instant::now();
    let mut report = if show_progress && CliProgress::should_show() {
        let mut progress = CliProgress::new(entries.len(), "Archiving");
        add_context(
            write_archive(&entries, &config.archive_path, &config, &mut progress),
            &config.archive_path,
        )?
    } else {
        add_context(
            write_archive(&entries, &config.archive_path, &config, &mut NoopProgress),
            &config.archive_path,
        )?
    };
    add_context(
        write_manifest(&entries, &config.manifest_path),
        &config.manifest_path,
    )?;
    report.duration = start.elapsed();

    tracing::info!(
        models = report.models_found,
        archived = report.models_archived,
        "bundle complete"
    );

    formatter.format_bundle_result(&config, &report)?;

    Ok(())
}
