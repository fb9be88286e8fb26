//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use modelzip_core::BundleConfig;
use modelzip_core::BundleReport;
use modelzip_core::ModelSource;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct CollisionOutput {
    name: String,
    sources: Vec<String>,
}

impl OutputFormatter for JsonFormatter {
    // Names are part of the final document
    fn format_model_found(&self, _name: &str) {}

    fn format_bundle_result(&self, config: &BundleConfig, report: &BundleReport) -> Result<()> {
        #[derive(Serialize)]
        struct BundleOutput {
            archive_path: String,
            manifest_path: String,
            models: Vec<String>,
            models_found: usize,
            models_archived: usize,
            bytes_written: u64,
            bytes_compressed: u64,
            collisions: Vec<CollisionOutput>,
            duration_ms: u128,
            warnings: Vec<String>,
        }

        let data = BundleOutput {
            archive_path: config.archive_path.display().to_string(),
            manifest_path: config.manifest_path.display().to_string(),
            models: report.model_names.clone(),
            models_found: report.models_found,
            models_archived: report.models_archived,
            bytes_written: report.bytes_written,
            bytes_compressed: report.bytes_compressed,
            collisions: report
                .collisions
                .iter()
                .map(|c| CollisionOutput {
                    name: c.name.clone(),
                    sources: c.sources.iter().map(|p| p.display().to_string()).collect(),
                })
                .collect(),
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        };

        Self::output(&JsonOutput::success("bundle", data))
    }

    fn format_model_list(&self, archive: &Path, names: &[String]) -> Result<()> {
        #[derive(Serialize)]
        struct ListOutput<'a> {
            archive_path: String,
            total_models: usize,
            models: &'a [String],
        }

        let data = ListOutput {
            archive_path: archive.display().to_string(),
            total_models: names.len(),
            models: names,
        };

        Self::output(&JsonOutput::success("list", data))
    }

    fn format_located(&self, name: &str, source: &ModelSource) -> Result<()> {
        #[derive(Serialize)]
        struct LocateOutput<'a> {
            name: &'a str,
            kind: &'static str,
            path: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            entry: Option<&'a str>,
        }

        let data = match source {
            ModelSource::Folder(path) => LocateOutput {
                name,
                kind: "folder",
                path: path.display().to_string(),
                entry: None,
            },
            ModelSource::File(path) => LocateOutput {
                name,
                kind: "file",
                path: path.display().to_string(),
                entry: None,
            },
            ModelSource::Zip { archive, entry } => LocateOutput {
                name,
                kind: "archive",
                path: archive.display().to_string(),
                entry: Some(entry.as_str()),
            },
        };

        Self::output(&JsonOutput::success("locate", data))
    }
}
