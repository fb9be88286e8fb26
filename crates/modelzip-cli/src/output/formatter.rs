//! Output formatter trait for CLI results.

use anyhow::Result;
use modelzip_core::BundleConfig;
use modelzip_core::BundleReport;
use modelzip_core::ModelSource;
use serde::Serialize;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Report a model discovered during the scan
    fn format_model_found(&self, name: &str);

    /// Format the result of a bundle run
    fn format_bundle_result(&self, config: &BundleConfig, report: &BundleReport) -> Result<()>;

    /// Format the models listed from an archive
    fn format_model_list(&self, archive: &Path, names: &[String]) -> Result<()>;

    /// Format where a model was found
    fn format_located(&self, name: &str, source: &ModelSource) -> Result<()>;
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    pub data: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data,
        }
    }
}
