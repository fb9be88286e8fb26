//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use modelzip_core::BundleConfig;
use modelzip_core::BundleReport;
use modelzip_core::ModelSource;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    summary: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled_stderr(),
            term: Term::stdout(),
            summary: Term::stderr(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn write_header(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .summary
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.summary.write_line(message);
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_model_found(&self, name: &str) {
        if self.quiet {
            return;
        }
        let _ = self.term.write_line(name);
    }

    fn format_bundle_result(&self, config: &BundleConfig, report: &BundleReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.write_header(&format!(
            "Archive created: {}",
            config.archive_path.display()
        ));
        let _ = self.summary.write_line(&format!(
            "  Manifest:         {}",
            config.manifest_path.display()
        ));
        let _ = self
            .summary
            .write_line(&format!("  Models found:     {}", report.models_found));
        let _ = self
            .summary
            .write_line(&format!("  Models archived:  {}", report.models_archived));

        if self.verbose {
            let _ = self.summary.write_line(&format!(
                "  Total size:       {}",
                Self::format_size(report.bytes_written)
            ));
            let _ = self.summary.write_line(&format!(
                "  Archive size:     {}",
                Self::format_size(report.bytes_compressed)
            ));
            let _ = self
                .summary
                .write_line(&format!("  Duration:         {:?}", report.duration));
        }

        if report.has_warnings() {
            let _ = self.summary.write_line("");
            if self.use_colors {
                let _ = self
                    .summary
                    .write_line(&format!("{}", style("Warnings:").yellow().bold()));
            } else {
                let _ = self.summary.write_line("Warnings:");
            }
            for warning in &report.warnings {
                let _ = self.summary.write_line(&format!("  - {warning}"));
            }
        }

        Ok(())
    }

    fn format_model_list(&self, archive: &Path, names: &[String]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for name in names {
            let _ = self.term.write_line(name);
        }

        if self.verbose {
            let _ = self.term.write_line("");
            let _ = self.term.write_line(&format!(
                "Total: {} models in {}",
                names.len(),
                archive.display()
            ));
        }

        Ok(())
    }

    fn format_located(&self, name: &str, source: &ModelSource) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.verbose {
            let kind = match source {
                ModelSource::Folder(_) => "folder",
                ModelSource::File(_) => "file",
                ModelSource::Zip { .. } => "archive",
            };
            let _ = self
                .term
                .write_line(&format!("{name} ({kind}): {source}"));
        } else {
            let _ = self.term.write_line(&source.to_string());
        }

        Ok(())
    }
}
