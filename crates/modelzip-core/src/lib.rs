//! Feature-model collection into a zip archive and manifest.
//!
//! `modelzip-core` walks a directory tree, finds every directory holding a
//! `model.xml` file, and packages those files into a single zip archive at
//! `<name>/model.xml`, where `<name>` is the containing directory's base name.
//! A companion manifest lists the discovered names, one per line.
//!
//! # Examples
//!
//! ```no_run
//! use modelzip_core::BundleConfig;
//! use modelzip_core::NoopProgress;
//! use modelzip_core::bundle;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BundleConfig::default();
//! let report = bundle("./models", &config, &mut NoopProgress)?;
//! println!("Archived {} models", report.models_archived);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod collect;
pub mod config;
pub mod entry;
pub mod error;
pub mod list;
pub mod locate;
pub mod manifest;
pub mod report;

pub use api::bundle;
pub use api::bundle_entries;
pub use archive::write_archive;
pub use collect::ModelWalker;
pub use collect::collect_models;
pub use collect::find_collisions;
pub use config::BundleConfig;
pub use entry::Collision;
pub use entry::ModelEntry;
pub use error::ModelZipError;
pub use error::Result;
pub use list::list_models;
pub use locate::ModelLocator;
pub use locate::ModelSource;
pub use manifest::read_manifest;
pub use manifest::write_manifest;
pub use report::BundleReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;
