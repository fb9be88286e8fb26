//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use modelzip_core::config::DEFAULT_ARCHIVE_PATH;
use modelzip_core::config::DEFAULT_MANIFEST_PATH;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "modelzip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect every model.xml below a directory into an archive and manifest
    Bundle(BundleArgs),
    /// List the models stored in a bundle archive
    List(ListArgs),
    /// Find a model by name in a models directory
    Locate(LocateArgs),
    /// Generate shell completion scripts
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct BundleArgs {
    /// Root directory to scan for model.xml files
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Output archive path
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_ARCHIVE_PATH)]
    pub archive: PathBuf,

    /// Output manifest path
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_MANIFEST_PATH)]
    pub manifest: PathBuf,

    /// Compression level (0 = store, 1-9 = deflate)
    #[arg(
        short = 'l',
        long,
        default_value = "6",
        value_parser = clap::value_parser!(u8).range(0..=9)
    )]
    pub compression_level: u8,

    /// Follow symbolic links while scanning
    #[arg(long)]
    pub follow_symlinks: bool,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Path to the bundle archive
    #[arg(value_name = "ARCHIVE", default_value = DEFAULT_ARCHIVE_PATH)]
    pub archive: PathBuf,
}

#[derive(clap::Args)]
pub struct LocateArgs {
    /// Model name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Directory holding model folders, model files or zip archives
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub models: PathBuf,

    /// Print the model content instead of its location
    #[arg(short, long)]
    pub print: bool,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
