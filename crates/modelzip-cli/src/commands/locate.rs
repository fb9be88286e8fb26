//! Locate command implementation.

use crate::cli::LocateArgs;
use crate::error::add_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use modelzip_core::ModelLocator;
use std::io::Write;
use std::io::{self};

pub fn execute(args: &LocateArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let locator = ModelLocator::new(&args.models);

    if args.print {
        let content = add_context(locator.read(&args.name), &args.models)?;
        io::stdout()
            .write_all(&content)
            .context("failed to write model to stdout")?;
        return Ok(());
    }

    let source = add_context(locator.locate(&args.name), &args.models)?;
    formatter.format_located(&args.name, &source)
}
