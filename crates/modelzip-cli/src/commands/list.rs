//! List command implementation

use crate::cli::ListArgs;
use crate::error::add_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use modelzip_core::list_models;

pub fn execute(args: &ListArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let names = add_context(list_models(&args.archive), &args.archive)?;
    formatter.format_model_list(&args.archive, &names)
}
