//! Subcommand implementations.

pub mod bundle;
pub mod completion;
pub mod list;
pub mod locate;
