pub mod args;
pub mod commands;

pub use args::{Cli, Commands, MissingEntryArg};
pub use commands::{run, ReportRequest, ReportSession};
