pub mod formatter;

pub use formatter::{MissingEntryPolicy, ReportFormatter};
