//! Report formatting and output

pub mod formatter;

pub use formatter::{OutputFormatter, ReportGenerator};
