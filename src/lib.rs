//! Resume insight library

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use analysis::analyzer::Analyzer;
pub use analysis::report::AnalysisReport;
pub use config::Config;
pub use error::{Result, ResumeInsightError};
