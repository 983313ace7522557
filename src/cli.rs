//! CLI interface for resume insight

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-insight")]
#[command(about = "Resume analysis tool: skills, ATS score, and job matching")]
#[command(
    long_about = "Analyze a resume for detected skills, ATS compatibility, and overlap with a job description"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume, optionally against a job description
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Output format: console, json, markdown (defaults to the
        /// configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert!(matches!(
            parse_output_format("console"),
            Ok(OutputFormat::Console)
        ));
        assert!(matches!(parse_output_format("JSON"), Ok(OutputFormat::Json)));
        assert!(matches!(
            parse_output_format("md"),
            Ok(OutputFormat::Markdown)
        ));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let path = PathBuf::from("resume.pdf");
        assert!(validate_file_extension(&path, &["pdf", "txt", "md"]).is_ok());
        assert!(validate_file_extension(&path, &["txt", "md"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("resume"), &["txt"]).is_err());
    }
}
