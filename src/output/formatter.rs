//! Output formatters: console, JSON, and Markdown renderings of the
//! analysis report.

use crate::analysis::report::AnalysisReport;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and a score badge
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and saved reports
pub struct MarkdownFormatter;

/// Coordinates the individual formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {}\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));

        if !report.valid {
            let message = report.message.as_deref().unwrap_or("Invalid resume");
            output.push_str(&format!(
                "\n{} {}\n",
                self.colorize("✗", Color::Red),
                self.colorize(message, Color::Red)
            ));
            return Ok(output);
        }

        // Summary
        output.push_str(&self.format_header("Summary", 2));
        let badge = self.format_score_badge(report.ats_score);
        output.push_str(&format!("ATS Score: {}% {}\n", report.ats_score, badge));
        output.push_str(&format!("Word count: {}\n", report.word_count));
        output.push_str(&format!("Distinct skills: {}\n", report.skill_count));
        if report.experience_years > 0 {
            output.push_str(&format!("Experience: {} years\n", report.experience_years));
        }

        // Skills by category
        if !report.skills.is_empty() {
            output.push_str(&self.format_header("🛠  Detected Skills", 2));
            for (category, names) in &report.skills {
                output.push_str(&format!(
                    "  {} {}\n",
                    self.colorize(category, Color::Cyan),
                    names.join(", ")
                ));
            }
        }

        // Professional keywords
        if !report.keywords.is_empty() {
            output.push_str(&self.format_header("Professional Keywords", 3));
            output.push_str(&format!("  {}\n", report.keywords.join(", ")));
        }

        // Job match
        if let Some(job) = &report.job_analysis {
            output.push_str(&self.format_header("💼 Job Match", 2));
            let badge = self.format_score_badge(job.match_score);
            output.push_str(&format!("Match score: {}% {}\n", job.match_score, badge));
            output.push_str(&format!(
                "Job keywords considered: {}\n",
                job.total_job_keywords
            ));
            if !job.matched_keywords.is_empty() {
                output.push_str(&format!(
                    "  {} {}\n",
                    self.colorize("Matched:", Color::Green),
                    job.matched_keywords.join(", ")
                ));
            }
            if !job.missing_keywords.is_empty() {
                output.push_str(&format!(
                    "  {} {}\n",
                    self.colorize("Missing:", Color::Yellow),
                    job.missing_keywords.join(", ")
                ));
            }
        }

        // Recommendations
        output.push_str(&self.format_header("📋 Recommendations", 2));
        for (i, rec) in report.recommendations.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, rec));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Resume Analysis Report\n\n");
        output.push_str(&format!(
            "Generated: {}\n\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));

        if !report.valid {
            let message = report.message.as_deref().unwrap_or("Invalid resume");
            output.push_str(&format!("**Analysis failed:** {}\n", message));
            return Ok(output);
        }

        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Value |\n|---|---|\n");
        output.push_str(&format!("| ATS score | {}% |\n", report.ats_score));
        output.push_str(&format!("| Word count | {} |\n", report.word_count));
        output.push_str(&format!("| Distinct skills | {} |\n", report.skill_count));
        output.push_str(&format!(
            "| Experience | {} years |\n\n",
            report.experience_years
        ));

        if !report.skills.is_empty() {
            output.push_str("## Detected Skills\n\n");
            for (category, names) in &report.skills {
                output.push_str(&format!("- **{}**: {}\n", category, names.join(", ")));
            }
            output.push('\n');
        }

        if !report.keywords.is_empty() {
            output.push_str("## Professional Keywords\n\n");
            output.push_str(&format!("{}\n\n", report.keywords.join(", ")));
        }

        if let Some(job) = &report.job_analysis {
            output.push_str("## Job Match\n\n");
            output.push_str(&format!(
                "Match score: **{}%** ({} job keywords considered)\n\n",
                job.match_score, job.total_job_keywords
            ));
            if !job.matched_keywords.is_empty() {
                output.push_str(&format!("- Matched: {}\n", job.matched_keywords.join(", ")));
            }
            if !job.missing_keywords.is_empty() {
                output.push_str(&format!("- Missing: {}\n", job.missing_keywords.join(", ")));
            }
            output.push('\n');
        }

        output.push_str("## Recommendations\n\n");
        for rec in &report.recommendations {
            output.push_str(&format!("1. {}\n", rec));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter,
        }
    }

    pub fn generate(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }

    pub fn save_to_file(
        &self,
        report: &AnalysisReport,
        format: OutputFormat,
        path: &Path,
    ) -> Result<()> {
        let content = self.generate(report, format)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analyzer;

    fn sample_report() -> AnalysisReport {
        let text = format!(
            "Experienced Python and Docker engineer; led and developed services. {}",
            "detail ".repeat(60)
        );
        Analyzer::new().unwrap().analyze(&text, "python rust kafka")
    }

    #[test]
    fn test_console_output_mentions_scores() {
        let formatter = ConsoleFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("ATS Score:"));
        assert!(output.contains("Match score:"));
        assert!(output.contains("Recommendations"));
    }

    #[test]
    fn test_json_output_roundtrips() {
        let formatter = JsonFormatter::new(true);
        let json = formatter.format_report(&sample_report()).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert!(parsed.valid);
        assert!(parsed.job_analysis.is_some());
    }

    #[test]
    fn test_markdown_output_structure() {
        let output = MarkdownFormatter.format_report(&sample_report()).unwrap();
        assert!(output.starts_with("# Resume Analysis Report"));
        assert!(output.contains("## Detected Skills"));
        assert!(output.contains("## Recommendations"));
    }

    #[test]
    fn test_invalid_report_rendering() {
        let report = AnalysisReport::invalid(
            2,
            "Resume too short (2 words). Minimum 50 required.".to_string(),
        );
        let console = ConsoleFormatter::new(false).format_report(&report).unwrap();
        assert!(console.contains("too short"));
        let md = MarkdownFormatter.format_report(&report).unwrap();
        assert!(md.contains("Analysis failed"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::new(false, true);
        let report = sample_report();
        assert!(generator.generate(&report, OutputFormat::Console).is_ok());
        assert!(generator.generate(&report, OutputFormat::Json).is_ok());
        assert!(generator.generate(&report, OutputFormat::Markdown).is_ok());
    }
}
