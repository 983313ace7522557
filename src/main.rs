//! Resume insight: resume analysis CLI

use clap::Parser;
use log::{error, info};
use resume_insight::analysis::Analyzer;
use resume_insight::cli::{self, Cli, Commands, ConfigAction};
use resume_insight::config::Config;
use resume_insight::error::{Result, ResumeInsightError};
use resume_insight::input::InputManager;
use resume_insight::output::ReportGenerator;
use std::process;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
        } => {
            info!("Starting resume analysis");

            // Validate input files
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ResumeInsightError::InvalidInput(format!("Resume file: {}", e)))?;

            if let Some(job_path) = &job {
                cli::validate_file_extension(job_path, &["txt", "md"]).map_err(|e| {
                    ResumeInsightError::InvalidInput(format!("Job description file: {}", e))
                })?;
            }

            // CLI choice overrides the configured default format
            let output_format = match &output {
                Some(format) => {
                    cli::parse_output_format(format).map_err(ResumeInsightError::InvalidInput)?
                }
                None => config.output.format,
            };

            // Extract text from input files
            let mut input_manager = InputManager::new().with_cache(config.input.enable_cache);
            let resume_text = input_manager.extract_text(&resume)?;
            info!("Resume text length: {} characters", resume_text.len());

            let job_text = match &job {
                Some(job_path) => {
                    let text = input_manager.extract_text(job_path)?;
                    info!("Job description length: {} characters", text.len());
                    text
                }
                None => String::new(),
            };

            // Run the analysis
            let analyzer = Analyzer::new()?;
            let report = analyzer.analyze(&resume_text, &job_text);

            // Render and deliver the report
            let generator =
                ReportGenerator::new(config.output.color_output, config.output.pretty_json);
            let rendered = generator.generate(&report, output_format)?;
            println!("{}", rendered);

            if let Some(save_path) = &save {
                generator.save_to_file(&report, output_format, save_path)?;
                info!("Report saved to {}", save_path.display());
            }

            // An unanalyzable resume is still rendered, but the run fails
            if !report.valid {
                return Err(ResumeInsightError::AnalysisFailed(
                    report
                        .message
                        .unwrap_or_else(|| "Resume could not be analyzed".to_string()),
                ));
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Input:");
                println!("  Cache extracted text: {}", config.input.enable_cache);
                println!("\nOutput:");
                println!("  Default format: {:?}", config.output.format);
                println!("  Color output: {}", config.output.color_output);
                println!("  Pretty JSON: {}", config.output.pretty_json);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::reset()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}
