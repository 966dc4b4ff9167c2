//! Resume signals: rule-based resume, bullet and job description analysis

use clap::Parser;
use log::{debug, error, info, warn};
use resume_signals::cli::{self, Cli, Commands, ConfigAction};
use resume_signals::config::Config;
use resume_signals::error::{Result, ResumeSignalsError};
use resume_signals::input::InputManager;
use resume_signals::output::{formatter_for, MatchReport, ResumeReport, ScoreReport};
use std::path::{Path, PathBuf};
use std::process;

const RESUME_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown", "docx", "doc"];
const JOB_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        if let Some(hint) = e.remediation() {
            error!("{}", hint);
        }
        process::exit(1);
    }
}

/// Load the configuration and apply command line overrides on top of it.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(format) = &cli.output {
        config.output.format =
            cli::parse_output_format(format).map_err(ResumeSignalsError::InvalidInput)?;
    }
    if cli.no_color {
        config.output.color_output = false;
    }

    Ok(config)
}

async fn run_command(command: Commands, config: Config, config_file: Option<PathBuf>) -> Result<()> {
    let formatter = formatter_for(&config.output);

    match command {
        Commands::Analyze { file } => {
            cli::validate_file_extension(&file, RESUME_EXTENSIONS)
                .map_err(ResumeSignalsError::InvalidInput)?;

            let mut input_manager = InputManager::from_config(&config.input);
            let text = input_manager.extract_text(&file).await?;
            info!("Extracted {} characters from {}", text.len(), file.display());

            let report = ResumeReport::from_text(
                file.display().to_string(),
                &text,
                config.output.score_bullets,
            );
            let missing = report.missing_fields();
            if !missing.is_empty() {
                warn!("Could not determine: {}", missing.join(", "));
            }

            println!("{}", formatter.format_resume(&report)?);
        }

        Commands::Score { line, file } => {
            let report = match (line, file) {
                (_, Some(path)) => {
                    let content = tokio::fs::read_to_string(&path).await?;
                    debug!("Scoring lines from {}", path.display());
                    ScoreReport::from_lines(content.lines())
                }
                (Some(line), None) => ScoreReport::from_lines([line.as_str()]),
                (None, None) => {
                    return Err(ResumeSignalsError::InvalidInput(
                        "Provide a line to score or --file <PATH>".to_string(),
                    ))
                }
            };

            println!("{}", formatter.format_score(&report)?);
        }

        Commands::Match { job, bullet } => {
            cli::validate_file_extension(&job, JOB_EXTENSIONS)
                .map_err(ResumeSignalsError::InvalidInput)?;

            // Short job descriptions are still worth matching.
            let mut input_manager = InputManager::new()
                .with_cache(config.input.enable_cache)
                .with_pdf_fallback(config.input.pdf_text_fallback);
            let jd_text = input_manager.extract_text(&job).await?;

            let report = MatchReport::from_texts(job.display().to_string(), &jd_text, &bullet);
            println!("{}", formatter.format_match(&report)?);
        }

        Commands::Config { action } => {
            let path = config_file.unwrap_or_else(Config::config_path);
            run_config_action(action.unwrap_or(ConfigAction::Show), config, &path)?;
        }
    }

    Ok(())
}

fn run_config_action(action: ConfigAction, mut config: Config, path: &Path) -> Result<()> {
    match action {
        ConfigAction::Show => {
            println!("Configuration ({})\n", path.display());
            println!("Input:");
            println!("  min_text_length: {}", config.input.min_text_length);
            println!("  pdf_text_fallback: {}", config.input.pdf_text_fallback);
            println!("  enable_cache: {}", config.input.enable_cache);
            println!("\nOutput:");
            println!("  format: {:?}", config.output.format);
            println!("  color_output: {}", config.output.color_output);
            println!("  max_missing_keywords: {}", config.output.max_missing_keywords);
            println!("  score_bullets: {}", config.output.score_bullets);
        }

        ConfigAction::Path => {
            println!("{}", path.display());
        }

        ConfigAction::Reset => {
            Config::default().save_to(path)?;
            info!("Configuration reset to defaults: {}", path.display());
        }

        ConfigAction::Set { key, value } => {
            // Command line overrides must not leak into the saved file.
            if path.exists() {
                config = Config::load_from(path)?;
            }
            config.set_value(&key, &value)?;
            config.save_to(path)?;
            info!("Set {} = {}", key, value);
        }
    }

    Ok(())
}
