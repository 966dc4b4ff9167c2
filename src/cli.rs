//! CLI interface for resume signals

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-signals")]
#[command(about = "Rule-based resume, bullet and job description analysis")]
#[command(long_about = "Extract contact fields, skills and bullets from a resume, score achievement lines against an ATS rubric, and measure keyword overlap with a job description")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: console, json (overrides the configuration)
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Disable colored console output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract structured fields from a resume
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        file: PathBuf,
    },

    /// Score achievement lines against the ATS rubric
    Score {
        /// The line to score
        line: Option<String>,

        /// Score every non-blank line of a text file instead
        #[arg(short, long, conflicts_with = "line")]
        file: Option<PathBuf>,
    },

    /// Measure keyword overlap between a job description and a bullet
    Match {
        /// Path to job description file (TXT, MD, PDF)
        #[arg(short, long)]
        job: PathBuf,

        /// Bullet text to compare against the job description
        #[arg(short, long)]
        bullet: String,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "input.min_text_length")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.trim().to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
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
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["pdf", "txt", "md"];
        assert!(validate_file_extension(Path::new("resume.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("resume.docx"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("resume"), &allowed).is_err());
    }

    #[test]
    fn test_cli_parses_score_command() {
        let cli = Cli::try_parse_from(["resume-signals", "-o", "json", "score", "Led a team of 4"]).unwrap();
        assert_eq!(cli.output.as_deref(), Some("json"));
        match cli.command {
            Commands::Score { line, file } => {
                assert_eq!(line.as_deref(), Some("Led a team of 4"));
                assert!(file.is_none());
            }
            _ => panic!("expected score command"),
        }
    }
}
