//! Configuration management for resume signals

use crate::error::{Result, ResumeSignalsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Documents whose trimmed text is shorter than this are rejected before analysis.
    pub min_text_length: usize,
    /// Read an undecodable PDF as raw UTF-8 before giving up on it.
    pub pdf_text_fallback: bool,
    pub enable_cache: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub max_missing_keywords: usize,
    pub score_bullets: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig {
                min_text_length: 30,
                pdf_text_fallback: true,
                enable_cache: true,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                max_missing_keywords: 10,
                score_bullets: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ResumeSignalsError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeSignalsError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-signals")
            .join("config.toml")
    }

    /// Update a single dotted key such as `output.max_missing_keywords`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "input.min_text_length" => self.input.min_text_length = parse_value(key, value)?,
            "input.pdf_text_fallback" => self.input.pdf_text_fallback = parse_value(key, value)?,
            "input.enable_cache" => self.input.enable_cache = parse_value(key, value)?,
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(ResumeSignalsError::Configuration)?
            }
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            "output.max_missing_keywords" => {
                self.output.max_missing_keywords = parse_value(key, value)?
            }
            "output.score_bullets" => self.output.score_bullets = parse_value(key, value)?,
            _ => {
                return Err(ResumeSignalsError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        ResumeSignalsError::Configuration(format!("Invalid value for {}: {}", key, value))
    })
}
