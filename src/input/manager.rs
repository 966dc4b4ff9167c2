//! Input manager for handling different file types

use crate::config::InputConfig;
use crate::error::{Result, ResumeSignalsError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    pdf_text_fallback: bool,
    min_text_length: Option<usize>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
            pdf_text_fallback: true,
            min_text_length: None,
        }
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self::new()
            .with_cache(config.enable_cache)
            .with_pdf_fallback(config.pdf_text_fallback)
            .with_min_text_length(config.min_text_length)
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub fn with_pdf_fallback(mut self, enable: bool) -> Self {
        self.pdf_text_fallback = enable;
        self
    }

    /// Reject extracted text whose trimmed length is below `min`.
    pub fn with_min_text_length(mut self, min: usize) -> Self {
        self.min_text_length = Some(min);
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        // Check cache first
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeSignalsError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match self.detect_file_type(path)? {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor { text_fallback: self.pdf_text_fallback }.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::WordDocument => {
                return Err(ResumeSignalsError::UnsupportedFormat(format!(
                    "Word documents cannot be decoded directly: {}",
                    path.display()
                )));
            }
            FileType::Unknown => {
                return Err(ResumeSignalsError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        self.ensure_readable(path, &text)?;

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn ensure_readable(&self, path: &Path, text: &str) -> Result<()> {
        if let Some(min) = self.min_text_length {
            let length = text.trim().chars().count();
            if length < min {
                return Err(ResumeSignalsError::NoExtractableText(format!(
                    "{} yielded {} characters (minimum {})",
                    path.display(),
                    length,
                    min
                )));
            }
        }
        Ok(())
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ResumeSignalsError::InvalidInput(
                format!("File has no extension: {}", path.display())
            ))?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
