//! Text extraction from various file formats

use crate::error::{Result, ResumeSignalsError};
use log::{debug, warn};
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tokio::fs;

/// Raw bytes read as text must contain at least this much to count as a PDF fallback.
const MIN_FALLBACK_TEXT: usize = 10;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor {
    pub text_fallback: bool,
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self { text_fallback: true }
    }
}

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        match pdf_extract::extract_text_from_mem(&bytes) {
            Ok(text) => Ok(text),
            Err(e) if self.text_fallback => {
                warn!("PDF decoding failed for {}, trying raw text: {}", path.display(), e);
                Self::raw_text_fallback(&bytes).ok_or_else(|| {
                    ResumeSignalsError::PdfExtraction(format!(
                        "Could not extract text from '{}': {}",
                        path.display(),
                        e
                    ))
                })
            }
            Err(e) => Err(ResumeSignalsError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))),
        }
    }
}

impl PdfExtractor {
    fn raw_text_fallback(bytes: &[u8]) -> Option<String> {
        let text = std::str::from_utf8(bytes).ok()?;
        if text.trim().chars().count() >= MIN_FALLBACK_TEXT {
            debug!("Using raw text fallback ({} bytes)", bytes.len());
            Some(text.to_string())
        } else {
            None
        }
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(self.markdown_to_text(&markdown_content))
    }
}

impl MarkdownExtractor {
    pub fn markdown_to_text(&self, markdown: &str) -> String {
        let parser = Parser::new(markdown);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        self.html_to_text(&html_output)
    }

    fn html_to_text(&self, html: &str) -> String {
        // List items keep a bullet glyph so achievement lines survive the conversion.
        let text = html
            .replace("<li>", "• ")
            .replace("<br>", "\n")
            .replace("<br />", "\n")
            .replace("</p>", "\n\n")
            .replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let clean_text = tag_regex().replace_all(&text, "").replace("&amp;", "&");

        let lines: Vec<&str> = clean_text
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text() {
        let markdown = "# Jane Smith\n\n**Skills:** Python & SQL\n\n- Built dashboards in Tableau for 3 teams\n";
        let text = MarkdownExtractor.markdown_to_text(markdown);

        assert!(text.starts_with("Jane Smith"));
        assert!(text.contains("Skills: Python & SQL"));
        assert!(text.contains("• Built dashboards in Tableau for 3 teams"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
    }

    #[test]
    fn test_raw_text_fallback() {
        assert!(PdfExtractor::raw_text_fallback(b"short").is_none());
        assert!(PdfExtractor::raw_text_fallback(&[0xff, 0xfe, 0x00]).is_none());
        assert_eq!(
            PdfExtractor::raw_text_fallback(b"Jane Smith - Data Analyst").as_deref(),
            Some("Jane Smith - Data Analyst")
        );
    }
}
