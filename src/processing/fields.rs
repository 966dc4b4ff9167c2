//! Contact and education field extraction

use regex::Regex;
use std::sync::OnceLock;

/// Name patterns, tried in order: labelled name, line-start name, name anywhere.
const NAME_PATTERNS: [&str; 3] = [
    r"(?i)(?:name|contact)[\s:]+([a-z]+\s+[a-z]+)",
    r"(?m)^([A-Z][a-z]+\s+[A-Z][a-z]+)",
    r"([A-Z][a-z]+\s+[A-Z][a-z]+)(?:\s|$)",
];

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Loose digit/punctuation run first, strict NNN-NNN-NNNN second.
const PHONE_PATTERNS: [&str; 2] = [
    r"\+?[0-9\s\-()]{10,15}",
    r"[0-9]{3}[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}",
];

/// Degree keyword ... year, then institution keyword ... year.
const EDUCATION_PATTERNS: [&str; 2] = [
    r"(?i)(?:Bachelor|Master|PhD|B\.?A\.?|B\.?S\.?|M\.?A\.?|M\.?S\.?|MBA).*?[0-9]{4}",
    r"(?i)(?:University|College|Institute).*?[0-9]{4}",
];

struct FieldPatterns {
    name: Vec<Regex>,
    email: Regex,
    phone: Vec<Regex>,
    education: Vec<Regex>,
}

fn patterns() -> &'static FieldPatterns {
    static PATTERNS: OnceLock<FieldPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| FieldPatterns {
        name: compile_all(&NAME_PATTERNS),
        email: Regex::new(EMAIL_PATTERN).expect("Invalid email regex"),
        phone: compile_all(&PHONE_PATTERNS),
        education: compile_all(&EDUCATION_PATTERNS),
    })
}

fn compile_all(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|source| Regex::new(source).expect("Invalid field regex"))
        .collect()
}

/// Pulls contact details and the education line out of free-form text.
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldExtractor;

impl FieldExtractor {
    /// First name-pattern hit whose captured text holds at least two space-separated words.
    ///
    /// Each pattern contributes only its first match; a capture joined by a
    /// newline or tab is rejected and the next pattern is tried.
    pub fn extract_name(&self, text: &str) -> String {
        for pattern in &patterns().name {
            if let Some(captured) = pattern.captures(text).and_then(|caps| caps.get(1)) {
                let candidate = captured.as_str();
                if candidate.split(' ').count() >= 2 {
                    return candidate.trim().to_string();
                }
            }
        }
        String::new()
    }

    pub fn extract_email(&self, text: &str) -> String {
        patterns()
            .email
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// The first pattern that matches at all decides the result, verbatim and trimmed.
    pub fn extract_phone(&self, text: &str) -> String {
        patterns()
            .phone
            .iter()
            .find_map(|pattern| pattern.find(text))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    }

    pub fn extract_education(&self, text: &str) -> String {
        patterns()
            .education
            .iter()
            .find_map(|pattern| pattern.find(text))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    }
}
