//! Resume signals library
//!
//! Deterministic, pattern-based analysis of resume text, single achievement
//! lines, and job descriptions.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeSignalsError};
pub use processing::{
    KeywordOverlapMatcher, KeywordSet, LineScorer, MatchStrength, OverlapResult,
    ParsedResumeRecord, ResumeAnalyzer, RubricBreakdown, RubricCheck,
};

/// Extract contact fields, skills, bullets, education and a target role from resume text.
pub fn analyze_resume(text: &str) -> ParsedResumeRecord {
    ResumeAnalyzer::new().analyze(text)
}

/// Rubric score (0-100) of one achievement line.
pub fn score_line(line: &str) -> u8 {
    LineScorer.score(line)
}

/// Per-check rubric result of one achievement line.
pub fn score_breakdown(line: &str) -> RubricBreakdown {
    LineScorer.breakdown(line)
}

/// Keyword overlap of a bullet against a job description.
pub fn match_keywords(jd_text: &str, bullet_text: &str) -> OverlapResult {
    KeywordOverlapMatcher.match_keywords(jd_text, bullet_text)
}
