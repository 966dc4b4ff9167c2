//! Report structures for each analysis entry point

use crate::processing::{
    KeywordOverlapMatcher, LineScorer, MatchStrength, OverlapResult, ParsedResumeRecord,
    ResumeAnalyzer, RubricBreakdown,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resume import result, optionally with the rubric score of every extracted bullet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeReport {
    /// Where the text came from (usually a file path)
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub record: ParsedResumeRecord,
    pub bullet_scores: Vec<LineScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineScore {
    pub line: String,
    pub score: u8,
    pub breakdown: RubricBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub generated_at: DateTime<Utc>,
    pub lines: Vec<LineScore>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub generated_at: DateTime<Utc>,
    pub job_source: String,
    pub bullet: String,
    pub overlap: OverlapResult,
    pub strength: MatchStrength,
    /// Job description terms worth working into the bullet
    pub focus_keywords: Vec<String>,
}

impl LineScore {
    pub fn new(line: &str) -> Self {
        let breakdown = LineScorer.breakdown(line);
        Self {
            line: line.trim().to_string(),
            score: breakdown.total,
            breakdown,
        }
    }
}

impl ResumeReport {
    pub fn from_text(source: impl Into<String>, text: &str, score_bullets: bool) -> Self {
        let record = ResumeAnalyzer::new().analyze(text);
        let bullet_scores = if score_bullets {
            record.bullets.iter().map(|bullet| LineScore::new(bullet)).collect()
        } else {
            Vec::new()
        };

        Self {
            source: source.into(),
            generated_at: Utc::now(),
            record,
            bullet_scores,
        }
    }

    /// Fields that came back empty, by display name
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let record = &self.record;
        [
            ("Name", record.name.is_empty()),
            ("Email", record.email.is_empty()),
            ("Phone", record.phone.is_empty()),
            ("Education", record.education.is_empty()),
            ("Role", record.inferred_role.is_empty()),
        ]
        .into_iter()
        .filter_map(|(field, missing)| missing.then_some(field))
        .collect()
    }
}

impl ScoreReport {
    /// Scores each non-blank line; a single blank line still yields one zero entry.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let all: Vec<&str> = lines.into_iter().collect();
        let non_blank: Vec<&str> = all.iter().copied().filter(|l| !l.trim().is_empty()).collect();

        let lines = if non_blank.is_empty() {
            all.first().map(|l| vec![LineScore::new(l)]).unwrap_or_default()
        } else {
            non_blank.into_iter().map(LineScore::new).collect()
        };

        Self {
            generated_at: Utc::now(),
            lines,
        }
    }

    pub fn average_score(&self) -> Option<u8> {
        if self.lines.is_empty() {
            return None;
        }
        let sum: u32 = self.lines.iter().map(|l| l.score as u32).sum();
        Some((sum as f64 / self.lines.len() as f64).round() as u8)
    }
}

impl MatchReport {
    pub fn from_texts(job_source: impl Into<String>, jd_text: &str, bullet: &str) -> Self {
        let matcher = KeywordOverlapMatcher;
        let overlap = matcher.match_keywords(jd_text, bullet);
        let strength = MatchStrength::from_percentage(overlap.percentage);
        let focus_keywords = matcher
            .tailoring_keywords(jd_text)
            .into_iter()
            .map(String::from)
            .collect();

        Self {
            generated_at: Utc::now(),
            job_source: job_source.into(),
            bullet: bullet.to_string(),
            overlap,
            strength,
            focus_keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_report_scores_bullets() {
        let text = "Jane Smith\n- Built a Python ETL job that cut reporting time by 30%";
        let report = ResumeReport::from_text("resume.txt", text, true);

        assert_eq!(report.bullet_scores.len(), 1);
        assert_eq!(report.bullet_scores[0].score, 100);
        assert_eq!(report.missing_fields(), vec!["Email", "Phone", "Education"]);

        let unscored = ResumeReport::from_text("resume.txt", text, false);
        assert!(unscored.bullet_scores.is_empty());
    }

    #[test]
    fn test_score_report_skips_blank_lines() {
        let report = ScoreReport::from_lines("Led a team of 4\n\n   \nI did stuff".lines());
        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[0].line, "Led a team of 4");

        let blank = ScoreReport::from_lines([""]);
        assert_eq!(blank.lines.len(), 1);
        assert_eq!(blank.average_score(), Some(0));
    }

    #[test]
    fn test_match_report() {
        let report = MatchReport::from_texts(
            "job.txt",
            "Looking for a Python developer with SQL and AWS experience",
            "Developed Python pipelines",
        );

        assert_eq!(report.overlap.percentage, 25);
        assert_eq!(report.strength, MatchStrength::Weak);
        assert_eq!(report.focus_keywords, vec!["python", "sql", "aws"]);
    }
}
