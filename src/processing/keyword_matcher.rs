//! Keyword overlap between a job description and a bullet

use crate::processing::vocabulary::VocabularyScanner;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

/// Dictionary terms, reported first and in this order.
pub const KEYWORD_VOCABULARY: &[&str] = &[
    "python", "java", "javascript", "react", "node", "sql", "tableau", "excel",
    "powerbi", "figma", "aws", "azure", "docker", "git", "api", "rest",
    "machine learning", "data analysis", "analytics", "statistics", "research",
    "project management", "agile", "scrum", "leadership", "communication",
    "strategy", "consulting", "presentation", "collaboration", "problem solving",
];

pub const STOPWORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had",
    "her", "was", "one", "our", "out", "day", "get", "has", "him", "his",
    "how", "man", "new", "now", "old", "see", "two", "way", "who", "boy",
    "did", "its", "let", "put", "say", "she", "too", "use",
];

/// Terms worth weaving into a tailored bullet, in priority order.
pub const TAILORING_VOCABULARY: &[&str] = &[
    "python", "sql", "tableau", "excel", "powerbi", "analytics", "data", "analysis",
    "react", "javascript", "node", "api", "aws", "cloud", "agile", "scrum",
    "leadership", "communication", "collaboration", "problem solving", "strategy",
];

pub const MAX_FREE_TOKENS: usize = 20;
pub const MAX_TAILORING_KEYWORDS: usize = 3;
/// Free tokens must be longer than this.
const MIN_FREE_TOKEN_LEN: usize = 3;

fn keyword_scanner() -> &'static VocabularyScanner {
    static SCANNER: OnceLock<VocabularyScanner> = OnceLock::new();
    SCANNER.get_or_init(|| VocabularyScanner::new(KEYWORD_VOCABULARY))
}

fn tailoring_scanner() -> &'static VocabularyScanner {
    static SCANNER: OnceLock<VocabularyScanner> = OnceLock::new();
    SCANNER.get_or_init(|| VocabularyScanner::new(TAILORING_VOCABULARY))
}

/// Runs of ASCII word characters; anything else, accented letters included, separates words.
fn word_run_regex() -> &'static Regex {
    static WORD_RUN: OnceLock<Regex> = OnceLock::new();
    WORD_RUN.get_or_init(|| Regex::new(r"(?-u:\w)+").expect("Invalid word regex"))
}

fn is_plain_word(run: &str) -> bool {
    run.bytes().all(|b| b.is_ascii_lowercase())
}

/// Ordered lowercase keywords of one text.
///
/// A word can appear twice: once as a dictionary hit and once as a free token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.iter().any(|k| k == keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapResult {
    pub percentage: u8,
    /// Job keywords also found in the bullet, in job keyword order.
    pub matched: Vec<String>,
    /// Job keywords absent from the bullet, in job keyword order.
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStrength {
    Strong,
    Partial,
    Weak,
}

impl MatchStrength {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            61..=u8::MAX => MatchStrength::Strong,
            31..=60 => MatchStrength::Partial,
            _ => MatchStrength::Weak,
        }
    }
}

impl fmt::Display for MatchStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchStrength::Strong => "Strong",
            MatchStrength::Partial => "Partial",
            MatchStrength::Weak => "Weak",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordOverlapMatcher;

impl KeywordOverlapMatcher {
    /// Dictionary hits in vocabulary order, then up to [`MAX_FREE_TOKENS`] distinct
    /// words of four or more letters in order of first appearance, dictionary words included.
    pub fn extract_keywords(&self, text: &str) -> KeywordSet {
        let lower_text = text.to_lowercase();

        let mut keywords: Vec<String> = keyword_scanner()
            .find_all(&lower_text)
            .into_iter()
            .map(String::from)
            .collect();

        // Free tokens are de-duplicated among themselves only.
        let mut seen = HashSet::new();
        let free_tokens: Vec<String> = word_run_regex()
            .find_iter(&lower_text)
            .map(|m| m.as_str())
            .filter(|word| is_plain_word(word))
            .filter(|word| word.len() > MIN_FREE_TOKEN_LEN && !STOPWORDS.contains(word))
            .filter(|word| seen.insert(*word))
            .take(MAX_FREE_TOKENS)
            .map(String::from)
            .collect();

        keywords.extend(free_tokens);
        KeywordSet(keywords)
    }

    pub fn match_keywords(&self, jd_text: &str, bullet_text: &str) -> OverlapResult {
        if jd_text.trim().is_empty() {
            return OverlapResult::default();
        }

        let jd_keywords = self.extract_keywords(jd_text);
        let bullet_keywords = self.extract_keywords(bullet_text);

        let (matched, missing): (Vec<String>, Vec<String>) = jd_keywords
            .as_slice()
            .iter()
            .cloned()
            .partition(|keyword| bullet_keywords.contains(keyword));

        let percentage = if jd_keywords.is_empty() {
            0
        } else {
            (matched.len() as f64 / jd_keywords.len() as f64 * 100.0).round() as u8
        };

        debug!(
            "Keyword overlap {}% ({} of {} job keywords)",
            percentage,
            matched.len(),
            jd_keywords.len()
        );

        OverlapResult { percentage, matched, missing }
    }

    /// Up to three high-value terms from a job description to work into a bullet.
    pub fn tailoring_keywords(&self, jd_text: &str) -> Vec<&'static str> {
        let mut keywords = tailoring_scanner().find_all(jd_text);
        keywords.truncate(MAX_TAILORING_KEYWORDS);
        keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_description_scenario() {
        let result = KeywordOverlapMatcher.match_keywords(
            "Looking for a Python developer with SQL and AWS experience",
            "Developed Python pipelines",
        );

        assert_eq!(result.matched, vec!["python", "python"]);
        assert_eq!(
            result.missing,
            vec!["sql", "aws", "looking", "developer", "with", "experience"]
        );
        assert_eq!(result.percentage, 25);
    }

    #[test]
    fn test_blank_job_description() {
        for jd in ["", "   \n\t"] {
            let result = KeywordOverlapMatcher.match_keywords(jd, "Developed Python pipelines");
            assert_eq!(result, OverlapResult::default());
            assert_eq!(result.percentage, 0);
        }
    }

    #[test]
    fn test_matched_and_missing_partition_job_keywords() {
        let jd = "Data analyst: statistics, Tableau dashboards, stakeholder presentations, agile delivery";
        let bullet = "Built Tableau dashboards and presented statistics to stakeholders";
        let jd_keywords = KeywordOverlapMatcher.extract_keywords(jd);
        let result = KeywordOverlapMatcher.match_keywords(jd, bullet);

        assert_eq!(result.matched.len() + result.missing.len(), jd_keywords.len());
        for keyword in jd_keywords.iter() {
            let in_matched = result.matched.iter().any(|k| k == keyword);
            let in_missing = result.missing.iter().any(|k| k == keyword);
            assert!(in_matched != in_missing, "keyword {} must land in exactly one list", keyword);
        }
        assert!(result.matched.contains(&"tableau".to_string()));
        assert!(result.missing.contains(&"agile".to_string()));
    }

    #[test]
    fn test_job_keywords_without_free_tokens() {
        // Only three-letter words: no free tokens, no dictionary hits.
        let result = KeywordOverlapMatcher.match_keywords("the and for", "anything");
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
        assert_eq!(result.percentage, 0);
    }

    #[test]
    fn test_extract_keywords_order_and_filters() {
        let keywords = KeywordOverlapMatcher.extract_keywords(
            "Machine learning team seeks engineers. Engineers use Docker; the team ships weekly.",
        );

        assert_eq!(
            keywords.as_slice(),
            &["docker", "machine learning", "machine", "learning", "team", "seeks", "engineers", "docker", "ships", "weekly"]
        );
    }

    #[test]
    fn test_dictionary_hit_repeats_as_free_token() {
        let keywords = KeywordOverlapMatcher.extract_keywords("Python python");
        assert_eq!(keywords.as_slice(), &["python", "python"]);
    }

    #[test]
    fn test_accented_letters_split_words() {
        let keywords = KeywordOverlapMatcher.extract_keywords("développeur senior");
        assert_eq!(keywords.as_slice(), &["veloppeur", "senior"]);

        // Digits glue onto a run, so "sql2022" is no free token.
        let keywords = KeywordOverlapMatcher.extract_keywords("migrated sql2022 clusters");
        assert_eq!(keywords.as_slice(), &["sql", "migrated", "clusters"]);
    }

    #[test]
    fn test_free_tokens_capped_at_twenty() {
        let text = ["alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima",
            "mike november oscar papa quebec romeo sierra tango uniform victor whiskey xray"]
            .join(" ");
        let keywords = KeywordOverlapMatcher.extract_keywords(&text);

        assert_eq!(keywords.len(), MAX_FREE_TOKENS);
        assert_eq!(keywords.iter().next(), Some("alpha"));
        assert!(!keywords.contains("xray"));
    }

    #[test]
    fn test_match_strength_bands() {
        assert_eq!(MatchStrength::from_percentage(100), MatchStrength::Strong);
        assert_eq!(MatchStrength::from_percentage(61), MatchStrength::Strong);
        assert_eq!(MatchStrength::from_percentage(60), MatchStrength::Partial);
        assert_eq!(MatchStrength::from_percentage(31), MatchStrength::Partial);
        assert_eq!(MatchStrength::from_percentage(30), MatchStrength::Weak);
        assert_eq!(MatchStrength::from_percentage(0), MatchStrength::Weak);
    }

    #[test]
    fn test_tailoring_keywords() {
        let jd = "Strategy team needs SQL, Python and Tableau skills plus agile habits";
        assert_eq!(KeywordOverlapMatcher.tailoring_keywords(jd), vec!["python", "sql", "tableau"]);
        assert!(KeywordOverlapMatcher.tailoring_keywords("Barista wanted").is_empty());
    }
}
