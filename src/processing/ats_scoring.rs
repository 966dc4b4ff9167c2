//! ATS (Applicant Tracking System) rubric scoring for a single bullet line
//!
//! Six independent pass/fail checks, each worth a sixth of the score. The
//! total is rounded once, after summing, never per check.

use crate::processing::bullets::starts_with_verb;
use crate::processing::vocabulary::VocabularyScanner;
use log::debug;
use regex::RegexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

pub const RUBRIC_ACTION_VERBS: &[&str] = &[
    "Analyzed", "Developed", "Created", "Led", "Managed", "Implemented",
    "Designed", "Built", "Improved", "Increased", "Decreased", "Optimized",
    "Streamlined", "Generated", "Delivered", "Executed", "Coordinated",
    "Established", "Enhanced", "Facilitated", "Supervised", "Leveraged",
];

pub const RUBRIC_KEYWORDS: &[&str] = &[
    "python", "sql", "tableau", "excel", "powerbi", "analytics", "data",
    "react", "javascript", "api", "aws", "cloud", "agile", "scrum",
    "leadership", "communication", "collaboration", "strategy", "analysis",
    "research", "presentation", "project management", "problem solving",
];

pub const FIRST_PERSON_WORDS: &[&str] = &["i", "my", "we", "our", "me", "myself", "us", "ourselves"];

/// Participle words are ASCII word characters only.
pub const PASSIVE_VOICE_PATTERNS: [&str; 5] = [
    r"(?i)was\s+(?-u:\w)+ed",
    r"(?i)were\s+(?-u:\w)+ed",
    r"(?i)been\s+(?-u:\w)+ed",
    r"(?i)is\s+(?-u:\w)+ed",
    r"(?i)are\s+(?-u:\w)+ed",
];

pub const MAX_WORDS: usize = 22;
const CHECK_COUNT: u32 = 6;

fn keyword_scanner() -> &'static VocabularyScanner {
    static SCANNER: OnceLock<VocabularyScanner> = OnceLock::new();
    SCANNER.get_or_init(|| VocabularyScanner::new(RUBRIC_KEYWORDS))
}

fn passive_voice() -> &'static RegexSet {
    static PASSIVE: OnceLock<RegexSet> = OnceLock::new();
    PASSIVE.get_or_init(|| RegexSet::new(PASSIVE_VOICE_PATTERNS).expect("Invalid passive voice regex"))
}

/// The six rubric checks, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RubricCheck {
    ActionVerb,
    Numbers,
    Keywords,
    Length,
    NoFirstPerson,
    ActiveVoice,
}

impl RubricCheck {
    pub const ALL: [RubricCheck; 6] = [
        RubricCheck::ActionVerb,
        RubricCheck::Numbers,
        RubricCheck::Keywords,
        RubricCheck::Length,
        RubricCheck::NoFirstPerson,
        RubricCheck::ActiveVoice,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RubricCheck::ActionVerb => "Action verb at start",
            RubricCheck::Numbers => "Numbers/metrics present",
            RubricCheck::Keywords => "Target keywords included",
            RubricCheck::Length => "Reasonable length (≤22 words)",
            RubricCheck::NoFirstPerson => "No first-person (I/my/we/our)",
            RubricCheck::ActiveVoice => "Active voice preferred",
        }
    }
}

impl fmt::Display for RubricCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricBreakdown {
    pub action_verb: bool,
    pub numbers: bool,
    pub keywords: bool,
    pub length: bool,
    pub no_first_person: bool,
    pub active_voice: bool,
    /// 0..=100; always 0 for blank input.
    pub total: u8,
}

impl RubricBreakdown {
    pub fn check(&self, check: RubricCheck) -> bool {
        match check {
            RubricCheck::ActionVerb => self.action_verb,
            RubricCheck::Numbers => self.numbers,
            RubricCheck::Keywords => self.keywords,
            RubricCheck::Length => self.length,
            RubricCheck::NoFirstPerson => self.no_first_person,
            RubricCheck::ActiveVoice => self.active_voice,
        }
    }

    pub fn checks(&self) -> impl Iterator<Item = (RubricCheck, bool)> + '_ {
        RubricCheck::ALL.into_iter().map(move |check| (check, self.check(check)))
    }

    pub fn passed(&self) -> u32 {
        self.checks().filter(|(_, passed)| *passed).count() as u32
    }
}

/// Scores one achievement line against the rubric.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineScorer;

impl LineScorer {
    pub fn score(&self, line: &str) -> u8 {
        self.breakdown(line).total
    }

    pub fn breakdown(&self, line: &str) -> RubricBreakdown {
        let mut breakdown = RubricBreakdown {
            action_verb: has_action_verb_at_start(line),
            numbers: has_numbers(line),
            keywords: has_relevant_keywords(line),
            length: has_reasonable_length(line),
            no_first_person: !has_first_person(line),
            active_voice: !has_passive_voice(line),
            total: 0,
        };

        if !line.trim().is_empty() {
            breakdown.total = scale(breakdown.passed());
        }

        debug!("Rubric score {} for line of {} chars", breakdown.total, line.len());
        breakdown
    }
}

fn scale(passed: u32) -> u8 {
    (passed as f64 / CHECK_COUNT as f64 * 100.0).round() as u8
}

fn has_action_verb_at_start(line: &str) -> bool {
    starts_with_verb(line.trim(), RUBRIC_ACTION_VERBS)
}

fn has_numbers(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_digit())
}

fn has_relevant_keywords(line: &str) -> bool {
    keyword_scanner().contains_any(line)
}

fn has_reasonable_length(line: &str) -> bool {
    let word_count = line.split_whitespace().count();
    word_count > 0 && word_count <= MAX_WORDS
}

fn has_first_person(line: &str) -> bool {
    line.to_lowercase()
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .any(|word| FIRST_PERSON_WORDS.contains(&word))
}

fn has_passive_voice(line: &str) -> bool {
    passive_voice().is_match(line)
}
