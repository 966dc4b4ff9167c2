//! Text analysis core: field, skill and bullet extraction, role inference,
//! rubric scoring and keyword overlap. Every operation is a pure function of
//! its input text and never fails.

pub mod vocabulary;
pub mod fields;
pub mod skills;
pub mod bullets;
pub mod role;
pub mod resume;
pub mod ats_scoring;
pub mod keyword_matcher;

pub use ats_scoring::{LineScorer, RubricBreakdown, RubricCheck};
pub use keyword_matcher::{KeywordOverlapMatcher, KeywordSet, MatchStrength, OverlapResult};
pub use resume::{ParsedResumeRecord, ResumeAnalyzer};
