//! Report building and formatting

pub mod report;
pub mod formatter;

pub use formatter::{formatter_for, OutputFormatter};
pub use report::{LineScore, MatchReport, ResumeReport, ScoreReport};
