//! Output formatters: colored console text and JSON

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::output::report::*;
use crate::processing::{MatchStrength, RubricCheck};
use colored::{Color, Colorize};
use unicode_segmentation::UnicodeSegmentation;

const MAX_LINE_GRAPHEMES: usize = 100;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_resume(&self, report: &ResumeReport) -> Result<String>;
    fn format_score(&self, report: &ScoreReport) -> Result<String>;
    fn format_match(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    max_missing_keywords: usize,
}

/// JSON formatter for piping into other tools
pub struct JsonFormatter {
    pretty: bool,
}

/// Pick the formatter configured for this run
pub fn formatter_for(config: &OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(
            config.color_output,
            config.max_missing_keywords,
        )),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, max_missing_keywords: usize) -> Self {
        Self { use_colors, max_missing_keywords }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_check(&self, check: RubricCheck, passed: bool) -> String {
        let mark = if passed {
            self.colorize("✓", Color::Green)
        } else {
            self.colorize("✗", Color::Red)
        };
        format!("    {} {}\n", mark, check.label())
    }

    fn format_line_score(&self, line_score: &LineScore, with_checks: bool) -> String {
        let mut output = format!(
            "  {:>3}% {} {}\n",
            line_score.score,
            self.format_score_badge(line_score.score),
            truncate_text(&line_score.line, MAX_LINE_GRAPHEMES)
        );
        if with_checks {
            for (check, passed) in line_score.breakdown.checks() {
                output.push_str(&self.format_check(check, passed));
            }
        }
        output
    }

    fn field_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
        if value.is_empty() {
            fallback
        } else {
            value
        }
    }

    fn strength_color(strength: MatchStrength) -> Color {
        match strength {
            MatchStrength::Strong => Color::Green,
            MatchStrength::Partial => Color::Yellow,
            MatchStrength::Weak => Color::Red,
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_resume(&self, report: &ResumeReport) -> Result<String> {
        let record = &report.record;
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME IMPORT"));
        output.push_str(&format!("Source: {} | Generated: {}\n", report.source, report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")));

        output.push_str(&self.format_header("Extracted Information"));
        output.push_str(&format!("  • Name: {}\n", Self::field_or(&record.name, "Not found")));
        output.push_str(&format!("  • Email: {}\n", Self::field_or(&record.email, "Not found")));
        output.push_str(&format!("  • Phone: {}\n", Self::field_or(&record.phone, "Not found")));
        output.push_str(&format!(
            "\nInferred Role: {}\n",
            Self::field_or(&record.inferred_role, "Not determined")
        ));

        let skills = if record.skills.is_empty() {
            "None detected".to_string()
        } else {
            record.skills.join(", ")
        };
        output.push_str(&format!("Skills Found: {}\n", skills));
        output.push_str(&format!(
            "Experience Bullets: {} bullet points extracted\n",
            record.bullets.len()
        ));
        output.push_str(&format!("Education: {}\n", Self::field_or(&record.education, "Not found")));

        if !record.bullets.is_empty() {
            output.push_str(&self.format_header("Bullets"));
            if report.bullet_scores.is_empty() {
                for bullet in &record.bullets {
                    output.push_str(&format!("  • {}\n", truncate_text(bullet, MAX_LINE_GRAPHEMES)));
                }
            } else {
                for line_score in &report.bullet_scores {
                    output.push_str(&self.format_line_score(line_score, false));
                }
            }
        }

        Ok(output)
    }

    fn format_score(&self, report: &ScoreReport) -> Result<String> {
        let mut output = self.format_header("ATS SANITY CHECK");
        let detailed = report.lines.len() == 1;

        for line_score in &report.lines {
            output.push_str(&self.format_line_score(line_score, detailed));
        }

        if !detailed {
            if let Some(average) = report.average_score() {
                output.push_str(&format!("\nAverage: {}% {}\n", average, self.format_score_badge(average)));
            }
        }

        Ok(output)
    }

    fn format_match(&self, report: &MatchReport) -> Result<String> {
        let overlap = &report.overlap;
        let mut output = self.format_header("KEYWORD MATCH");

        output.push_str(&format!("Job description: {}\n", report.job_source));
        output.push_str(&format!("Bullet: {}\n", truncate_text(&report.bullet, MAX_LINE_GRAPHEMES)));
        output.push_str(&format!(
            "\nKeyword Match: {} ({})\n",
            self.colorize(&format!("{}%", overlap.percentage), Self::strength_color(report.strength)),
            report.strength
        ));

        output.push_str("\nMatched Keywords: ");
        if overlap.matched.is_empty() {
            output.push_str("No matches found\n");
        } else {
            output.push_str(&self.colorize(&overlap.matched.join(", "), Color::Green));
            output.push('\n');
        }

        output.push_str("Missing Keywords: ");
        if overlap.missing.is_empty() {
            output.push_str("All keywords matched!\n");
        } else {
            let shown: Vec<&str> = overlap
                .missing
                .iter()
                .take(self.max_missing_keywords)
                .map(String::as_str)
                .collect();
            output.push_str(&self.colorize(&shown.join(", "), Color::Red));
            let hidden = overlap.missing.len() - shown.len();
            if hidden > 0 {
                output.push_str(&format!(" (+{} more)", hidden));
            }
            output.push('\n');
        }

        if !report.focus_keywords.is_empty() {
            output.push_str(&format!("\nFocus on: {}\n", report.focus_keywords.join(", ")));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_resume(&self, report: &ResumeReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_score(&self, report: &ScoreReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_match(&self, report: &MatchReport) -> Result<String> {
        self.to_json(report)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Shorten to `max` graphemes, marking the cut with an ellipsis
pub fn truncate_text(text: &str, max: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max {
        text.to_string()
    } else {
        format!("{}...", graphemes[..max].concat())
    }
}
