//! Resume analysis: runs every extractor over one text and assembles the record

use crate::processing::bullets::BulletExtractor;
use crate::processing::fields::FieldExtractor;
use crate::processing::role::RoleInferencer;
use crate::processing::skills::SkillExtractor;
use log::debug;
use serde::{Deserialize, Serialize};

/// Structured view of a resume. Empty strings and empty lists mean "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub bullets: Vec<String>,
    pub education: String,
    pub inferred_role: String,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ResumeAnalyzer {
    fields: FieldExtractor,
    skills: SkillExtractor,
    bullets: BulletExtractor,
    roles: RoleInferencer,
}

impl ResumeAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total over any input, including the empty string.
    pub fn analyze(&self, text: &str) -> ParsedResumeRecord {
        let record = ParsedResumeRecord {
            name: self.fields.extract_name(text),
            email: self.fields.extract_email(text),
            phone: self.fields.extract_phone(text),
            skills: self.skills.extract_skills(text),
            bullets: self.bullets.extract_bullets(text),
            education: self.fields.extract_education(text),
            inferred_role: self.roles.infer_role(text),
        };

        debug!(
            "Analyzed resume: {} skills, {} bullets, role '{}'",
            record.skills.len(),
            record.bullets.len(),
            record.inferred_role
        );
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Smith
jane.smith@example.com | (555) 123-4567

Experience
• Analyzed churn for 40k subscribers using SQL and Tableau
• Built a Python ETL job that cut reporting time by 30%
Presented findings to the leadership team

Education
B.S. in Statistics, State University, 2024";

    #[test]
    fn test_analyze_full_resume() {
        let record = ResumeAnalyzer::new().analyze(RESUME);

        assert_eq!(record.name, "Jane Smith");
        assert_eq!(record.email, "jane.smith@example.com");
        assert_eq!(record.phone, "(555) 123-4567");
        assert_eq!(record.skills, vec!["Python", "SQL", "Tableau", "Statistics", "Leadership"]);
        assert_eq!(
            record.bullets,
            vec![
                "Analyzed churn for 40k subscribers using SQL and Tableau",
                "Built a Python ETL job that cut reporting time by 30%",
            ]
        );
        assert_eq!(record.education, "B.S. in Statistics, State University, 2024");
        assert_eq!(record.inferred_role, "Data Analyst (Intern)");
    }

    #[test]
    fn test_empty_input_gives_empty_record() {
        assert_eq!(ResumeAnalyzer::new().analyze(""), ParsedResumeRecord::default());
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let analyzer = ResumeAnalyzer::new();
        assert_eq!(analyzer.analyze(RESUME), analyzer.analyze(RESUME));
    }
}
