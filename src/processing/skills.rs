//! Skill detection against a fixed vocabulary

use crate::processing::vocabulary::VocabularyScanner;
use std::sync::OnceLock;

/// Scan table: technical skills first, then business skills.
pub const SKILL_VOCABULARY: &[&str] = &[
    "Python", "Java", "JavaScript", "React", "Node.js", "SQL", "Tableau", "Excel",
    "PowerBI", "Figma", "Sketch", "Adobe", "AWS", "Azure", "Docker", "Git",
    "Machine Learning", "Data Analysis", "Statistics", "R", "MATLAB", "Pandas",
    "NumPy", "TensorFlow", "PyTorch", "Selenium", "APIs", "REST", "GraphQL",
    // business
    "Project Management", "Agile", "Scrum", "Leadership", "Communication",
    "Analytics", "Strategy", "Consulting", "Research", "Presentation",
    "Financial Modeling", "Valuation", "Due Diligence", "Investment Banking",
    "Private Equity", "Venture Capital", "Market Research",
];

fn scanner() -> &'static VocabularyScanner {
    static SCANNER: OnceLock<VocabularyScanner> = OnceLock::new();
    SCANNER.get_or_init(|| VocabularyScanner::new(SKILL_VOCABULARY))
}

/// Flags which vocabulary skills a text mentions.
#[derive(Debug, Default, Clone, Copy)]
pub struct SkillExtractor;

impl SkillExtractor {
    /// Skills present in `text`, in vocabulary order and original casing.
    ///
    /// Every entry is a case-insensitive substring test, except single-letter
    /// entries ("R"), which must stand alone as a token.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        SKILL_VOCABULARY
            .iter()
            .zip(scanner().presence(text))
            .filter(|(skill, present)| {
                if skill.chars().count() == 1 {
                    has_standalone_token(text, skill)
                } else {
                    *present
                }
            })
            .map(|(skill, _)| skill.to_string())
            .collect()
    }
}

fn has_standalone_token(text: &str, token: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|word| word.eq_ignore_ascii_case(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_order_not_text_order() {
        let skills = SkillExtractor.extract_skills("Built dashboards in Python and SQL using Tableau");
        assert_eq!(skills, vec!["Python", "SQL", "Tableau"]);

        let reversed = SkillExtractor.extract_skills("Tableau, then SQL, then Python");
        assert_eq!(reversed, vec!["Python", "SQL", "Tableau"]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let skills = SkillExtractor.extract_skills("javascript and machine learning on aws");
        assert_eq!(skills, vec!["Java", "JavaScript", "AWS", "Machine Learning"]);
    }

    #[test]
    fn test_single_letter_skill_needs_token() {
        assert!(!SkillExtractor.extract_skills("Built reports for the regional team").contains(&"R".to_string()));
        assert!(SkillExtractor.extract_skills("Statistics in R and Python").contains(&"R".to_string()));
    }

    #[test]
    fn test_business_skills() {
        let skills = SkillExtractor.extract_skills("Venture Capital internship: due diligence and valuation");
        assert_eq!(skills, vec!["Valuation", "Due Diligence", "Venture Capital"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(SkillExtractor.extract_skills("").is_empty());
    }
}
