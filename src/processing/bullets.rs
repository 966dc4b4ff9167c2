//! Achievement bullet selection

/// Lines starting with one of these glyphs are candidate bullets.
pub const BULLET_GLYPHS: [char; 3] = ['•', '-', '*'];

/// Lines starting with one of these verbs (any case) are candidate bullets too.
pub const BULLET_ACTION_VERBS: &[&str] = &[
    "Analyzed", "Developed", "Created", "Led", "Managed", "Implemented",
    "Designed", "Built", "Improved", "Increased", "Decreased",
];

pub const MAX_BULLETS: usize = 5;
const MIN_LENGTH_EXCLUSIVE: usize = 20;
const MAX_LENGTH_EXCLUSIVE: usize = 200;

/// Selects plausible achievement lines from a document.
#[derive(Debug, Default, Clone, Copy)]
pub struct BulletExtractor;

impl BulletExtractor {
    /// Up to [`MAX_BULLETS`] qualifying lines in document order, bullet glyph removed.
    pub fn extract_bullets(&self, text: &str) -> Vec<String> {
        text.split('\n')
            .map(str::trim)
            .filter(|line| starts_with_glyph(line) || starts_with_action_verb(line))
            .filter(|line| {
                let length = line.chars().count();
                length > MIN_LENGTH_EXCLUSIVE && length < MAX_LENGTH_EXCLUSIVE
            })
            .map(strip_glyph)
            .take(MAX_BULLETS)
            .collect()
    }
}

fn starts_with_glyph(line: &str) -> bool {
    line.starts_with(BULLET_GLYPHS)
}

/// Prefix test only: "Led" also accepts "Ledger ...".
pub(crate) fn starts_with_verb(line: &str, verbs: &[&str]) -> bool {
    verbs.iter().any(|verb| {
        line.get(..verb.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(verb))
    })
}

fn starts_with_action_verb(line: &str) -> bool {
    starts_with_verb(line, BULLET_ACTION_VERBS)
}

fn strip_glyph(line: &str) -> String {
    match line.strip_prefix(BULLET_GLYPHS) {
        Some(rest) => rest.trim_start().to_string(),
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_and_verb_lines() {
        let text = "Jane Smith\n\
                    • Analyzed churn for 40k subscribers using SQL\n\
                    Experience\n\
                    Developed an onboarding flow adopted by 3 teams\n\
                    - Presented quarterly results to leadership\n\
                    * Mentored two junior analysts on Excel";
        let bullets = BulletExtractor.extract_bullets(text);

        assert_eq!(
            bullets,
            vec![
                "Analyzed churn for 40k subscribers using SQL",
                "Developed an onboarding flow adopted by 3 teams",
                "Presented quarterly results to leadership",
                "Mentored two junior analysts on Excel",
            ]
        );
    }

    #[test]
    fn test_length_bounds_are_exclusive() {
        let exactly_twenty = "Led a small project.";
        assert_eq!(exactly_twenty.chars().count(), 20);
        let twenty_one = "Led a small project!!";
        let text = format!("{}\n{}\n- {}", exactly_twenty, twenty_one, "x".repeat(198));

        assert_eq!(BulletExtractor.extract_bullets(&text), vec![twenty_one]);
    }

    #[test]
    fn test_verb_match_is_case_insensitive() {
        let bullets = BulletExtractor.extract_bullets("   IMPROVED load times by 35% on the checkout page  ");
        assert_eq!(bullets, vec!["IMPROVED load times by 35% on the checkout page"]);
    }

    #[test]
    fn test_caps_at_five_in_document_order() {
        let text: String = (1..=8)
            .map(|i| format!("- Shipped release number {} to production", i))
            .collect::<Vec<_>>()
            .join("\r\n");
        let bullets = BulletExtractor.extract_bullets(&text);

        assert_eq!(bullets.len(), MAX_BULLETS);
        assert_eq!(bullets[0], "Shipped release number 1 to production");
        assert_eq!(bullets[4], "Shipped release number 5 to production");
    }

    #[test]
    fn test_plain_prose_is_ignored() {
        let text = "Summary of qualifications and interests in analytics\nReferences available on request";
        assert!(BulletExtractor.extract_bullets(text).is_empty());
        assert!(BulletExtractor.extract_bullets("").is_empty());
    }

    #[test]
    fn test_starts_with_verb_is_prefix_only() {
        assert!(starts_with_verb("Ledger reconciliation", &["Led"]));
        assert!(!starts_with_verb("Helped", &["Led"]));
        assert!(!starts_with_verb("Lé", &["Led"]));
    }
}
