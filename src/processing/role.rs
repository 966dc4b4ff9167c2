//! Target role inference through an ordered rule chain

/// A role and the condition that selects it. Rules are evaluated top to bottom.
pub struct RoleRule {
    pub role: &'static str,
    /// At least one of these must occur in the lowercased text.
    pub any_of: &'static [&'static str],
    /// If non-empty, at least one of these must also occur.
    pub and_any_of: &'static [&'static str],
}

impl RoleRule {
    fn matches(&self, lower_text: &str) -> bool {
        contains_any(lower_text, self.any_of)
            && (self.and_any_of.is_empty() || contains_any(lower_text, self.and_any_of))
    }
}

fn contains_any(lower_text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| lower_text.contains(term))
}

/// First matching rule wins; the order is a priority, not a tag set.
pub const ROLE_RULES: &[RoleRule] = &[
    RoleRule {
        role: "Data Analyst (Intern)",
        any_of: &["sql", "tableau", "powerbi"],
        and_any_of: &[],
    },
    RoleRule {
        role: "UI/UX Design (Intern)",
        any_of: &["figma", "design", "sketch"],
        and_any_of: &[],
    },
    RoleRule {
        role: "Software Engineer (Intern)",
        any_of: &["react", "javascript", "python"],
        and_any_of: &[],
    },
    RoleRule {
        role: "Finance/IB Analyst (Intern)",
        any_of: &["investment", "financial modeling", "valuation"],
        and_any_of: &[],
    },
    RoleRule {
        role: "Venture Capital (VC) Analyst (Intern)",
        any_of: &["venture capital", "startup", "fund"],
        and_any_of: &[],
    },
    RoleRule {
        role: "Product Management (Intern)",
        any_of: &["product"],
        and_any_of: &["management", "manager"],
    },
    RoleRule {
        role: "Consulting (Intern)",
        any_of: &["consulting", "strategy"],
        and_any_of: &[],
    },
];

#[derive(Debug, Default, Clone, Copy)]
pub struct RoleInferencer;

impl RoleInferencer {
    /// The role of the first matching rule, or an empty string when none match.
    pub fn infer_role(&self, text: &str) -> String {
        let lower_text = text.to_lowercase();
        ROLE_RULES
            .iter()
            .find(|rule| rule.matches(&lower_text))
            .map(|rule| rule.role.to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_rule() {
        let cases = [
            ("Dashboards in PowerBI", "Data Analyst (Intern)"),
            ("Prototyped flows in Figma", "UI/UX Design (Intern)"),
            ("Shipped React components", "Software Engineer (Intern)"),
            ("Built a valuation model", "Finance/IB Analyst (Intern)"),
            ("Sourced deals for a seed fund", "Venture Capital (VC) Analyst (Intern)"),
            ("Assistant product manager", "Product Management (Intern)"),
            ("Growth strategy engagements", "Consulting (Intern)"),
        ];

        for (text, role) in cases {
            assert_eq!(RoleInferencer.infer_role(text), role, "text: {}", text);
        }
    }

    #[test]
    fn test_priority_order_decides() {
        let text = "React side projects; venture capital fellowship";
        assert_eq!(RoleInferencer.infer_role(text), "Software Engineer (Intern)");

        // "design" outranks "python"
        assert_eq!(
            RoleInferencer.infer_role("Python scripts for a design studio"),
            "UI/UX Design (Intern)"
        );
    }

    #[test]
    fn test_product_needs_management_term() {
        assert_eq!(RoleInferencer.infer_role("Product launches"), "");
        assert_eq!(RoleInferencer.infer_role("Product MANAGEMENT coursework"), "Product Management (Intern)");
    }

    #[test]
    fn test_no_inference() {
        assert_eq!(RoleInferencer.infer_role(""), "");
        assert_eq!(RoleInferencer.infer_role("Barista and shift lead"), "");
    }
}
