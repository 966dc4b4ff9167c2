//! Case-insensitive presence scanning over a fixed term table

use aho_corasick::AhoCorasick;

/// Finds which terms of a fixed table occur anywhere in a text.
///
/// Matching is ASCII case-insensitive substring matching, so `"SQL"` is found
/// inside `"PostgreSQL"`. Results always come back in table order, never in
/// the order the terms appear in the text.
pub struct VocabularyScanner {
    terms: &'static [&'static str],
    matcher: AhoCorasick,
}

impl VocabularyScanner {
    pub fn new(terms: &'static [&'static str]) -> Self {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(terms)
            .expect("vocabulary terms form a valid automaton");

        Self { terms, matcher }
    }

    /// Per-term presence flags, indexed like the table.
    pub fn presence(&self, text: &str) -> Vec<bool> {
        let mut present = vec![false; self.terms.len()];
        for mat in self.matcher.find_overlapping_iter(text) {
            present[mat.pattern().as_usize()] = true;
        }
        present
    }

    /// Terms present in `text`, in table order.
    pub fn find_all(&self, text: &str) -> Vec<&'static str> {
        self.terms
            .iter()
            .zip(self.presence(text))
            .filter_map(|(term, present)| present.then_some(*term))
            .collect()
    }

    pub fn contains_any(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}
