//! Case-insensitive text matching for catalog lookups.
//!
//! # Responsibility
//! - Fold text into a locale-agnostic comparison form.
//! - Provide the title equality and author substring predicates.
//!
//! # Invariants
//! - Folding is NFC composition followed by Unicode lowercase.
//! - Precomposed and decomposed spellings of the same text fold equal.

use unicode_normalization::UnicodeNormalization;

/// Folds text for case-insensitive comparison.
pub fn fold_case(value: &str) -> String {
    value.nfc().collect::<String>().to_lowercase()
}

/// Returns whether a stored title equals the query ignoring case.
pub fn titles_match(stored: &str, query: &str) -> bool {
    fold_case(stored) == fold_case(query)
}

/// Returns whether a stored author contains the query ignoring case.
///
/// An empty query is contained in every author.
pub fn author_contains(stored: &str, query: &str) -> bool {
    fold_case(stored).contains(fold_case(query).as_str())
}

/// Pre-folded query reused across a linear scan.
#[derive(Debug, Clone)]
pub(crate) struct FoldedQuery(String);

impl FoldedQuery {
    pub(crate) fn new(query: &str) -> Self {
        Self(fold_case(query))
    }

    pub(crate) fn equals(&self, stored: &str) -> bool {
        fold_case(stored) == self.0
    }

    pub(crate) fn contained_in(&self, stored: &str) -> bool {
        fold_case(stored).contains(self.0.as_str())
    }
}
