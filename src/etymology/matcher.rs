//! Street-name pattern matcher
//!
//! Matching is substring based, not word-boundary aware:
//! - a generic term matches if the lowercased name ends with it, or it is one
//!   of the words (so "ton" matches "Brighton")
//! - a qualifier matches if the lowercased name starts with it, or it is one
//!   of the words
//!
//! Generic-term matches come first, then qualifiers, each in table order.
//! A key found twice keeps its first occurrence.

use rustc_hash::FxHashSet;

use crate::etymology::error::EtymologyError;
use crate::etymology::lookup_tables::{PREFIX_PATTERNS, SUFFIX_PATTERNS};
use crate::etymology::narrative;
use crate::etymology::types::{
    Confidence, EtymologyElement, EtymologySuggestion, MatchedElement, SuggestEtymologyRequest,
    SOURCES,
};

/// Lowercased, trimmed street name and its whitespace-separated words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    pub full: String,
    pub words: Vec<String>,
}

impl NormalizedName {
    fn has_word(&self, key: &str) -> bool {
        self.words.iter().any(|w| w == key)
    }
}

pub fn normalize(street_name: &str) -> NormalizedName {
    let full = street_name.to_lowercase().trim().to_string();
    let words = full.split_whitespace().map(str::to_string).collect();
    NormalizedName { full, words }
}

/// Scan both tables and return deduplicated matches in report order.
pub fn find_elements(name: &NormalizedName) -> Vec<MatchedElement> {
    let suffix_matches = SUFFIX_PATTERNS
        .iter()
        .filter(|p| name.full.ends_with(p.key) || name.has_word(p.key))
        .map(|p| MatchedElement {
            element: p.key,
            info: EtymologyElement::from(p),
        });

    let prefix_matches = PREFIX_PATTERNS
        .iter()
        .filter(|p| name.full.starts_with(p.key) || name.has_word(p.key))
        .map(|p| MatchedElement {
            element: p.key,
            info: EtymologyElement::from(p),
        });

    let mut seen = FxHashSet::default();
    suffix_matches
        .chain(prefix_matches)
        .filter(|m| seen.insert(m.element))
        .collect()
}

/// Suggest an etymology for a street name.
///
/// Fails only with `InvalidInput` when the name is empty after trimming.
///
/// # Examples
/// ```
/// use street_etymology::etymology::{suggest_etymology, Confidence};
///
/// let suggestion = suggest_etymology("Baker Street").unwrap();
/// assert_eq!(suggestion.confidence, Confidence::Medium);
/// assert_eq!(suggestion.elements[0].element, "street");
///
/// assert!(suggest_etymology("   ").is_err());
/// ```
pub fn suggest_etymology(street_name: &str) -> Result<EtymologySuggestion, EtymologyError> {
    if street_name.trim().is_empty() {
        return Err(EtymologyError::InvalidInput);
    }

    let name = normalize(street_name);
    let elements = find_elements(&name);

    tracing::debug!(
        street_name = %street_name,
        matched = elements.len(),
        "matched street-name elements"
    );

    let paragraphs = narrative::build_paragraphs(street_name, &elements);

    Ok(EtymologySuggestion {
        street_name: street_name.to_string(),
        etymology: narrative::compose(&paragraphs),
        confidence: Confidence::from_elements(&elements),
        elements,
        sources: SOURCES,
    })
}

/// Suggest from an invocation body; an absent `streetName` is `InvalidInput`.
pub fn suggest_from_request(
    request: &SuggestEtymologyRequest,
) -> Result<EtymologySuggestion, EtymologyError> {
    let street_name = request
        .street_name
        .as_deref()
        .ok_or(EtymologyError::InvalidInput)?;
    suggest_etymology(street_name)
}
