use serde::{Deserialize, Serialize};

use crate::etymology::lookup_tables::{PrefixPattern, SuffixPattern, PREFIX_PERIOD};

/// Citations attached to every suggestion, independent of the match outcome
pub const SOURCES: [&str; 3] = [
    "English Place-Name Society publications",
    "Oxford Dictionary of English Place-Names",
    "Institute of Name-Studies, University of Nottingham",
];

/// Linguistic information for one street-name element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EtymologyElement {
    pub origin: &'static str,
    pub meaning: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<&'static str>,
}

impl From<&SuffixPattern> for EtymologyElement {
    fn from(pattern: &SuffixPattern) -> Self {
        Self {
            origin: pattern.origin,
            meaning: pattern.meaning,
            period: Some(pattern.period),
        }
    }
}

impl From<&PrefixPattern> for EtymologyElement {
    fn from(pattern: &PrefixPattern) -> Self {
        Self {
            origin: pattern.origin,
            meaning: pattern.meaning,
            period: Some(PREFIX_PERIOD),
        }
    }
}

/// A lookup-table key found in a street name, with its information record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchedElement {
    pub element: &'static str,
    pub info: EtymologyElement,
}

/// Binary confidence label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Medium,
    Low,
}

impl Confidence {
    pub fn from_elements(elements: &[MatchedElement]) -> Self {
        if elements.is_empty() {
            Confidence::Low
        } else {
            Confidence::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

/// Complete etymology suggestion for one street name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EtymologySuggestion {
    /// Input exactly as received (not normalized)
    pub street_name: String,
    /// Paragraphs separated by a blank line
    pub etymology: String,
    pub elements: Vec<MatchedElement>,
    pub confidence: Confidence,
    pub sources: [&'static str; 3],
}

/// Invocation body: `{ "streetName": "..." }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestEtymologyRequest {
    #[serde(default)]
    pub street_name: Option<String>,
}

impl SuggestEtymologyRequest {
    pub fn new(street_name: impl Into<String>) -> Self {
        Self {
            street_name: Some(street_name.into()),
        }
    }
}
