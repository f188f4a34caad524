//! Street-name etymology suggestions
//!
//! - `lookup_tables`: generic-term and qualifier lexicons
//! - `matcher`: normalization and pattern matching
//! - `narrative`: paragraph builders for the etymology text
//! - `formatters`: JSON envelope and Markdown output

pub mod error;
pub mod formatters;
pub mod lookup_tables;
pub mod matcher;
pub mod narrative;
pub mod types;

pub use error::{EtymologyError, ERROR_CODE};
pub use formatters::{JsonFormatter, MarkdownFormatter};
pub use matcher::{find_elements, normalize, suggest_etymology, suggest_from_request, NormalizedName};
pub use types::{
    Confidence, EtymologyElement, EtymologySuggestion, MatchedElement, SuggestEtymologyRequest,
    SOURCES,
};
