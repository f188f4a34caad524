//! Street Etymology
//!
//! Suggests the etymology of UK street names from known word elements.
//!
//! - `etymology/`: lookup tables, matcher, narrative and output formatters
//! - `api_server`: Axum HTTP boundary (feature `api`)
//! - `config`: server configuration from the environment (feature `api`)

pub mod etymology;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod config;

// Re-export commonly used types
pub use etymology::{
    suggest_etymology, suggest_from_request, Confidence, EtymologyError, EtymologySuggestion,
    MatchedElement, SuggestEtymologyRequest,
};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
#[cfg(feature = "api")]
pub use config::ServerConfig;
