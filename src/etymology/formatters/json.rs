use crate::etymology::types::EtymologySuggestion;
use serde_json::{json, Value};

/// JSON formatter for suggestions, wrapped in the `{ "data": ... }` envelope
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn envelope(suggestion: &EtymologySuggestion) -> Value {
        json!({ "data": suggestion })
    }

    /// Format suggestion as pretty-printed JSON
    pub fn format(suggestion: &EtymologySuggestion) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::envelope(suggestion))
    }

    /// Format suggestion as compact JSON (no whitespace)
    pub fn format_compact(suggestion: &EtymologySuggestion) -> Result<String, serde_json::Error> {
        serde_json::to_string(&Self::envelope(suggestion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::etymology::suggest_etymology;

    #[test]
    fn test_format_json() {
        let suggestion = suggest_etymology("Church Lane").unwrap();

        let json = JsonFormatter::format(&suggestion).unwrap();
        assert!(json.contains("\"streetName\": \"Church Lane\""));
        assert!(json.contains("\"confidence\": \"medium\""));

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["data"]["elements"].as_array().unwrap().len(), 2);
        assert_eq!(value["data"]["sources"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_format_compact() {
        let suggestion = suggest_etymology("Xyzzyplonk").unwrap();
        let json = JsonFormatter::format_compact(&suggestion).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.starts_with("{\"data\":{"));
        assert!(json.contains("\"elements\":[]"));
    }
}
