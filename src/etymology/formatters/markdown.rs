use crate::etymology::types::EtymologySuggestion;

/// Markdown formatter for suggestions
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn format(suggestion: &EtymologySuggestion) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str(&format!("# {}\n\n", suggestion.street_name.trim()));
        md.push_str(&format!(
            "**Confidence:** {}\n\n",
            suggestion.confidence.as_str()
        ));

        if !suggestion.elements.is_empty() {
            md.push_str("## Elements\n\n");
            md.push_str("| Element | Origin | Meaning | Period |\n");
            md.push_str("|---------|--------|---------|--------|\n");
            for matched in &suggestion.elements {
                md.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    matched.element,
                    escape_cell(matched.info.origin),
                    escape_cell(matched.info.meaning),
                    matched.info.period.unwrap_or("-"),
                ));
            }
            md.push('\n');
        }

        md.push_str("## Etymology\n\n");
        md.push_str(&suggestion.etymology);
        md.push_str("\n\n");

        md.push_str("## Sources\n\n");
        for source in &suggestion.sources {
            md.push_str(&format!("- {}\n", source));
        }

        md
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::etymology::suggest_etymology;

    #[test]
    fn test_format_markdown_with_elements() {
        let suggestion = suggest_etymology("Church Lane").unwrap();
        let md = MarkdownFormatter::format(&suggestion);

        assert!(md.starts_with("# Church Lane\n\n"));
        assert!(md.contains("**Confidence:** medium"));
        assert!(md.contains("| lane | Old English |"));
        assert!(md.contains("| church | Old English |"));
        assert!(md.contains("- Oxford Dictionary of English Place-Names"));
    }

    #[test]
    fn test_format_markdown_without_elements() {
        let suggestion = suggest_etymology("Xyzzyplonk").unwrap();
        let md = MarkdownFormatter::format(&suggestion);

        assert!(md.contains("**Confidence:** low"));
        assert!(!md.contains("## Elements"));
        assert!(md.contains("## Etymology"));
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
    }
}
