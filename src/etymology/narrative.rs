//! Narrative paragraphs for etymology suggestions
//!
//! Each builder returns one paragraph; `compose` joins them with a blank line.

use crate::etymology::types::MatchedElement;

const FALLBACK_RESEARCH: &str = "Further research in local historical records, such as tithe maps, census records, or local history archives, may reveal the specific origin of this name.";

const CLOSING_RESEARCH: &str = "For definitive etymology, consult: local county archives, Ordnance Survey historical maps, and publications by the English Place-Name Society or relevant regional societies.";

/// Build all paragraphs for a street name and its matched elements.
pub fn build_paragraphs(street_name: &str, elements: &[MatchedElement]) -> Vec<String> {
    let mut paragraphs = Vec::with_capacity(3);

    if elements.is_empty() {
        paragraphs.push(fallback_origin(street_name));
        paragraphs.push(FALLBACK_RESEARCH.to_string());
    } else {
        paragraphs.push(element_sentences(elements));
        if let Some(summary) = period_summary(elements) {
            paragraphs.push(summary);
        }
    }

    paragraphs.push(CLOSING_RESEARCH.to_string());
    paragraphs
}

/// Join paragraphs into one narrative string
pub fn compose(paragraphs: &[String]) -> String {
    paragraphs.join("\n\n")
}

/// `"Lane" derives from Old English, meaning "..." (Anglo-Saxon).` per element
pub fn element_sentences(elements: &[MatchedElement]) -> String {
    elements
        .iter()
        .map(element_sentence)
        .collect::<Vec<_>>()
        .join(" ")
}

fn element_sentence(element: &MatchedElement) -> String {
    let period = match element.info.period {
        Some(p) if !p.is_empty() => format!(" ({})", p),
        _ => String::new(),
    };

    format!(
        "\"{}\" derives from {}, meaning \"{}\"{}.",
        capitalize(element.element),
        element.info.origin,
        element.info.meaning,
        period
    )
}

/// Distinct non-empty periods in first-seen order, or None if there are none
pub fn period_summary(elements: &[MatchedElement]) -> Option<String> {
    let mut periods: Vec<&str> = Vec::new();
    for period in elements.iter().filter_map(|e| e.info.period) {
        if !period.is_empty() && !periods.contains(&period) {
            periods.push(period);
        }
    }

    if periods.is_empty() {
        return None;
    }

    Some(format!(
        "This street name contains elements from: {}.",
        periods.join(", ")
    ))
}

fn fallback_origin(street_name: &str) -> String {
    format!(
        "\"{}\" may be named after a person, local landmark, or historical event. Common patterns include: landowner surnames, nearby geographic features, or commemorative naming after notable figures.",
        street_name
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::etymology::types::EtymologyElement;

    fn element(key: &'static str, period: Option<&'static str>) -> MatchedElement {
        MatchedElement {
            element: key,
            info: EtymologyElement {
                origin: "Old English",
                meaning: "test meaning",
                period,
            },
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("street"), "Street");
        assert_eq!(capitalize("by"), "By");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_sentence_with_period() {
        let s = element_sentence(&element("lane", Some("Anglo-Saxon")));
        assert_eq!(s, "\"Lane\" derives from Old English, meaning \"test meaning\" (Anglo-Saxon).");
    }

    #[test]
    fn test_sentence_without_period() {
        let s = element_sentence(&element("lane", None));
        assert_eq!(s, "\"Lane\" derives from Old English, meaning \"test meaning\".");
    }

    #[test]
    fn test_sentence_with_empty_period() {
        let s = element_sentence(&element("lane", Some("")));
        assert_eq!(s, "\"Lane\" derives from Old English, meaning \"test meaning\".");
    }

    #[test]
    fn test_period_summary_dedup_preserves_order() {
        let elements = vec![
            element("a", Some("Medieval")),
            element("b", Some("Anglo-Saxon")),
            element("c", Some("Medieval")),
            element("d", None),
            element("e", Some("")),
        ];
        assert_eq!(
            period_summary(&elements).unwrap(),
            "This street name contains elements from: Medieval, Anglo-Saxon."
        );
    }

    #[test]
    fn test_period_summary_none_without_periods() {
        assert!(period_summary(&[element("a", None)]).is_none());
    }

    #[test]
    fn test_fallback_paragraphs() {
        let paragraphs = build_paragraphs("  Xyz Row ", &[]);
        assert_eq!(paragraphs.len(), 3);
        assert!(paragraphs[0].starts_with("\"  Xyz Row \" may be named after a person"));
        assert_eq!(paragraphs[1], FALLBACK_RESEARCH);
        assert_eq!(paragraphs[2], CLOSING_RESEARCH);
    }

    #[test]
    fn test_compose_uses_blank_lines() {
        let text = compose(&["one".to_string(), "two".to_string()]);
        assert_eq!(text, "one\n\ntwo");
    }
}
