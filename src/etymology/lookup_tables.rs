//! Street-name element lookup tables
//!
//! Two fixed lexicons of common UK street-name elements:
//! - `SUFFIX_PATTERNS`: generic terms (street, lane, gate, ton, ham, ...)
//!   with origin, gloss and historical period
//! - `PREFIX_PATTERNS`: descriptive qualifiers (high, old, royal, church, ...)
//!   with origin and gloss only
//!
//! Declaration order is load-bearing: matched elements are reported in the
//! order they appear here.

/// Period reported for qualifier matches (the prefix table carries none).
pub const PREFIX_PERIOD: &str = "Various";

/// A generic street-name term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixPattern {
    pub key: &'static str,
    pub origin: &'static str,
    pub meaning: &'static str,
    pub period: &'static str,
}

/// A descriptive qualifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixPattern {
    pub key: &'static str,
    pub origin: &'static str,
    pub meaning: &'static str,
}

// ============================================================================
// GENERIC TERMS
// Old English, Old Norse, Norman and later French/Latin street vocabulary
// ============================================================================

pub static SUFFIX_PATTERNS: &[SuffixPattern] = &[
    SuffixPattern { key: "gate", origin: "Old Norse", meaning: "road, way, or street (from \"gata\")", period: "Viking Age (793-1066)" },
    SuffixPattern { key: "street", origin: "Latin via Old English", meaning: "paved road (from \"strata via\" - layered way)", period: "Roman/Early Medieval" },
    SuffixPattern { key: "lane", origin: "Old English", meaning: "narrow path or passage (from \"lanu\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "way", origin: "Old English", meaning: "path or route (from \"weg\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "road", origin: "Old English", meaning: "mounted journey (from \"rad\" - riding)", period: "Medieval" },
    SuffixPattern { key: "close", origin: "Old French", meaning: "enclosed space (from \"clos\")", period: "Norman" },
    SuffixPattern { key: "court", origin: "Old French", meaning: "enclosed yard or courtyard", period: "Norman" },
    SuffixPattern { key: "place", origin: "Old French", meaning: "open square or space", period: "Medieval" },
    SuffixPattern { key: "row", origin: "Old English", meaning: "line or series of houses", period: "Medieval" },
    SuffixPattern { key: "hill", origin: "Old English", meaning: "elevated ground (from \"hyll\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "green", origin: "Old English", meaning: "grassy common area (from \"grene\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "field", origin: "Old English", meaning: "open land (from \"feld\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "bury", origin: "Old English", meaning: "fortified place (from \"burh\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "ford", origin: "Old English", meaning: "river crossing place", period: "Anglo-Saxon" },
    SuffixPattern { key: "bridge", origin: "Old English", meaning: "structure over water (from \"brycg\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "mill", origin: "Old English", meaning: "grain grinding place (from \"mylen\")", period: "Medieval" },
    SuffixPattern { key: "market", origin: "Old English", meaning: "trading place (from \"market\")", period: "Medieval" },
    SuffixPattern { key: "church", origin: "Old English", meaning: "Christian place of worship (from \"cirice\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "kirk", origin: "Old Norse", meaning: "church (Scottish/Northern)", period: "Viking Age" },
    SuffixPattern { key: "cheap", origin: "Old English", meaning: "market or trading (from \"ceap\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "shambles", origin: "Old English", meaning: "meat market or stalls (from \"scamel\" - bench)", period: "Medieval" },
    SuffixPattern { key: "castle", origin: "Norman French", meaning: "fortified residence", period: "Norman (post-1066)" },
    SuffixPattern { key: "abbey", origin: "Latin via Old French", meaning: "monastic building", period: "Medieval" },
    SuffixPattern { key: "priory", origin: "Latin via Old French", meaning: "religious house", period: "Medieval" },
    SuffixPattern { key: "grove", origin: "Old English", meaning: "small wood (from \"graf\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "wood", origin: "Old English", meaning: "forested area (from \"wudu\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "heath", origin: "Old English", meaning: "open uncultivated land (from \"haeth\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "moor", origin: "Old English", meaning: "wasteland or marsh (from \"mor\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "meadow", origin: "Old English", meaning: "grassland (from \"maed\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "croft", origin: "Old English", meaning: "enclosed field (from \"croft\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "toft", origin: "Old Norse", meaning: "homestead site", period: "Viking Age" },
    SuffixPattern { key: "thorpe", origin: "Old Norse", meaning: "outlying farmstead or village", period: "Viking Age" },
    SuffixPattern { key: "by", origin: "Old Norse", meaning: "farmstead or village (as suffix)", period: "Viking Age" },
    SuffixPattern { key: "beck", origin: "Old Norse", meaning: "stream or brook", period: "Viking Age" },
    SuffixPattern { key: "thwaite", origin: "Old Norse", meaning: "clearing in forest", period: "Viking Age" },
    SuffixPattern { key: "wick", origin: "Old English", meaning: "dwelling or trading place (from \"wic\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "ton", origin: "Old English", meaning: "settlement or estate (from \"tun\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "ham", origin: "Old English", meaning: "homestead or village", period: "Anglo-Saxon" },
    SuffixPattern { key: "stead", origin: "Old English", meaning: "place or site (from \"stede\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "worth", origin: "Old English", meaning: "enclosure or homestead", period: "Anglo-Saxon" },
    SuffixPattern { key: "parade", origin: "French", meaning: "promenade or procession route", period: "18th-19th century" },
    SuffixPattern { key: "terrace", origin: "French", meaning: "raised level platform or row of houses", period: "18th-19th century" },
    SuffixPattern { key: "crescent", origin: "Latin via French", meaning: "curved street (from \"crescere\" - to grow)", period: "18th-19th century" },
    SuffixPattern { key: "square", origin: "Old French", meaning: "open rectangular space", period: "17th-18th century" },
    SuffixPattern { key: "circus", origin: "Latin", meaning: "circular open space", period: "18th-19th century" },
    SuffixPattern { key: "avenue", origin: "French", meaning: "tree-lined approach road", period: "17th-19th century" },
    SuffixPattern { key: "boulevard", origin: "French", meaning: "broad tree-lined street", period: "19th century" },
    SuffixPattern { key: "mews", origin: "Old French", meaning: "falcon cages, later converted stables", period: "18th-19th century" },
    SuffixPattern { key: "yard", origin: "Old English", meaning: "enclosed area (from \"geard\")", period: "Anglo-Saxon" },
    SuffixPattern { key: "alley", origin: "Old French", meaning: "narrow passage (from \"alee\")", period: "Medieval" },
    SuffixPattern { key: "passage", origin: "Old French", meaning: "narrow way or corridor", period: "Medieval" },
    SuffixPattern { key: "walk", origin: "Old English", meaning: "path for walking", period: "Medieval" },
    SuffixPattern { key: "drive", origin: "Old English", meaning: "private road to a house", period: "19th-20th century" },
    SuffixPattern { key: "gardens", origin: "Old North French", meaning: "ornamental grounds", period: "19th century" },
    SuffixPattern { key: "park", origin: "Old French", meaning: "enclosed game reserve, later public ground", period: "Medieval/19th century" },
];

// ============================================================================
// DESCRIPTIVE QUALIFIERS
// ============================================================================

pub static PREFIX_PATTERNS: &[PrefixPattern] = &[
    PrefixPattern { key: "high", origin: "Old English \"heah\"", meaning: "principal or main" },
    PrefixPattern { key: "low", origin: "Old Norse \"lagr\"", meaning: "lower in elevation or status" },
    PrefixPattern { key: "old", origin: "Old English \"eald\"", meaning: "original or historic" },
    PrefixPattern { key: "new", origin: "Old English \"neowe\"", meaning: "recently created" },
    PrefixPattern { key: "great", origin: "Old English \"great\"", meaning: "large or important" },
    PrefixPattern { key: "little", origin: "Old English \"lytel\"", meaning: "small or lesser" },
    PrefixPattern { key: "long", origin: "Old English \"lang\"", meaning: "extended in length" },
    PrefixPattern { key: "broad", origin: "Old English \"brad\"", meaning: "wide" },
    PrefixPattern { key: "north", origin: "Old English \"north\"", meaning: "northern direction" },
    PrefixPattern { key: "south", origin: "Old English \"suth\"", meaning: "southern direction" },
    PrefixPattern { key: "east", origin: "Old English \"east\"", meaning: "eastern direction" },
    PrefixPattern { key: "west", origin: "Old English \"west\"", meaning: "western direction" },
    PrefixPattern { key: "upper", origin: "Old English \"uppor\"", meaning: "higher part" },
    PrefixPattern { key: "lower", origin: "Old English", meaning: "lower part" },
    PrefixPattern { key: "white", origin: "Old English \"hwit\"", meaning: "white-colored or pure" },
    PrefixPattern { key: "black", origin: "Old English \"blaec\"", meaning: "dark-colored" },
    PrefixPattern { key: "green", origin: "Old English \"grene\"", meaning: "green-colored or grassy" },
    PrefixPattern { key: "red", origin: "Old English \"read\"", meaning: "red-colored" },
    PrefixPattern { key: "golden", origin: "Old English \"gylden\"", meaning: "gold-colored or prosperous" },
    PrefixPattern { key: "silver", origin: "Old English \"seolfor\"", meaning: "silver-colored" },
    PrefixPattern { key: "royal", origin: "Old French \"roial\"", meaning: "pertaining to royalty" },
    PrefixPattern { key: "king", origin: "Old English \"cyning\"", meaning: "pertaining to a king" },
    PrefixPattern { key: "queen", origin: "Old English \"cwen\"", meaning: "pertaining to a queen" },
    PrefixPattern { key: "prince", origin: "Old French \"prince\"", meaning: "pertaining to a prince" },
    PrefixPattern { key: "duke", origin: "Old French \"duc\"", meaning: "pertaining to a duke" },
    PrefixPattern { key: "lord", origin: "Old English \"hlaford\"", meaning: "pertaining to a lord" },
    PrefixPattern { key: "abbey", origin: "Latin \"abbatia\"", meaning: "near an abbey" },
    PrefixPattern { key: "church", origin: "Old English \"cirice\"", meaning: "near a church" },
    PrefixPattern { key: "mill", origin: "Old English \"mylen\"", meaning: "near a mill" },
    PrefixPattern { key: "cross", origin: "Old English \"cros\" from Latin", meaning: "at a crossroads or cross" },
    PrefixPattern { key: "fleet", origin: "Old English \"fleot\"", meaning: "creek or stream" },
    PrefixPattern { key: "well", origin: "Old English \"wella\"", meaning: "near a spring or well" },
    PrefixPattern { key: "spring", origin: "Old English \"spring\"", meaning: "near a spring" },
];

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Find a generic term by its exact lowercase key.
///
/// # Examples
/// ```
/// use street_etymology::etymology::lookup_tables::find_suffix;
///
/// let gate = find_suffix("gate").unwrap();
/// assert_eq!(gate.origin, "Old Norse");
/// assert!(find_suffix("Gate").is_none());
/// ```
pub fn find_suffix(key: &str) -> Option<&'static SuffixPattern> {
    SUFFIX_PATTERNS.iter().find(|p| p.key == key)
}

/// Find a descriptive qualifier by its exact lowercase key.
pub fn find_prefix(key: &str) -> Option<&'static PrefixPattern> {
    PREFIX_PATTERNS.iter().find(|p| p.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_sizes() {
        assert_eq!(SUFFIX_PATTERNS.len(), 55);
        assert_eq!(PREFIX_PATTERNS.len(), 33);
    }

    #[test]
    fn test_keys_unique_within_each_table() {
        let suffix_keys: HashSet<_> = SUFFIX_PATTERNS.iter().map(|p| p.key).collect();
        assert_eq!(suffix_keys.len(), SUFFIX_PATTERNS.len());

        let prefix_keys: HashSet<_> = PREFIX_PATTERNS.iter().map(|p| p.key).collect();
        assert_eq!(prefix_keys.len(), PREFIX_PATTERNS.len());
    }

    #[test]
    fn test_keys_are_lowercase_single_words() {
        let all_keys = SUFFIX_PATTERNS
            .iter()
            .map(|p| p.key)
            .chain(PREFIX_PATTERNS.iter().map(|p| p.key));

        for key in all_keys {
            assert!(!key.is_empty());
            assert_eq!(key, key.to_lowercase(), "key {} should be lowercase", key);
            assert!(!key.contains(char::is_whitespace), "key {} should be one word", key);
        }
    }

    #[test]
    fn test_overlapping_keys() {
        // Both tables list these; the generic-term entry wins during matching
        let mut overlap: Vec<_> = PREFIX_PATTERNS
            .iter()
            .filter(|p| find_suffix(p.key).is_some())
            .map(|p| p.key)
            .collect();
        overlap.sort();

        assert_eq!(overlap, vec!["abbey", "church", "green", "mill"]);
    }

    #[test]
    fn test_declaration_order() {
        assert_eq!(SUFFIX_PATTERNS.first().map(|p| p.key), Some("gate"));
        assert_eq!(SUFFIX_PATTERNS.last().map(|p| p.key), Some("park"));
        assert_eq!(PREFIX_PATTERNS.first().map(|p| p.key), Some("high"));
        assert_eq!(PREFIX_PATTERNS.last().map(|p| p.key), Some("spring"));
    }

    #[test]
    fn test_find_helpers() {
        let street = find_suffix("street").unwrap();
        assert_eq!(street.origin, "Latin via Old English");
        assert_eq!(street.period, "Roman/Early Medieval");

        let royal = find_prefix("royal").unwrap();
        assert_eq!(royal.origin, "Old French \"roial\"");
        assert_eq!(royal.meaning, "pertaining to royalty");

        assert!(find_prefix("street").is_none());
        assert!(find_suffix("royal").is_none());
    }
}
