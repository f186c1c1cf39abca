//! Text-type heuristics for nodes without a structural tag

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Minimum word count before prose is considered narrative
const NARRATIVE_MIN_WORDS: usize = 3;

/// US city-state-zip shape, e.g. "Doylestown, PA 18901"
static US_CITY_STATE_ZIP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][A-Za-z .'-]+,\s*[A-Z]{2}\s+\d{5}(?:-\d{4})?$").expect("address pattern")
});

/// True when the text looks like a postal address line
pub(crate) fn is_possible_address(text: &str) -> bool {
    US_CITY_STATE_ZIP.is_match(text.trim())
}

/// True when the text reads like prose: sentence-like punctuation plus a
/// minimum word count
pub(crate) fn is_possible_narrative(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.unicode_words().count() < NARRATIVE_MIN_WORDS {
        return false;
    }
    trimmed.chars().any(|c| matches!(c, '.' | '!' | '?'))
}
