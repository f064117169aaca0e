/// Credibility markers rewarded by the fitness evaluator.
pub const CREDIBILITY_MARKERS: &[&str] = &[
    "research",
    "academic",
    "theoretical",
    "analysis",
    "study",
    "educational",
];

/// Single-word substitutions used by mutation, keyed by lowercase word.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("help", &["assist", "aid", "support", "guide"]),
    ("understand", &["comprehend", "grasp", "analyze", "explore"]),
    ("explain", &["describe", "detail", "clarify", "elaborate"]),
    ("information", &["data", "details", "facts", "knowledge"]),
    ("provide", &["give", "supply", "offer", "present"]),
    ("need", &["require", "want", "seek", "desire"]),
];

/// Looks up replacements for a word, ignoring case and trailing punctuation.
pub fn synonyms_for(word: &str) -> Option<&'static [&'static str]> {
    let key = normalize_word(word);
    SYNONYMS
        .iter()
        .find(|(w, _)| *w == key)
        .map(|(_, alternatives)| *alternatives)
}

fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .trim_matches(|c| matches!(c, '.' | ',' | '!' | '?'))
        .to_string()
}
