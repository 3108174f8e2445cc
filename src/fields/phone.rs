use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Phone patterns in priority order. The first pattern with any match wins.
///
/// The groups of the first pattern cover the whole match, so joining them
/// reproduces the number exactly as written.
static PHONE_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"(\+\d{1,3}[-.\s]?)?(\(?\d{3}\)?[-.\s]?)(\d{3}[-.\s]?)(\d{4})").unwrap(),
        Regex::new(r"\+\d{1,3}\s?\d{10}").unwrap(),
        Regex::new(r"\d{10}").unwrap(),
    ]
});

/// First phone number found by the highest-priority matching pattern.
///
/// Formatting characters are kept as they appear in the text.
pub fn extract_mobile(text: &str) -> Option<String> {
    PHONE_PATTERNS
        .iter()
        .find_map(|re| re.captures(text))
        .map(|caps| join_groups(&caps))
}

/// Concatenate the participating groups, or return the whole match when the
/// pattern has no groups.
fn join_groups(caps: &Captures) -> String {
    if caps.len() > 1 {
        caps.iter().skip(1).flatten().map(|m| m.as_str()).collect()
    } else {
        caps[0].to_string()
    }
}
