use once_cell::sync::Lazy;
use regex::Regex;

/// Returned when none of the leading lines looks like a name.
pub const NAME_FALLBACK: &str = "Resume Holder";

/// Only this many leading lines are considered.
const NAME_SCAN_LINES: usize = 5;
const MAX_NAME_WORDS: usize = 4;
const HEADING_WORDS: [&str; 3] = ["resume", "cv", "curriculum"];

static LETTERS_ONLY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

/// Guess the candidate name from the first few lines of the document.
///
/// A line qualifies when, after trimming, it is longer than two characters,
/// has at most four words, consists of ASCII letters and whitespace only, and
/// contains none of the heading words `resume`, `cv` or `curriculum`.
pub fn extract_name(text: &str) -> String {
    text.split('\n')
        .take(NAME_SCAN_LINES)
        .map(str::trim)
        .find(|line| is_name_line(line))
        .unwrap_or(NAME_FALLBACK)
        .to_string()
}

fn is_name_line(line: &str) -> bool {
    line.chars().count() > 2
        && line.split_whitespace().count() <= MAX_NAME_WORDS
        && LETTERS_ONLY_RE.is_match(line)
        && !line
            .split_whitespace()
            .any(|word| HEADING_WORDS.contains(&word.to_lowercase().as_str()))
}
