use once_cell::sync::Lazy;
use regex::Regex;

// A single answer-choice label such as "A.", "b)" or "C. " at the start of an option.
static CHOICE_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[A-Da-d][.)]\s*").expect("CHOICE_LABEL is a valid regex pattern")
});

/// Strips leading answer-choice labels and surrounding whitespace.
///
/// Labels are removed until none remain, so `clean_option(clean_option(x)) == clean_option(x)`.
pub fn clean_option(raw: &str) -> String {
    let mut text = raw.trim();
    while let Some(found) = CHOICE_LABEL.find(text) {
        text = text[found.end()..].trim();
    }
    text.to_string()
}

/// Case-folded cleaned form, used as the identity of an option.
pub fn option_key(raw: &str) -> String {
    clean_option(raw).to_lowercase()
}
