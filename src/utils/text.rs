use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]+>").unwrap();
}

/// Remove carriage returns and newlines so heading elements match as one span
pub fn collapse_newlines(text: &str) -> String {
    text.replace(['\r', '\n'], "")
}

/// Strip HTML tags from text
pub fn strip_html_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").to_string()
}

/// Derive an anchor id from heading display text
///
/// The text is lowercased and every character outside `a-z` becomes a hyphen.
/// Two headings that fold to the same id keep the same id; collisions are the
/// caller's problem.
pub fn anchor_id(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() { c } else { '-' })
        .collect()
}
