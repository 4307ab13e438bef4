use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::text::collapse_newlines;

lazy_static! {
    static ref ANY_HEADING_REGEX: Regex = Regex::new(r"<h[1-6].*?>(.+?)</h[1-6]>").unwrap();
}

/// Check whether the article text contains at least one heading element
///
/// Newlines are collapsed first so headings split across lines still count.
/// Absence of headings is a normal `false`, never an error.
pub fn has_headings(article_text: &str) -> bool {
    ANY_HEADING_REGEX.is_match(&collapse_newlines(article_text))
}
