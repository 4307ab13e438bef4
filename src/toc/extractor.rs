use lazy_static::lazy_static;
use regex::Regex;

use crate::toc::types::HeadingTree;
use crate::utils::text::collapse_newlines;

/// Deepest heading level that is scanned for
pub const MAX_LEVEL: usize = 6;

lazy_static! {
    // One matcher per heading level; the content match is non-greedy so a
    // heading ends at its own closing tag, not a later one
    static ref LEVEL_REGEXES: Vec<Regex> = (1..=MAX_LEVEL)
        .map(|level| Regex::new(&format!("<h{}.*?>(.+?)</h{}>", level, level)).unwrap())
        .collect();
}

/// Extract the heading hierarchy from a span of article text
///
/// Scanning starts at the given level (callers normally pass 1). A level with
/// no matches delegates the whole span to the next deeper level, so an
/// article whose shallowest heading is `<h3>` still produces a tree rooted at
/// those headings. Levels outside 1-6 yield an empty tree.
pub fn extract_headings(article_text: &str, level: usize) -> HeadingTree {
    if level == 0 || level > MAX_LEVEL {
        return HeadingTree::new();
    }

    let text = collapse_newlines(article_text);
    extract_from_normalized(&text, level)
}

fn extract_from_normalized(text: &str, level: usize) -> HeadingTree {
    let regex = &LEVEL_REGEXES[level - 1];

    // Collect (start, end, heading text) for every heading at this level
    let matches: Vec<(usize, usize, String)> = regex
        .captures_iter(text)
        .map(|cap| {
            let whole = cap.get(0).unwrap();
            (whole.start(), whole.end(), cap[1].to_string())
        })
        .collect();

    // No headings here: hand the span to the next deeper level
    if matches.is_empty() {
        if level < MAX_LEVEL {
            return extract_from_normalized(text, level + 1);
        }
        return HeadingTree::new();
    }

    let mut headings = HeadingTree::new();

    for (index, (_, end, heading_text)) in matches.iter().enumerate() {
        // The sub-heading span runs from this heading's end to the start of
        // the next same-level heading, or to the end of the span
        let span_end = matches
            .get(index + 1)
            .map(|next| next.0)
            .unwrap_or(text.len());
        let between = &text[*end..span_end];

        let children = if level < MAX_LEVEL {
            extract_from_normalized(between, level + 1)
        } else {
            HeadingTree::new()
        };

        headings.insert(heading_text.clone(), children);
    }

    headings
}
