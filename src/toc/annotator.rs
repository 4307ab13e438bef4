use lazy_static::lazy_static;
use log::warn;
use regex::{Captures, Regex};

use crate::utils::error::{BoxResult, TocifyError};

lazy_static! {
    static ref ANCHOR_LINK_REGEX: Regex = Regex::new(r"<a href='#(.+?)'>(.+?)</a>").unwrap();
}

/// Inject an `id` attribute into each article heading referenced by the TOC
///
/// The rendered TOC markup is scanned for its anchor links in order; for each
/// `(id, text)` pair, the first heading element containing the text gets the
/// id spliced into its opening tag, keeping its other attributes and content.
/// Returns the updated article text and the heading count.
pub fn add_heading_ids(article_text: &str, toc_list: &str) -> BoxResult<(String, usize)> {
    let mut updated_text = article_text.to_string();
    let mut heading_count = 0;

    for link in ANCHOR_LINK_REGEX.captures_iter(toc_list) {
        let id = &link[1];
        let text = &link[2];

        let pattern = format!(r"<h(\d)(.*?)>(.*){}(.*)</h\d>", regex::escape(text));
        let heading_regex = Regex::new(&pattern)
            .map_err(|err| TocifyError::Pattern(err.to_string()))?;

        if !heading_regex.is_match(&updated_text) {
            warn!("TOC heading '{}' was not found in the article text", text);
        }

        updated_text = heading_regex
            .replace(&updated_text, |caps: &Captures| {
                format!(
                    "<h{}{} id='{}'>{}{}{}</h{}>",
                    &caps[1], &caps[2], id, &caps[3], text, &caps[4], &caps[1]
                )
            })
            .into_owned();

        // the count follows the TOC anchors, not the replacements
        heading_count += 1;
    }

    Ok((updated_text, heading_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_id_to_single_heading() {
        let toc = "<ul><li><a href='#intro'>Intro</a></li></ul>";
        let (updated, count) = add_heading_ids("<h1>Intro</h1>", toc).unwrap();

        assert_eq!(updated, "<h1 id='intro'>Intro</h1>");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_preserves_existing_attributes() {
        let toc = "<ul><li><a href='#setup'>Setup</a></li></ul>";
        let (updated, count) = add_heading_ids("<h2 class='big'>Setup</h2>\nbody", toc).unwrap();

        assert_eq!(updated, "<h2 class='big' id='setup'>Setup</h2>\nbody");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_annotates_each_heading_on_its_own_line() {
        let article = "<h1>A</h1>\n<p>x</p>\n<h2>B</h2>";
        let toc = "<ul><li><a href='#a'>A</a><ul><li><a href='#b'>B</a></li></ul></li></ul>";
        let (updated, count) = add_heading_ids(article, toc).unwrap();

        assert_eq!(updated, "<h1 id='a'>A</h1>\n<p>x</p>\n<h2 id='b'>B</h2>");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_keeps_markup_wrapping_the_heading_text() {
        let toc = "<ul><li><a href='#hot-tips'>Hot Tips</a></li></ul>";
        let (updated, _) = add_heading_ids("<h1><em>Hot Tips</em></h1>\nrest", toc).unwrap();

        assert_eq!(updated, "<h1 id='hot-tips'><em>Hot Tips</em></h1>\nrest");
    }

    #[test]
    fn test_markup_splitting_the_heading_text_counts_but_does_not_annotate() {
        // the display text is no longer a contiguous substring of the raw
        // heading content, so the lookup misses and only the count moves
        let toc = "<ul><li><a href='#hot-tips'>Hot Tips</a></li></ul>";
        let (updated, count) = add_heading_ids("<h1><em>Hot</em> Tips</h1>", toc).unwrap();

        assert_eq!(updated, "<h1><em>Hot</em> Tips</h1>");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_counts_anchor_even_when_heading_is_missing() {
        let toc = "<ul><li><a href='#ghost'>Ghost</a></li></ul>";
        let (updated, count) = add_heading_ids("<p>no headings here</p>", toc).unwrap();

        assert_eq!(updated, "<p>no headings here</p>");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_escapes_regex_metacharacters_in_heading_text() {
        let toc = "<ul><li><a href='#c----tips-'>C++ (tips)</a></li></ul>";
        let (updated, count) = add_heading_ids("<h1>C++ (tips)</h1>\nbody", toc).unwrap();

        assert_eq!(updated, "<h1 id='c----tips-'>C++ (tips)</h1>\nbody");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_only_first_occurrence_is_annotated() {
        let article = "<h1>Same</h1>\n<p>mid</p>\n<h1>Same</h1>";
        let toc = "<ul><li><a href='#same'>Same</a></li></ul>";
        let (updated, _) = add_heading_ids(article, toc).unwrap();

        assert_eq!(updated, "<h1 id='same'>Same</h1>\n<p>mid</p>\n<h1>Same</h1>");
    }

    #[test]
    fn test_empty_toc_leaves_article_untouched() {
        let (updated, count) = add_heading_ids("<h1>A</h1>", "<ul></ul>").unwrap();

        assert_eq!(updated, "<h1>A</h1>");
        assert_eq!(count, 0);
    }
}
