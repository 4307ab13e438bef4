pub mod annotator;
pub mod detector;
pub mod extractor;
pub mod renderer;
pub mod types;

pub use annotator::add_heading_ids;
pub use detector::has_headings;
pub use extractor::extract_headings;
pub use renderer::{render_toc_list, render_toc_list_with_options};
pub use types::{Heading, HeadingTree, TocResult};

use log::debug;

use crate::utils::error::BoxResult;

/// Options for table of contents generation
#[derive(Debug, Clone, Default)]
pub struct TocOptions {
    /// Render the TOC as an ordered list instead of an unordered one
    pub ordered_list: bool,
    /// CSS class for the outermost TOC list, none when empty
    pub list_class: String,
}

/// Error message surfaced when the article has no headings
pub const NO_HEADINGS_MSG: &str = "The given article text has no headings !";

/// Generate a table of contents for the given article text
///
/// On success the result carries the TOC as a nested HTML list, a copy of the
/// article in which every listed heading gained an `id` attribute, and the
/// heading count. An article without headings is not an error: the result
/// comes back with empty markup, an empty updated text and a non-empty
/// `error_msg`.
pub fn generate(article_text: &str) -> BoxResult<TocResult> {
    generate_with_options(article_text, &TocOptions::default())
}

/// Generate a table of contents with custom list options
pub fn generate_with_options(article_text: &str, options: &TocOptions) -> BoxResult<TocResult> {
    if !has_headings(article_text) {
        debug!("article text contains no headings");
        return Ok(TocResult {
            toc_list: String::new(),
            updated_text: String::new(),
            heading_count: 0,
            error_msg: NO_HEADINGS_MSG.to_string(),
        });
    }

    let headings = extract_headings(article_text, 1);
    debug!("extracted {} top-level headings", headings.len());

    let toc_list = render_toc_list_with_options(&headings, options);
    let (updated_text, heading_count) = add_heading_ids(article_text, &toc_list)?;

    Ok(TocResult {
        toc_list,
        updated_text,
        heading_count,
        error_msg: String::new(),
    })
}
