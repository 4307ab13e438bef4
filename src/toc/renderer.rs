use crate::toc::types::HeadingTree;
use crate::toc::TocOptions;
use crate::utils::text::{anchor_id, strip_html_tags};

/// Render a heading tree as a nested unordered HTML list
pub fn render_toc_list(headings: &HeadingTree) -> String {
    render_list(headings, "ul", "")
}

/// Render a heading tree with custom list options
pub fn render_toc_list_with_options(headings: &HeadingTree, options: &TocOptions) -> String {
    let list_tag = if options.ordered_list { "ol" } else { "ul" };
    render_list(headings, list_tag, &options.list_class)
}

fn render_list(headings: &HeadingTree, list_tag: &str, list_class: &str) -> String {
    let mut toc_list = if list_class.is_empty() {
        format!("<{}>", list_tag)
    } else {
        format!("<{} class='{}'>", list_tag, list_class)
    };

    for heading in headings {
        // Markup embedded in the heading is dropped from the display text,
        // and the anchor id is derived from what is left
        let display_text = strip_html_tags(&heading.text);
        let id = anchor_id(&display_text);

        toc_list.push_str(&format!("<li><a href='#{}'>{}</a>", id, display_text));

        if !heading.children.is_empty() {
            // sub-lists never carry the class
            toc_list.push_str(&render_list(&heading.children, list_tag, ""));
        }

        toc_list.push_str("</li>");
    }

    toc_list.push_str(&format!("</{}>", list_tag));
    toc_list
}
