use serde::{Deserialize, Serialize};

/// A single heading extracted from article text
///
/// The text is the raw inner content of the heading element, embedded markup
/// included; it is only stripped for display when the TOC is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub text: String,
    pub children: HeadingTree,
}

/// An ordered mapping from heading text to sub-headings
///
/// Siblings keep document order. The mapping is keyed by the raw heading
/// text: inserting a duplicate key keeps the first position but replaces the
/// children with those of the later occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadingTree {
    nodes: Vec<Heading>,
}

impl HeadingTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Insert a heading, replacing the children of an existing entry with the
    /// same text
    pub fn insert(&mut self, text: String, children: HeadingTree) {
        if let Some(existing) = self.nodes.iter_mut().find(|node| node.text == text) {
            existing.children = children;
        } else {
            self.nodes.push(Heading { text, children });
        }
    }

    /// Look up a heading by its raw text
    pub fn get(&self, text: &str) -> Option<&Heading> {
        self.nodes.iter().find(|node| node.text == text)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Heading> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<'a> IntoIterator for &'a HeadingTree {
    type Item = &'a Heading;
    type IntoIter = std::slice::Iter<'a, Heading>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// The combined output of a table of contents generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocResult {
    /// The TOC as nested HTML list markup, empty when no headings exist
    pub toc_list: String,
    /// The article text with an `id` attribute injected into each heading
    pub updated_text: String,
    /// Number of TOC anchors processed during annotation
    pub heading_count: usize,
    /// Empty on success; set when the article has no headings at all
    pub error_msg: String,
}
