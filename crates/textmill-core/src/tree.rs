//! Normalized node tree shared by the format adapters and the classifier
//!
//! The tree is a transient, crate-private structure: adapters build it, the
//! classifier consumes it, and it is dropped before a partition call
//! returns. It never appears in the public API.

use std::collections::HashMap;

/// One node of the normalized tree
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Node {
    /// Tag name as reported by the adapter
    pub tag: String,
    /// Attribute mapping; keys are unique and order-independent
    pub attrs: HashMap<String, String>,
    /// Child nodes in document order
    pub children: Vec<Node>,
    /// Concatenation of the node's immediate text, whitespace-normalized
    pub text: Option<String>,
    /// Literal serialized substring spanning the node's own tags, populated
    /// only in tag-preservation mode
    pub raw: Option<String>,
}

impl Node {
    /// Create a node with the given tag and no content
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set immediate text, collapsing runs of whitespace to single spaces
    /// and whitespace-only content to `None`
    pub fn set_text(&mut self, text: &str) {
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if normalized.is_empty() {
            self.text = None;
        } else {
            self.text = Some(normalized);
        }
    }

    /// Text the classifier should emit for this node: the literal span in
    /// tag-preservation mode, stripped text otherwise
    pub fn emitted_text(&self) -> Option<&str> {
        self.raw.as_deref().or(self.text.as_deref())
    }

    /// Concatenated text of this node and all descendants, in document
    /// order, separated by single spaces
    pub fn deep_text(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join(" ")
    }

    fn collect_text<'a>(&'a self, parts: &mut Vec<&'a str>) {
        if let Some(text) = self.text.as_deref() {
            parts.push(text);
        }
        for child in &self.children {
            child.collect_text(parts);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_text_collapses_to_none() {
        let mut node = Node::new("p");
        node.set_text("   \n\t ");
        assert_eq!(node.text, None);
    }

    #[test]
    fn test_emitted_text_prefers_raw_span() {
        let mut node = Node::new("leader");
        node.set_text("Joe Biden");
        node.raw = Some("<leader>Joe Biden</leader>".to_string());
        assert_eq!(node.emitted_text(), Some("<leader>Joe Biden</leader>"));
    }

    #[test]
    fn test_deep_text_walks_descendants_in_order() {
        let mut row = Node::new("tr");
        let mut first = Node::new("td");
        first.set_text("Name");
        let mut second = Node::new("td");
        second.set_text("Capital");
        row.children = vec![first, second];

        assert_eq!(row.deep_text(), "Name Capital");
    }
}
