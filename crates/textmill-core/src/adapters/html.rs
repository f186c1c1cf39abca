//! HTML adapter
//!
//! Builds the normalized node tree from an HTML5 parse. Non-content
//! subtrees (scripts, styles, the document head) are skipped, inline
//! formatting elements are folded into their parent's text, and with
//! `keep_original_structure` off, structurally-insignificant wrappers that
//! carry no text of their own are flattened away.

use scraper::{ElementRef, Html};

use crate::config::PartitionOptions;
use crate::error::Result;
use crate::tree::Node;

/// Subtrees that never contribute content
const SKIP_TAGS: &[&str] = &["script", "style", "head", "template", "noscript"];

/// Inline formatting elements folded into the enclosing block's text
const INLINE_TAGS: &[&str] = &[
    "a", "abbr", "b", "cite", "code", "em", "i", "mark", "q", "s", "small", "span", "strong",
    "sub", "sup", "time", "u",
];

/// Wrappers that may be flattened when they carry no text of their own
const WRAPPER_TAGS: &[&str] = &["html", "body", "div", "section", "article", "main"];

/// Parse HTML text into a forest of normalized nodes
///
/// HTML5 parsing is recovering by definition; markup the parser can repair
/// in-algorithm is not treated as a partition failure.
pub(crate) fn parse_html(text: &str, options: &PartitionOptions) -> Result<Vec<Node>> {
    let document = Html::parse_document(text);
    if !document.errors.is_empty() {
        tracing::debug!(
            errors = document.errors.len(),
            "html parser recovered from malformed markup"
        );
    }

    Ok(build_node(document.root_element(), options))
}

/// Build tree nodes for one element; returns the flattened children when
/// the element itself is an empty wrapper
fn build_node(element: ElementRef<'_>, options: &PartitionOptions) -> Vec<Node> {
    let tag = element.value().name();
    if SKIP_TAGS.contains(&tag) {
        return Vec::new();
    }

    let mut node = Node::new(tag);
    for (key, value) in element.value().attrs() {
        node.attrs.insert(key.to_string(), value.to_string());
    }

    let mut text_buf = String::new();
    for child in element.children() {
        match child.value() {
            scraper::node::Node::Text(text) => text_buf.push_str(text),
            scraper::node::Node::Element(el) if INLINE_TAGS.contains(&el.name()) => {
                if let Some(inline) = ElementRef::wrap(child) {
                    collect_inline_text(inline, &mut text_buf);
                }
            }
            scraper::node::Node::Element(_) => {
                if let Some(block) = ElementRef::wrap(child) {
                    node.children.extend(build_node(block, options));
                }
            }
            _ => {}
        }
    }
    node.set_text(&text_buf);

    if options.preserve_tags {
        node.raw = Some(element.html());
    }

    if !options.keep_original_structure && WRAPPER_TAGS.contains(&tag) && node.text.is_none() {
        return node.children;
    }

    vec![node]
}

/// Append the text of an inline element and its descendants, skipping
/// non-content subtrees
fn collect_inline_text(element: ElementRef<'_>, buf: &mut String) {
    if SKIP_TAGS.contains(&element.value().name()) {
        return;
    }
    for child in element.children() {
        match child.value() {
            scraper::node::Node::Text(text) => buf.push_str(text),
            scraper::node::Node::Element(_) => {
                if let Some(el) = ElementRef::wrap(child) {
                    collect_inline_text(el, buf);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<html><head><title>Ignored</title><style>p{}</style></head>\
<body><h1>Annual Report</h1><div><p>Revenue grew by ten percent this year.</p>\
<ul><li>North region</li><li>South region</li></ul></div>\
<table><tr><td>Region</td><td>Total</td></tr><tr><td>North</td><td>120</td></tr></table>\
</body></html>";

    #[test]
    fn test_wrappers_flatten_by_default() {
        let roots = parse_html(PAGE, &PartitionOptions::default()).unwrap();

        let tags: Vec<&str> = roots.iter().map(|n| n.tag.as_str()).collect();
        assert_eq!(tags, vec!["h1", "p", "ul", "table"]);
    }

    #[test]
    fn test_keep_original_structure_retains_wrappers() {
        let mut options = PartitionOptions::default();
        options.keep_original_structure = true;
        let roots = parse_html(PAGE, &options).unwrap();

        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].tag, "html");
        assert_eq!(roots[0].children[0].tag, "body");
    }

    #[test]
    fn test_head_and_style_are_skipped() {
        let roots = parse_html(PAGE, &PartitionOptions::default()).unwrap();
        let all_text: Vec<String> = roots.iter().map(Node::deep_text).collect();

        assert!(!all_text.iter().any(|t| t.contains("Ignored")));
        assert!(!all_text.iter().any(|t| t.contains("p{}")));
    }

    #[test]
    fn test_inline_elements_fold_into_parent_text() {
        let roots = parse_html(
            "<p>Hello <b>brave</b> new <a href=\"/w\">world</a>.</p>",
            &PartitionOptions::default(),
        )
        .unwrap();

        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].text.as_deref(), Some("Hello brave new world."));
        assert!(roots[0].children.is_empty());
    }

    #[test]
    fn test_table_subtree_is_preserved() {
        let roots = parse_html(PAGE, &PartitionOptions::default()).unwrap();
        let table = roots.iter().find(|n| n.tag == "table").unwrap();

        // html5ever inserts tbody per the HTML table model.
        let rows: Vec<&Node> = table
            .children
            .iter()
            .flat_map(|child| {
                if child.tag == "tbody" {
                    child.children.iter().collect::<Vec<_>>()
                } else {
                    vec![child]
                }
            })
            .collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].children[0].text.as_deref(), Some("Region"));
    }

    #[test]
    fn test_attributes_are_captured_as_mapping() {
        let roots = parse_html(
            "<p id=\"intro\" class=\"lead\">text</p>",
            &PartitionOptions::default(),
        )
        .unwrap();

        assert_eq!(roots[0].attrs.get("id").unwrap(), "intro");
        assert_eq!(roots[0].attrs.get("class").unwrap(), "lead");
    }

    #[test]
    fn test_preserve_tags_serializes_element_markup() {
        let options = PartitionOptions::default().with_preserve_tags(true);
        let roots = parse_html("<p>Joe <b>Biden</b></p>", &options).unwrap();

        assert_eq!(roots[0].raw.as_deref(), Some("<p>Joe <b>Biden</b></p>"));
        assert_eq!(roots[0].text.as_deref(), Some("Joe Biden"));
    }

    #[test]
    fn test_empty_document_yields_empty_forest() {
        let roots = parse_html("", &PartitionOptions::default()).unwrap();
        assert!(roots.is_empty());
    }
}
