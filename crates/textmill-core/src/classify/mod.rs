//! Element classification over the normalized node tree
//!
//! A pure function of the tree: walks it in document pre-order and emits
//! one element per content-bearing node. Classification is driven by the
//! node's tag first and text-shape heuristics second; tag-preservation mode
//! changes only the emitted text, never the assigned kind.

mod heuristics;

use crate::config::PartitionOptions;
use crate::tree::Node;
use crate::types::{Element, ElementKind};

use heuristics::{is_possible_address, is_possible_narrative};

/// Heading-level tags; every one of them yields a `Title`
const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Cell delimiter used when flattening tabular content
const CELL_DELIMITER: &str = " | ";

/// Classify a node forest into an ordered element sequence
pub(crate) fn classify(roots: &[Node], options: &PartitionOptions) -> Vec<Element> {
    let mut elements = Vec::new();
    for node in roots {
        visit(node, options, &mut elements);
    }
    elements
}

fn visit(node: &Node, options: &PartitionOptions, out: &mut Vec<Element>) {
    if node.tag == "table" {
        // One element per table; the subtree is consumed here and not
        // visited again.
        let flattened = flatten_table(node);
        if !flattened.is_empty() {
            let text = match node.raw.as_deref() {
                Some(raw) if options.preserve_tags => raw.to_string(),
                _ => flattened,
            };
            out.push(Element::new(ElementKind::Table, text));
        }
        return;
    }

    if let Some(text) = node.text.as_deref() {
        let kind = classify_text(&node.tag, text);
        let emitted = node.emitted_text().unwrap_or(text);
        out.push(Element::new(kind, emitted));
    }

    for child in &node.children {
        visit(child, options, out);
    }
}

/// Assign a kind from the tag, falling back to text-shape heuristics.
/// Heuristics always run on the stripped text, so the assignment is
/// identical with and without tag preservation.
fn classify_text(tag: &str, text: &str) -> ElementKind {
    if HEADING_TAGS.contains(&tag) {
        return ElementKind::Title;
    }
    if tag == "li" {
        return ElementKind::ListItem;
    }
    if is_possible_address(text) {
        return ElementKind::Address;
    }
    if is_possible_narrative(text) {
        return ElementKind::NarrativeText;
    }
    ElementKind::UncategorizedText
}

/// Flatten a table subtree row-major: cells joined by a stable delimiter,
/// rows separated by newlines
fn flatten_table(table: &Node) -> String {
    let mut rows = Vec::new();
    collect_rows(table, &mut rows);

    if rows.is_empty() {
        // Tabular markup without row structure degrades to its text.
        return table.deep_text();
    }

    rows.join("\n")
}

fn collect_rows(node: &Node, rows: &mut Vec<String>) {
    if node.tag == "tr" {
        let cells: Vec<String> = node
            .children
            .iter()
            .filter(|cell| cell.tag == "td" || cell.tag == "th")
            .map(Node::deep_text)
            .collect();
        if !cells.iter().all(String::is_empty) {
            rows.push(cells.join(CELL_DELIMITER));
        }
        return;
    }
    for child in &node.children {
        collect_rows(child, rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{html::parse_html, xml::parse_xml};

    fn kinds(elements: &[Element]) -> Vec<ElementKind> {
        elements.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_first_element_of_heading_document_is_title() {
        let roots = parse_html(
            "<h1>Annual Report</h1><p>Revenue grew by ten percent this year.</p>",
            &PartitionOptions::default(),
        )
        .unwrap();
        let elements = classify(&roots, &PartitionOptions::default());

        assert_eq!(elements[0], Element::new(ElementKind::Title, "Annual Report"));
    }

    #[test]
    fn test_every_heading_yields_a_title() {
        let roots = parse_html(
            "<h1>Report</h1><p>Intro text goes here now.</p><h2>Details</h2>",
            &PartitionOptions::default(),
        )
        .unwrap();
        let elements = classify(&roots, &PartitionOptions::default());

        let titles = elements
            .iter()
            .filter(|e| e.kind == ElementKind::Title)
            .count();
        assert_eq!(titles, 2);
    }

    #[test]
    fn test_list_items_classify_as_list_item() {
        let roots = parse_html(
            "<ul><li>North region</li><li>South region</li></ul>",
            &PartitionOptions::default(),
        )
        .unwrap();
        let elements = classify(&roots, &PartitionOptions::default());

        assert_eq!(
            kinds(&elements),
            vec![ElementKind::ListItem, ElementKind::ListItem]
        );
    }

    #[test]
    fn test_table_flattens_row_major_with_stable_delimiter() {
        let roots = parse_html(
            "<table><tr><td>Region</td><td>Total</td></tr>\
             <tr><td>North</td><td>120</td></tr></table>",
            &PartitionOptions::default(),
        )
        .unwrap();
        let elements = classify(&roots, &PartitionOptions::default());

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].kind, ElementKind::Table);
        assert_eq!(elements[0].text, "Region | Total\nNorth | 120");
    }

    #[test]
    fn test_table_cells_are_not_emitted_separately() {
        let roots = parse_html(
            "<table><tr><td>only cell</td></tr></table><p>After the table comes prose.</p>",
            &PartitionOptions::default(),
        )
        .unwrap();
        let elements = classify(&roots, &PartitionOptions::default());

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1].kind, ElementKind::NarrativeText);
    }

    #[test]
    fn test_narrative_and_uncategorized_split_by_heuristics() {
        let roots = parse_xml(
            "<doc><summary>The republic held its elections in November.</summary>\
             <name>United States</name></doc>",
            &PartitionOptions::default(),
        )
        .unwrap();
        let elements = classify(&roots, &PartitionOptions::default());

        assert_eq!(
            kinds(&elements),
            vec![ElementKind::NarrativeText, ElementKind::UncategorizedText]
        );
    }

    #[test]
    fn test_address_shaped_text_classifies_as_address() {
        let roots = parse_xml(
            "<offices><hq>Doylestown, PA 18901</hq></offices>",
            &PartitionOptions::default(),
        )
        .unwrap();
        let elements = classify(&roots, &PartitionOptions::default());

        assert_eq!(elements[0].kind, ElementKind::Address);
    }

    #[test]
    fn test_empty_and_whitespace_nodes_emit_nothing() {
        let elements = classify(&[], &PartitionOptions::default());
        assert!(elements.is_empty());

        let roots = parse_xml(
            "<doc><blank>   </blank><empty/></doc>",
            &PartitionOptions::default(),
        )
        .unwrap();
        let elements = classify(&roots, &PartitionOptions::default());
        assert!(elements.is_empty());
    }

    #[test]
    fn test_preserve_tags_changes_text_but_never_kind() {
        let source = "<country><leader>Joe Biden</leader></country>";
        let stripped_opts = PartitionOptions::default();
        let preserved_opts = PartitionOptions::default().with_preserve_tags(true);

        let stripped = classify(&parse_xml(source, &stripped_opts).unwrap(), &stripped_opts);
        let preserved = classify(
            &parse_xml(source, &preserved_opts).unwrap(),
            &preserved_opts,
        );

        assert_eq!(stripped[0].text, "Joe Biden");
        assert_eq!(preserved[0].text, "<leader>Joe Biden</leader>");
        assert_eq!(stripped[0].kind, preserved[0].kind);
    }

    #[test]
    fn test_ordering_matches_document_order() {
        let roots = parse_html(
            "<h1>Report</h1><p>The first paragraph states the thesis.</p>\
             <ul><li>first</li><li>second</li></ul>",
            &PartitionOptions::default(),
        )
        .unwrap();
        let elements = classify(&roots, &PartitionOptions::default());

        assert_eq!(
            kinds(&elements),
            vec![
                ElementKind::Title,
                ElementKind::NarrativeText,
                ElementKind::ListItem,
                ElementKind::ListItem,
            ]
        );
    }
}
