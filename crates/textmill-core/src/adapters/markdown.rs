//! Markdown adapter
//!
//! Lowers Markdown into HTML markup with the same tag vocabulary the HTML
//! adapter consumes, then delegates tree building to it. Both surface
//! formats therefore converge on a single classification path.

use pulldown_cmark::{html, Options, Parser};

use crate::config::PartitionOptions;
use crate::error::Result;
use crate::tree::Node;

/// Parse Markdown text into a forest of normalized nodes
pub(crate) fn parse_markdown(text: &str, options: &PartitionOptions) -> Result<Vec<Node>> {
    let extensions = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, extensions);

    let mut markup = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut markup, parser);

    super::html::parse_html(&markup, options)
}
