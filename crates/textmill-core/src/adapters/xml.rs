//! XML adapter
//!
//! Builds the normalized node tree 1:1 with the source document: one tree
//! node per element node, attributes as a mapping, text as the
//! concatenation of a node's immediate text (never descendants' text). In
//! tag-preservation mode every node additionally records the literal
//! serialized substring spanning its own opening and closing tags.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::config::PartitionOptions;
use crate::error::{Error, Result};
use crate::tree::Node;

/// Open element under construction
struct OpenNode {
    node: Node,
    /// Byte offset of the element's `<` in the input
    span_start: usize,
    /// Immediate text pieces seen so far
    text_parts: Vec<String>,
}

/// Parse XML text into a forest of normalized nodes
pub(crate) fn parse_xml(text: &str, options: &PartitionOptions) -> Result<Vec<Node>> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<OpenNode> = Vec::new();
    let mut roots: Vec<Node> = Vec::new();

    loop {
        let event_start = reader.buffer_position() as usize;
        match reader.read_event() {
            Err(err) => {
                return Err(Error::parse(err.to_string(), Some(reader.error_position())));
            }
            Ok(Event::Start(start)) => {
                let node = node_from_start(&start, &reader)?;
                stack.push(OpenNode {
                    node,
                    span_start: event_start,
                    text_parts: Vec::new(),
                });
            }
            Ok(Event::Empty(start)) => {
                let mut node = node_from_start(&start, &reader)?;
                if options.preserve_tags {
                    let span_end = reader.buffer_position() as usize;
                    node.raw = Some(text[event_start..span_end].to_string());
                }
                attach(&mut stack, &mut roots, node);
            }
            Ok(Event::End(_)) => {
                // Balance is checked by the reader; a stray end tag surfaces
                // as Err above before this arm is reached.
                if let Some(open) = stack.pop() {
                    let OpenNode {
                        mut node,
                        span_start,
                        text_parts,
                    } = open;
                    node.set_text(&text_parts.join(" "));
                    if options.preserve_tags {
                        let span_end = reader.buffer_position() as usize;
                        node.raw = Some(text[span_start..span_end].to_string());
                    }
                    attach(&mut stack, &mut roots, node);
                }
            }
            Ok(Event::Text(escaped)) => {
                if let Some(open) = stack.last_mut() {
                    let piece = escaped
                        .unescape()
                        .map_err(|err| Error::parse(err.to_string(), Some(reader.error_position())))?;
                    push_text_piece(&mut open.text_parts, &piece);
                }
            }
            Ok(Event::CData(cdata)) => {
                if let Some(open) = stack.last_mut() {
                    let piece = String::from_utf8_lossy(&cdata).into_owned();
                    push_text_piece(&mut open.text_parts, &piece);
                }
            }
            Ok(Event::Eof) => break,
            // Declarations, processing instructions, comments and doctypes
            // carry no content for the tree.
            Ok(_) => {}
        }
    }

    Ok(roots)
}

/// Build a node from a start tag: name plus attribute mapping
fn node_from_start(start: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Node> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut node = Node::new(tag);

    for attr in start.attributes() {
        let attr = attr
            .map_err(|err| Error::parse(err.to_string(), Some(reader.error_position())))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| Error::parse(err.to_string(), Some(reader.error_position())))?
            .into_owned();
        node.attrs.insert(key, value);
    }

    Ok(node)
}

/// Attach a completed node to its parent, or to the root forest
fn attach(stack: &mut [OpenNode], roots: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.node.children.push(node),
        None => roots.push(node),
    }
}

fn push_text_piece(parts: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        parts.push(trimmed.to_string());
    }
}
