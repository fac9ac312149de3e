//! HTML parsing support.
//!
//! Parsing and tag-soup recovery are left to `scraper` (html5ever). This
//! module only copies the parsed document into the owned [`Node`] tree the
//! renderer works on.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML string into a Node tree.
///
/// Returns the document's root element (normally `<html>`, which the parser
/// synthesizes for fragments), or `None` if the parser produced no element at
/// all.
///
/// # Example
///
/// ```rust
/// use pastedown::{parse_html, Converter};
///
/// let root = parse_html("<h1>Hello <em>World</em></h1>").unwrap();
/// assert_eq!(root.tag_name(), "html");
///
/// let markdown = Converter::new().convert_node(&root).unwrap();
/// assert_eq!(markdown, "# Hello *World*\n");
/// ```
pub fn parse_html(html: &str) -> Option<Node> {
    let document = Html::parse_document(html);
    for error in &document.errors {
        tracing::trace!(%error, "html parse error");
    }

    document
        .tree
        .root()
        .children()
        .find_map(ElementRef::wrap)
        .map(scraper_to_node)
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Node::element_with_attrs(element.value().name(), attrs);

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
