//! # pastedown
//!
//! Convert HTML to clean, normalized Markdown.
//!
//! ## Design
//!
//! HTML is parsed with an HTML5 parser (`scraper`) and copied into an owned
//! [`Node`] tree. A tag-dispatched renderer walks that tree and a final
//! normalization pass makes the output canonical:
//!
//! ```text
//! HTML ──parse──▶ Node tree ──render──▶ raw Markdown ──normalize──▶ Markdown
//! ```
//!
//! The renderer never fails on odd input. Missing attributes become empty
//! strings and unknown tags are rendered as their children.
//!
//! ## Example (HTML string)
//!
//! ```rust
//! let markdown = pastedown::convert(
//!     "<h1>Title</h1><p>Hello <strong>bold</strong> <em>world</em></p><ul><li>one</li><li>two</li></ul>",
//! )
//! .unwrap();
//! assert_eq!(markdown, "# Title\n\nHello **bold** *world*\n\n- one\n- two\n");
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use pastedown::{Converter, Node};
//!
//! let mut h1 = Node::element("h1");
//! h1.add_child(Node::text("Hello World"));
//!
//! let markdown = Converter::new().convert_node(&h1).unwrap();
//! assert_eq!(markdown, "# Hello World\n");
//! ```

mod context;
pub mod html;
pub mod node;
mod normalize;
mod options;
mod rules;
mod service;
mod utilities;

pub use html::parse_html;
pub use node::{Node, NodeType};
pub use normalize::normalize;
pub use options::Options;
pub use rules::Tag;
pub use service::Converter;

/// Error type for conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("document has no root element")]
    NoRootElement,
}

pub type Result<T> = std::result::Result<T, ConversionError>;

/// Convert an HTML string to Markdown with default [`Options`].
pub fn convert(html: &str) -> Result<String> {
    Converter::new().convert(html)
}
