//! Converter - the main entry point for HTML to Markdown conversion.

use crate::context::RenderContext;
use crate::html::parse_html;
use crate::node::Node;
use crate::normalize::normalize;
use crate::options::Options;
use crate::rules::render_element;
use crate::{ConversionError, Result};

/// Converts HTML documents (or already-built [`Node`] trees) to Markdown.
///
/// A converter only holds its options, so one instance can be shared and
/// reused for any number of documents.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: Options,
}

impl Converter {
    /// Create a new Converter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Converter with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Convert an HTML string to Markdown.
    ///
    /// Fails with [`ConversionError::NoRootElement`] only when the parser
    /// yields no element at all.
    pub fn convert(&self, html: &str) -> Result<String> {
        tracing::debug!(input_len = html.len(), "converting html");
        let root = parse_html(html).ok_or(ConversionError::NoRootElement)?;
        self.convert_node(&root)
    }

    /// Convert a Node tree to Markdown.
    ///
    /// Rendering starts at the first `body` element below `root`, or at
    /// `root` itself when there is none.
    pub fn convert_node(&self, root: &Node) -> Result<String> {
        if !root.is_element() {
            return Err(ConversionError::NoRootElement);
        }

        let render_root = match root.first_descendant_named("body") {
            Some(body) => body,
            None => {
                tracing::debug!(root = root.tag_name(), "no body element, rendering from root");
                root
            }
        };

        let mut ctx = RenderContext::new();
        let raw = render_element(render_root, &self.options, &mut ctx);
        let markdown = normalize(&raw);

        tracing::debug!(raw_len = raw.len(), output_len = markdown.len(), "converted html");
        Ok(markdown)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}
