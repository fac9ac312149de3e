//! Inline rules: emphasis, code spans, links and images.

use super::render_children;
use crate::context::RenderContext;
use crate::node::Node;
use crate::options::Options;

pub(super) fn render_strong(node: &Node, options: &Options, ctx: &mut RenderContext) -> String {
    let content = render_children(node, options, ctx);
    let delimiter = &options.strong_delimiter;
    format!("{}{}{}", delimiter, content, delimiter)
}

pub(super) fn render_emphasis(node: &Node, options: &Options, ctx: &mut RenderContext) -> String {
    let content = render_children(node, options, ctx);
    let delimiter = options.em_delimiter;
    format!("{}{}{}", delimiter, content, delimiter)
}

/// Code span over the raw text of the subtree
pub(super) fn render_code(node: &Node) -> String {
    format!("`{}`", node.text_content())
}

/// `[text](href)`, or the bare href when the text is the href itself
pub(super) fn render_link(node: &Node, options: &Options, ctx: &mut RenderContext) -> String {
    let text = render_children(node, options, ctx);
    let href = node.attr("href").unwrap_or("");

    if text == href {
        return href.to_string();
    }

    format!("[{}]({})", text, href)
}

pub(super) fn render_image(node: &Node) -> String {
    let alt = node.attr("alt").unwrap_or("");
    let src = node.attr("src").unwrap_or("");
    format!("![{}]({})", alt, src)
}
