//! Per-tag rendering rules.
//!
//! [`render_element`] resolves the node's [`Tag`] and hands it to the matching
//! rule. Rules return raw Markdown fragments; blank-line cleanup is left to
//! [`crate::normalize`].

mod inline;
mod list;
mod table;
mod tag;

pub use tag::Tag;

use crate::context::RenderContext;
use crate::node::{Node, NodeType};
use crate::options::Options;
use crate::utilities::language_from_class;

/// Render one node and its subtree.
pub(crate) fn render_element(node: &Node, options: &Options, ctx: &mut RenderContext) -> String {
    if node.is_text() {
        return node.value.clone().unwrap_or_default();
    }

    let mut ctx = ctx.descend();
    if let Some(max_depth) = options.max_depth {
        if ctx.depth() > max_depth {
            tracing::warn!(
                tag = node.tag_name(),
                depth = ctx.depth(),
                max_depth,
                "element nesting exceeds max_depth, emitting text content"
            );
            return node.text_content();
        }
    }

    match Tag::from_name(node.tag_name()) {
        Tag::Paragraph => render_paragraph(node, options, &mut ctx),
        Tag::LineBreak => "\n".to_string(),
        Tag::Strong => inline::render_strong(node, options, &mut ctx),
        Tag::Emphasis => inline::render_emphasis(node, options, &mut ctx),
        Tag::Code => inline::render_code(node),
        Tag::Preformatted => render_preformatted(node, options),
        Tag::Link => inline::render_link(node, options, &mut ctx),
        Tag::Heading(level) => render_heading(node, level, options, &mut ctx),
        Tag::UnorderedList => list::render_list(node, list::ListKind::Unordered, options, &mut ctx),
        Tag::OrderedList => list::render_list(node, list::ListKind::Ordered, options, &mut ctx),
        Tag::ListItem => render_children(node, options, &mut ctx),
        Tag::Blockquote => render_blockquote(node, options, &mut ctx),
        Tag::HorizontalRule => format!("\n\n{}\n\n", options.hr),
        Tag::Image => inline::render_image(node),
        Tag::Table => table::render_table(node, options, &mut ctx),
        Tag::Container => render_children(node, options, &mut ctx),
    }
}

/// Concatenate the rendering of every child in document order.
///
/// Text nodes pass through verbatim.
pub(crate) fn render_children(node: &Node, options: &Options, ctx: &mut RenderContext) -> String {
    let mut result = String::new();
    for child in node.children() {
        match child.node_type {
            NodeType::Text => result.push_str(child.value.as_deref().unwrap_or("")),
            NodeType::Element => result.push_str(&render_element(child, options, ctx)),
        }
    }
    result
}

fn render_paragraph(node: &Node, options: &Options, ctx: &mut RenderContext) -> String {
    let content = render_children(node, options, ctx);
    let content = content.trim();
    if content.is_empty() {
        return String::new();
    }
    format!("{}\n\n", content)
}

fn render_heading(node: &Node, level: u8, options: &Options, ctx: &mut RenderContext) -> String {
    let content = render_children(node, options, ctx);
    format!("{} {}\n\n", "#".repeat(usize::from(level)), content.trim())
}

fn render_blockquote(node: &Node, options: &Options, ctx: &mut RenderContext) -> String {
    let content = render_children(node, options, ctx);
    let quoted: Vec<String> = content.split('\n').map(|line| format!("> {}", line)).collect();
    format!("{}\n\n", quoted.join("\n"))
}

/// Fenced code block. The code is taken as raw text, never rendered.
fn render_preformatted(node: &Node, options: &Options) -> String {
    let (language, code) = match node.first_child_named("code") {
        Some(code) => (language_from_class(code.attr("class")), code.text_content()),
        // Without a <code> child the class is not consulted.
        None => ("", node.text_content()),
    };

    let fence = &options.fence;
    format!("{fence}{language}\n{code}\n{fence}\n\n")
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Render a node with default options and a fresh context
    pub(crate) fn render(node: &Node) -> String {
        render_with(node, &Options::default())
    }

    pub(crate) fn render_with(node: &Node, options: &Options) -> String {
        let mut ctx = RenderContext::new();
        let out = render_element(node, options, &mut ctx);
        assert_eq!(ctx.list_depth(), 0);
        assert_eq!(ctx.depth(), 0);
        out
    }

    pub(crate) fn el(tag: &str, text: &str) -> Node {
        Node::element(tag).with_child(Node::text(text))
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(render(&el("p", "  Hello World \n")), "Hello World\n\n");
    }

    #[test]
    fn test_empty_paragraph_is_elided() {
        assert_eq!(render(&el("p", "   ")), "");
        assert_eq!(render(&Node::element("p")), "");
    }

    #[test]
    fn test_line_break() {
        let p = Node::element("p")
            .with_child(Node::text("one"))
            .with_child(Node::element("br"))
            .with_child(Node::text("two"));
        assert_eq!(render(&p), "one\ntwo\n\n");
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(render(&el("h1", " Title ")), "# Title\n\n");
        assert_eq!(render(&el("H3", "Three")), "### Three\n\n");
        assert_eq!(render(&el("h6", "Six")), "###### Six\n\n");
    }

    #[test]
    fn test_blockquote_prefixes_every_line() {
        let quote = Node::element("blockquote").with_child(el("p", "This is a quote"));
        assert_eq!(render(&quote), "> This is a quote\n> \n> \n\n");
    }

    #[test]
    fn test_blockquote_inline_content() {
        let quote = el("blockquote", "a\nb");
        assert_eq!(render(&quote), "> a\n> b\n\n");
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(render(&Node::element("hr")), "\n\n---\n\n");
    }

    #[test]
    fn test_code_block_with_language() {
        let code = Node::element_with_attrs("code", vec![("class", "hljs language-rust")])
            .with_child(Node::text("fn main() {}"));
        let pre = Node::element("pre").with_child(code);
        assert_eq!(render(&pre), "```rust\nfn main() {}\n```\n\n");
    }

    #[test]
    fn test_code_block_without_language() {
        let pre = Node::element("pre").with_child(el("code", "def hello():\n    print('Hello')"));
        assert_eq!(render(&pre), "```\ndef hello():\n    print('Hello')\n```\n\n");
    }

    #[test]
    fn test_code_block_keeps_markup_as_text() {
        let code = Node::element("code")
            .with_child(Node::text("let "))
            .with_child(el("strong", "x"))
            .with_child(Node::text(" = 1;"));
        let pre = Node::element("pre").with_child(code);
        assert_eq!(render(&pre), "```\nlet x = 1;\n```\n\n");
    }

    #[test]
    fn test_pre_without_code_ignores_class() {
        let pre = Node::element_with_attrs("pre", vec![("class", "language-sh")])
            .with_child(Node::text("ls -la"));
        assert_eq!(render(&pre), "```\nls -la\n```\n\n");
    }

    #[test]
    fn test_unknown_tags_are_transparent() {
        let section = Node::element("section")
            .with_child(Node::text("a "))
            .with_child(el("custom-tag", "b"))
            .with_child(el("span", " c"));
        assert_eq!(render(&section), "a b c");
    }

    #[test]
    fn test_text_passes_through_verbatim() {
        let div = el("div", "  *not escaped*  \n");
        assert_eq!(render(&div), "  *not escaped*  \n");
    }

    #[test]
    fn test_max_depth_flattens_subtree() {
        let options = Options {
            max_depth: Some(2),
            ..Options::default()
        };
        let div = Node::element("div").with_child(
            Node::element("p").with_child(Node::element("strong").with_child(el("em", "deep"))),
        );
        assert_eq!(render_with(&div, &options), "deep\n\n");
    }

    #[test]
    fn test_custom_fence_and_rule() {
        let options = Options {
            fence: "~~~".to_string(),
            hr: "***".to_string(),
            ..Options::default()
        };
        let pre = Node::element("pre").with_child(el("code", "x"));
        assert_eq!(render_with(&pre, &options), "~~~\nx\n~~~\n\n");
        assert_eq!(render_with(&Node::element("hr"), &options), "\n\n***\n\n");
    }
}
