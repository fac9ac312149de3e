//! `ul` / `ol` rendering.

use super::render_children;
use crate::context::RenderContext;
use crate::node::Node;
use crate::options::Options;
use crate::utilities::list_indent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ListKind {
    Unordered,
    Ordered,
}

/// One line per direct `li` child, indented two spaces per enclosing list.
///
/// A nested list starts on a fresh line so it does not run into the text of
/// its parent item. Only the outermost list is followed by a blank line.
pub(super) fn render_list(
    node: &Node,
    kind: ListKind,
    options: &Options,
    ctx: &mut RenderContext,
) -> String {
    let nested = ctx.in_list();
    let mut ctx = ctx.enter_list();
    let indent = list_indent(ctx.list_depth());

    let mut result = String::new();
    if nested {
        result.push('\n');
    }

    for (index, item) in node.children_named("li").enumerate() {
        let content = render_children(item, options, &mut ctx);
        let marker = match kind {
            ListKind::Unordered => options.bullet_list_marker.to_string(),
            ListKind::Ordered => format!("{}.", index + 1),
        };
        result.push_str(&format!("{}{} {}\n", indent, marker, content.trim()));
    }

    if !nested {
        result.push('\n');
    }

    result
}
