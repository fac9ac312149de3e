//! Pipe tables.
//!
//! Only the header-row + body-rows shape is supported. Column counts are not
//! reconciled between rows: every row gets exactly the cells it has.

use super::render_children;
use crate::context::RenderContext;
use crate::node::Node;
use crate::options::Options;
use crate::utilities::{table_row, table_separator};

pub(super) fn render_table(node: &Node, options: &Options, ctx: &mut RenderContext) -> String {
    let mut result = String::new();

    if let Some(thead) = find_section(node, "thead") {
        let headers: Vec<String> = thead
            .first_child_named("tr")
            .map(|tr| render_cells(tr, "th", options, ctx))
            .unwrap_or_default();
        if !headers.is_empty() {
            result.push_str(&table_row(&headers));
            result.push_str(&table_separator(headers.len()));
        }
    }

    // Tables without a tbody carry their rows directly.
    let body = find_section(node, "tbody").unwrap_or(node);
    for tr in body.children_named("tr") {
        let cells = render_cells(tr, "td", options, ctx);
        if !cells.is_empty() {
            result.push_str(&table_row(&cells));
        }
    }

    result.push('\n');
    result
}

fn render_cells(tr: &Node, cell_tag: &str, options: &Options, ctx: &mut RenderContext) -> Vec<String> {
    tr.children_named(cell_tag)
        .map(|cell| render_children(cell, options, ctx).trim().to_string())
        .collect()
}

/// First `thead`/`tbody` belonging to this table, not to a nested one
fn find_section<'a>(table: &'a Node, name: &str) -> Option<&'a Node> {
    let mut stack: Vec<&'a Node> = table.children.iter().rev().collect();
    while let Some(node) = stack.pop() {
        if node.is_named(name) {
            return Some(node);
        }
        if !node.is_named("table") {
            stack.extend(node.children.iter().rev());
        }
    }
    None
}
