//! Small string helpers shared by the rules.

/// Prefix that marks a fenced-code language in a `class` attribute
pub const LANGUAGE_CLASS_PREFIX: &str = "language-";

/// Indentation unit per list nesting level
pub const LIST_INDENT: &str = "  ";

/// Extract `X` from the first `language-X` token of a class list.
///
/// Returns an empty string when there is no such token.
pub fn language_from_class(class: Option<&str>) -> &str {
    class
        .unwrap_or("")
        .split_whitespace()
        .find_map(|token| token.strip_prefix(LANGUAGE_CLASS_PREFIX))
        .unwrap_or("")
}

/// Leading indentation for items of a list at `list_depth` (1 = outermost)
pub fn list_indent(list_depth: usize) -> String {
    LIST_INDENT.repeat(list_depth.saturating_sub(1))
}

/// Render cells as a pipe-table row, e.g. `| a | b |`
pub fn table_row<S: AsRef<str>>(cells: &[S]) -> String {
    let mut row = String::from("|");
    for cell in cells {
        row.push(' ');
        row.push_str(cell.as_ref());
        row.push_str(" |");
    }
    row.push('\n');
    row
}

/// Separator row placed under a table header with `columns` cells
pub fn table_separator(columns: usize) -> String {
    format!("|{}\n", " --- |".repeat(columns))
}
