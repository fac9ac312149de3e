//! Post-processing of rendered Markdown.

use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_LINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Bring raw renderer output into canonical form.
///
/// Runs of three or more newlines become a single blank line, outer
/// whitespace is trimmed and exactly one trailing newline is appended. The
/// result is a fixed point: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(markdown: &str) -> String {
    let collapsed = BLANK_LINE_RUN.replace_all(markdown, "\n\n");
    let mut result = collapsed.trim().to_string();
    result.push('\n');
    result
}
