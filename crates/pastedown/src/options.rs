//! Configuration options for conversion

/// Options for [`Converter`](crate::Converter).
///
/// The defaults produce the canonical output format: `-` bullets, `*`/`**`
/// emphasis, triple-backtick fences and `---` rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Bullet list marker
    pub bullet_list_marker: char,

    /// Emphasis delimiter
    pub em_delimiter: char,

    /// Strong delimiter
    pub strong_delimiter: String,

    /// Fence string for code blocks
    pub fence: String,

    /// Horizontal rule string
    pub hr: String,

    /// Maximum element depth rendered structurally.
    ///
    /// Deeper subtrees are emitted as their flat text content. `None` renders
    /// any depth, which recurses once per nesting level.
    pub max_depth: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bullet_list_marker: '-',
            em_delimiter: '*',
            strong_delimiter: "**".to_string(),
            fence: "```".to_string(),
            hr: "---".to_string(),
            max_depth: None,
        }
    }
}
