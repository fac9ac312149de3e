//! Tag dispatch table.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Every tag the renderer treats specially, plus [`Tag::Container`] for the
/// rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Paragraph,
    LineBreak,
    Strong,
    Emphasis,
    Code,
    Preformatted,
    Link,
    /// `h1`..`h6`, carrying the level
    Heading(u8),
    UnorderedList,
    OrderedList,
    ListItem,
    Blockquote,
    HorizontalRule,
    Image,
    Table,
    /// Transparent: only the children are rendered
    Container,
}

static TAGS: Lazy<HashMap<&'static str, Tag>> = Lazy::new(|| {
    HashMap::from([
        ("p", Tag::Paragraph),
        ("br", Tag::LineBreak),
        ("strong", Tag::Strong),
        ("b", Tag::Strong),
        ("em", Tag::Emphasis),
        ("i", Tag::Emphasis),
        ("code", Tag::Code),
        ("pre", Tag::Preformatted),
        ("a", Tag::Link),
        ("h1", Tag::Heading(1)),
        ("h2", Tag::Heading(2)),
        ("h3", Tag::Heading(3)),
        ("h4", Tag::Heading(4)),
        ("h5", Tag::Heading(5)),
        ("h6", Tag::Heading(6)),
        ("ul", Tag::UnorderedList),
        ("ol", Tag::OrderedList),
        ("li", Tag::ListItem),
        ("blockquote", Tag::Blockquote),
        ("hr", Tag::HorizontalRule),
        ("img", Tag::Image),
        ("table", Tag::Table),
        ("div", Tag::Container),
        ("span", Tag::Container),
        ("body", Tag::Container),
        ("html", Tag::Container),
    ])
});

impl Tag {
    /// Look up a tag name, ignoring ASCII case. Unknown names are containers.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        TAGS.get(lower.as_str()).copied().unwrap_or(Tag::Container)
    }
}
