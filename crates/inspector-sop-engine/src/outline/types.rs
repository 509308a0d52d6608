use serde::Serialize;

/// Heading level given to every heading the parser opens.
///
/// Consumers may render deeper levels, but the parser itself never nests
/// headings: all of them are siblings at forest root.
pub const SECTION_HEADING_LEVEL: u8 = 2;

/// Whether a list keeps its enumerators (ordered) or bullets (unordered).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListFlavor {
    /// Introduced by roman numerals, capital letters or digits.
    Ordered,
    /// Introduced by bullet glyphs or `;`/`•`-terminated lines.
    Unordered,
}

/// One element of a parsed outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum OutlineNode {
    /// A labeled subsection owning every node produced until the next heading.
    Heading {
        /// 2 for sections, 3 reserved for subsections.
        level: u8,
        /// Title with enumerator and trailing colon removed.
        text: String,
        /// Child nodes in input order.
        children: Vec<OutlineNode>,
    },
    /// Enumerated items; the marker itself is discarded.
    OrderedList { items: Vec<String> },
    /// Bulleted or loose items.
    UnorderedList { items: Vec<String> },
    /// Prose lines joined by single spaces.
    Paragraph { text: String },
}

impl OutlineNode {
    /// Builds a list node of the given flavor.
    pub fn list(flavor: ListFlavor, items: Vec<String>) -> Self {
        match flavor {
            ListFlavor::Ordered => OutlineNode::OrderedList { items },
            ListFlavor::Unordered => OutlineNode::UnorderedList { items },
        }
    }

    /// Returns the list flavor, or `None` for headings and paragraphs.
    pub fn list_flavor(&self) -> Option<ListFlavor> {
        match self {
            OutlineNode::OrderedList { .. } => Some(ListFlavor::Ordered),
            OutlineNode::UnorderedList { .. } => Some(ListFlavor::Unordered),
            _ => None,
        }
    }

    /// Children of a heading; empty for every other node.
    pub fn children(&self) -> &[OutlineNode] {
        match self {
            OutlineNode::Heading { children, .. } => children,
            _ => &[],
        }
    }
}
