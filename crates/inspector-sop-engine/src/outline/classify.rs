use super::{
    markers::{HeadingMarker, Marker},
    types::ListFlavor,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of outline parsing: each line is classified independently
/// without reference to surrounding lines. Payloads borrow from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty after trimming.
    Blank,
    /// Colon-terminated enumerated line; `title` excludes enumerator and colon.
    Heading { title: &'a str },
    /// A list item of any flavor, with its marker removed.
    Item { marker: Marker, text: &'a str },
    /// Anything else. Always matches.
    Text { text: &'a str },
}

impl LineClass<'_> {
    /// List flavor for item lines.
    pub fn flavor(&self) -> Option<ListFlavor> {
        match self {
            LineClass::Item { marker, .. } => Some(marker.flavor()),
            _ => None,
        }
    }
}

/// Classifies individual lines of outline text.
pub struct OutlineLineClassifier;

impl OutlineLineClassifier {
    /// Classifies one raw line. Surrounding whitespace is trimmed first.
    ///
    /// Rules are tried in a fixed order: blank, heading, then the item markers
    /// in [`Marker::PRECEDENCE`], and finally plain text.
    pub fn classify<'a>(&self, raw: &'a str) -> LineClass<'a> {
        let line = raw.trim();
        if line.is_empty() {
            return LineClass::Blank;
        }

        if let Some(title) = HeadingMarker::title(line) {
            return LineClass::Heading { title };
        }

        for marker in Marker::PRECEDENCE {
            if let Some(text) = marker.strip(line) {
                return LineClass::Item { marker, text };
            }
        }

        LineClass::Text { text: line }
    }
}
