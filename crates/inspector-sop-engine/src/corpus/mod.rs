//! Standards of Practice corpus: an ordered set of titled sections whose
//! text follows the outline convention understood by [`crate::outline`].

mod builtin;
pub mod manifest;

use std::collections::HashSet;
use std::path::PathBuf;

use crate::outline::{OutlineNode, parse_outline};

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse corpus manifest at {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),
}

/// One section of the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Stable identifier, also used as the outline cache key.
    pub id: String,
    pub title: String,
    /// Raw outline text.
    pub text: String,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text: text.into(),
        }
    }

    /// Parses the section text. Not memoized; see [`crate::OutlineCache`].
    pub fn outline(&self) -> Vec<OutlineNode> {
        parse_outline(&self.text)
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.text.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    pub title: String,
    sections: Vec<Section>,
}

impl Corpus {
    /// Builds a corpus, rejecting duplicate section ids.
    pub fn from_sections(
        title: impl Into<String>,
        sections: Vec<Section>,
    ) -> Result<Self, CorpusError> {
        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.id.as_str()) {
                return Err(CorpusError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(Self {
            title: title.into(),
            sections,
        })
    }

    /// The corpus compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            title: builtin::TITLE.to_string(),
            sections: builtin::SECTIONS
                .iter()
                .map(|(id, title, text)| Section::new(*id, *title, *text))
                .collect(),
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Position of a section in corpus order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Case-insensitive substring search over titles and text.
    ///
    /// Results keep corpus order. A blank query matches every section.
    pub fn search(&self, query: &str) -> Vec<&Section> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.sections.iter().collect();
        }
        self.sections.iter().filter(|s| s.matches(&needle)).collect()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
