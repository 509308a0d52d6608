use std::collections::HashMap;

use crate::outline::{OutlineNode, parse_outline};

/// Memoized outline forests keyed by a stable identifier (usually a section id).
///
/// Owned by the caller; there is no eviction. Re-using a key with different
/// text returns the forest parsed the first time.
#[derive(Debug, Default)]
pub struct OutlineCache {
    entries: HashMap<String, Vec<OutlineNode>>,
}

impl OutlineCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the forest for `key`, parsing `text` on first access.
    pub fn get_or_parse(&mut self, key: &str, text: &str) -> &[OutlineNode] {
        if !self.entries.contains_key(key) {
            log::debug!("outline cache miss for {key:?}, parsing {} bytes", text.len());
            self.entries.insert(key.to_owned(), parse_outline(text));
        }
        self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the cached forest for `key` without parsing.
    pub fn get(&self, key: &str) -> Option<&[OutlineNode]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
