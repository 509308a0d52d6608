//! # Outline Parsing
//!
//! Turns semi-structured Standards of Practice prose into a forest of
//! headings, lists and paragraphs.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line becomes a
//!    `LineClass` (blank, heading, list item with its marker, or plain text)
//!    using an explicit precedence table
//!
//! 2. **Tree Construction** (`builder`): an `OutlineBuilder` folds the
//!    classified lines into `OutlineNode`s, tracking the open heading, the
//!    pending list and the paragraph buffer
//!
//! ## Modules
//!
//! - **`types`**: `OutlineNode`, `ListFlavor`
//! - **`markers`**: enumerator/bullet patterns and their precedence
//! - **`classify`**: `OutlineLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `OutlineBuilder` state machine for tree construction
//! - **`snapshot`**: structural invariant checks used by tests
//!
//! ## Key Invariants
//!
//! - Parsing is total: every line is classifiable and nothing panics
//! - Headings are never nested; all of them sit at forest root
//! - Node order matches input order

pub mod builder;
pub mod classify;
pub mod markers;
pub mod snapshot;
pub mod types;

#[cfg(test)]
mod tests;

pub use builder::OutlineBuilder;
pub use classify::{LineClass, OutlineLineClassifier};
pub use markers::Marker;
pub use types::{ListFlavor, OutlineNode, SECTION_HEADING_LEVEL};

/// Parses outline text into a forest of [`OutlineNode`]s.
///
/// Pure and re-entrant; callers that render the same text repeatedly should
/// memoize through [`crate::OutlineCache`].
pub fn parse_outline(text: &str) -> Vec<OutlineNode> {
    let classifier = OutlineLineClassifier;
    let mut builder = OutlineBuilder::new();

    for line in text.lines() {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish()
}
