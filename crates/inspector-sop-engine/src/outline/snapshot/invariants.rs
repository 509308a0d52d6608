use crate::outline::types::{OutlineNode, SECTION_HEADING_LEVEL};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Headings only appear at forest root, at the section level
/// - Lists hold at least one item
/// - Paragraph text is non-empty and carries no surrounding whitespace
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(forest: &[OutlineNode]) {
    for node in forest {
        if let OutlineNode::Heading { level, text, children } = node {
            assert_eq!(
                *level, SECTION_HEADING_LEVEL,
                "heading {text:?} has level {level}"
            );
            for child in children {
                assert!(
                    !matches!(child, OutlineNode::Heading { .. }),
                    "heading nested under {text:?}: {child:?}"
                );
                check_leaf(child);
            }
        } else {
            check_leaf(node);
        }
    }
}

fn check_leaf(node: &OutlineNode) {
    match node {
        OutlineNode::OrderedList { items } | OutlineNode::UnorderedList { items } => {
            assert!(!items.is_empty(), "empty list node: {node:?}");
        }
        OutlineNode::Paragraph { text } => {
            assert!(!text.is_empty(), "empty paragraph");
            assert_eq!(
                text.trim(),
                text,
                "paragraph has surrounding whitespace: {text:?}"
            );
        }
        OutlineNode::Heading { .. } => {}
    }
}
