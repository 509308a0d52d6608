use crate::outline::OutlineNode;

const INDENT: &str = "  ";

/// Renders a forest as plain-text lines for terminal display.
///
/// Headings print their title with children indented beneath; ordered items
/// are renumbered from 1, unordered items get a `•`. Every block is followed
/// by an empty line.
pub fn render_text(forest: &[OutlineNode]) -> Vec<String> {
    let mut lines = Vec::new();
    for node in forest {
        push_node(&mut lines, node, 0);
    }
    lines
}

fn push_node(lines: &mut Vec<String>, node: &OutlineNode, depth: usize) {
    let indent = INDENT.repeat(depth);
    match node {
        OutlineNode::Heading { text, children, .. } => {
            lines.push(format!("{indent}{text}"));
            lines.push(String::new());
            for child in children {
                push_node(lines, child, depth + 1);
            }
        }
        OutlineNode::OrderedList { items } => {
            for (i, item) in items.iter().enumerate() {
                lines.push(format!("{indent}{}. {item}", i + 1));
            }
            lines.push(String::new());
        }
        OutlineNode::UnorderedList { items } => {
            for item in items {
                lines.push(format!("{indent}• {item}"));
            }
            lines.push(String::new());
        }
        OutlineNode::Paragraph { text } => {
            lines.push(format!("{indent}{text}"));
            lines.push(String::new());
        }
    }
}
