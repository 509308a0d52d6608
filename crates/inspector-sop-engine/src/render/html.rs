use std::fmt::Write;

use html_escape::encode_text;

use crate::outline::OutlineNode;

/// Renders a forest as an HTML fragment.
///
/// A heading becomes a `<section>` holding its `<hN>` title followed by its
/// rendered children. All text is escaped.
pub fn render_html(forest: &[OutlineNode]) -> String {
    let mut out = String::new();
    for node in forest {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &OutlineNode) {
    match node {
        OutlineNode::Heading {
            level,
            text,
            children,
        } => {
            let _ = write!(out, "<section><h{level}>{}</h{level}>", encode_text(text));
            for child in children {
                write_node(out, child);
            }
            out.push_str("</section>");
        }
        OutlineNode::OrderedList { items } => write_list(out, "ol", items),
        OutlineNode::UnorderedList { items } => write_list(out, "ul", items),
        OutlineNode::Paragraph { text } => {
            let _ = write!(out, "<p>{}</p>", encode_text(text));
        }
    }
}

fn write_list(out: &mut String, tag: &str, items: &[String]) {
    let _ = write!(out, "<{tag}>");
    for item in items {
        let _ = write!(out, "<li>{}</li>", encode_text(item));
    }
    let _ = write!(out, "</{tag}>");
}
