//! Unit tests for the outline parser.

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{
    LineClass, ListFlavor, Marker, OutlineLineClassifier, OutlineNode, parse_outline, snapshot,
};

fn classify(line: &str) -> LineClass<'_> {
    OutlineLineClassifier.classify(line)
}

fn heading(text: &str, children: Vec<OutlineNode>) -> OutlineNode {
    OutlineNode::Heading {
        level: 2,
        text: text.to_string(),
        children,
    }
}

fn ordered(items: &[&str]) -> OutlineNode {
    OutlineNode::OrderedList {
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn unordered(items: &[&str]) -> OutlineNode {
    OutlineNode::UnorderedList {
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn paragraph(text: &str) -> OutlineNode {
    OutlineNode::Paragraph {
        text: text.to_string(),
    }
}

// Line classification

#[rstest]
#[case("", LineClass::Blank)]
#[case("   \t ", LineClass::Blank)]
#[case("I. The inspector shall inspect:", LineClass::Heading { title: "The inspector shall inspect" })]
#[case("12. Roof Inspection:  ", LineClass::Heading { title: "Roof Inspection" })]
#[case("II. Beta", LineClass::Item { marker: Marker::Roman, text: "Beta" })]
#[case("I. Alpha", LineClass::Item { marker: Marker::Roman, text: "Alpha" })]
#[case("V. five", LineClass::Item { marker: Marker::Roman, text: "five" })]
#[case("A. lettered one", LineClass::Item { marker: Marker::Alpha, text: "lettered one" })]
#[case("B. ends with a colon:", LineClass::Item { marker: Marker::Alpha, text: "ends with a colon:" })]
#[case("3. third", LineClass::Item { marker: Marker::Numeric, text: "third" })]
#[case("- bullet one", LineClass::Item { marker: Marker::Bullet, text: "bullet one" })]
#[case("– en dash", LineClass::Item { marker: Marker::Bullet, text: "en dash" })]
#[case("• dot", LineClass::Item { marker: Marker::Bullet, text: "dot" })]
#[case("the roof;", LineClass::Item { marker: Marker::Loose, text: "the roof" })]
#[case("the gutters •", LineClass::Item { marker: Marker::Loose, text: "the gutters" })]
#[case("  indented prose  ", LineClass::Text { text: "indented prose" })]
#[case("I.no space after marker", LineClass::Text { text: "I.no space after marker" })]
#[case("a. lower case letters are prose", LineClass::Text { text: "a. lower case letters are prose" })]
#[case("-dash without space", LineClass::Text { text: "-dash without space" })]
fn classifies_line(#[case] line: &str, #[case] expected: LineClass<'static>) {
    assert_eq!(classify(line), expected);
}

#[test]
fn one_letter_roman_beats_alpha() {
    for line in ["I. x", "V. x", "X. x", "L. x", "C. x", "D. x", "M. x"] {
        assert!(
            matches!(classify(line), LineClass::Item { marker: Marker::Roman, .. }),
            "{line} should be roman"
        );
    }
    assert!(matches!(
        classify("E. x"),
        LineClass::Item {
            marker: Marker::Alpha,
            ..
        }
    ));
}

#[test]
fn heading_takes_precedence_over_loose_and_items() {
    assert!(matches!(
        classify("IV. Exterior:"),
        LineClass::Heading { title: "Exterior" }
    ));
    // Letters never open headings.
    assert!(matches!(
        classify("A. Exterior:"),
        LineClass::Item {
            marker: Marker::Alpha,
            ..
        }
    ));
}

#[test]
fn enumerated_item_keeps_trailing_semicolon() {
    assert_eq!(
        classify("A. the roof;"),
        LineClass::Item {
            marker: Marker::Alpha,
            text: "the roof;"
        }
    );
}

#[test]
fn marker_flavors() {
    assert_eq!(classify("I. a").flavor(), Some(ListFlavor::Ordered));
    assert_eq!(classify("7. a").flavor(), Some(ListFlavor::Ordered));
    assert_eq!(classify("- a").flavor(), Some(ListFlavor::Unordered));
    assert_eq!(classify("a;").flavor(), Some(ListFlavor::Unordered));
    assert_eq!(classify("plain").flavor(), None);
}

// Tree construction

#[test]
fn empty_input_produces_empty_forest() {
    assert!(parse_outline("").is_empty());
}

#[test]
fn blank_lines_only_produce_empty_forest() {
    assert!(parse_outline("\n  \n\t\n\n").is_empty());
}

#[test]
fn consecutive_roman_items_merge() {
    let forest = parse_outline("I. Alpha\nII. Beta");
    assert_eq!(forest, vec![ordered(&["Alpha", "Beta"])]);
}

#[test]
fn heading_owns_loose_list() {
    let forest = parse_outline("I. The inspector shall inspect:\nthe roof;\nthe gutters;");
    assert_eq!(
        forest,
        vec![heading(
            "The inspector shall inspect",
            vec![unordered(&["the roof", "the gutters"])]
        )]
    );
}

#[test]
fn flavor_change_closes_list() {
    let forest = parse_outline("- bullet one\nA. lettered one");
    assert_eq!(
        forest,
        vec![unordered(&["bullet one"]), ordered(&["lettered one"])]
    );
}

#[test]
fn ordered_markers_of_different_kinds_share_a_list() {
    let forest = parse_outline("I. one\nA. two\n3. three");
    assert_eq!(forest, vec![ordered(&["one", "two", "three"])]);
}

#[test]
fn plain_lines_join_into_one_paragraph() {
    let forest = parse_outline("The inspector is not required\nto move furniture.");
    assert_eq!(
        forest,
        vec![paragraph("The inspector is not required to move furniture.")]
    );
}

#[test]
fn blank_line_splits_paragraphs_and_lists() {
    let forest = parse_outline("first\n\nsecond\n- a\n\n- b");
    assert_eq!(
        forest,
        vec![
            paragraph("first"),
            paragraph("second"),
            unordered(&["a"]),
            unordered(&["b"]),
        ]
    );
}

#[test]
fn trailing_list_is_flushed_at_end_of_input() {
    let forest = parse_outline("1. Roof:\n- shingles\n- flashing");
    assert_eq!(
        forest,
        vec![heading("Roof", vec![unordered(&["shingles", "flashing"])])]
    );
}

#[test]
fn trailing_paragraph_is_flushed_at_end_of_input() {
    let forest = parse_outline("1. Roof:\nlast words");
    assert_eq!(forest, vec![heading("Roof", vec![paragraph("last words")])]);
}

#[test]
fn prose_after_list_keeps_input_order() {
    let forest = parse_outline("- a\n- b\nafter the list");
    assert_eq!(
        forest,
        vec![unordered(&["a", "b"]), paragraph("after the list")]
    );
}

#[test]
fn list_item_flushes_paragraph_first() {
    let forest = parse_outline("intro text\nI. item");
    assert_eq!(forest, vec![paragraph("intro text"), ordered(&["item"])]);
}

#[test]
fn headings_are_flat_siblings_at_root() {
    let forest = parse_outline("preamble\nI. First:\nbody one\nII. Second:\n- x");
    assert_eq!(
        forest,
        vec![
            paragraph("preamble"),
            heading("First", vec![paragraph("body one")]),
            heading("Second", vec![unordered(&["x"])]),
        ]
    );
    snapshot::invariants(&forest);
}

#[test]
fn empty_heading_has_no_children() {
    let forest = parse_outline("I. Empty:\nII. Next:");
    assert_eq!(forest, vec![heading("Empty", vec![]), heading("Next", vec![])]);
}

#[test]
fn crlf_line_endings_are_handled() {
    let forest = parse_outline("I. Alpha\r\nII. Beta\r\n");
    assert_eq!(forest, vec![ordered(&["Alpha", "Beta"])]);
}

#[test]
fn parsing_is_deterministic() {
    let text = "I. Scope:\nThe inspector shall observe\nreadily accessible systems.\nA. roof\nB. exterior\n- notes;\nend;";
    assert_eq!(parse_outline(text), parse_outline(text));
}

#[test]
fn malformed_input_degrades_into_paragraphs() {
    let forest = parse_outline("I.Heading without space:\n:::\n12.");
    assert_eq!(forest, vec![paragraph("I.Heading without space: ::: 12.")]);
}

#[test]
fn list_helpers() {
    let list = OutlineNode::list(ListFlavor::Unordered, vec!["x".into()]);
    assert_eq!(list, unordered(&["x"]));
    assert_eq!(list.list_flavor(), Some(ListFlavor::Unordered));
    assert!(list.children().is_empty());

    let h = heading("H", vec![paragraph("p")]);
    assert_eq!(h.list_flavor(), None);
    assert_eq!(h.children(), &[paragraph("p")]);
}
