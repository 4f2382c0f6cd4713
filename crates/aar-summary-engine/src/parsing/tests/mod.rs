//! Behavioural tests for the whole conversion pipeline.
//!
//! Each test states one property of `convert` over the classified line
//! stream; `document::invariants::check` runs on every produced document.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    document::{Element, Spacing, invariants},
    parsing::{build, convert, convert_with, inline::InlineStyle},
};

/// Line fragments that exercise every classifier branch and marker edge case.
const FRAGMENTS: &[&str] = &[
    "",
    "   ",
    "# Title",
    "####### Deep",
    "#",
    "- item",
    "  - nested **bold**",
    "\t* tabbed *em*",
    "-",
    "**unterminated",
    "plain `code` text",
    "> quote",
    "1. ordered",
    "ünïcödé __x__ ✓",
    "\r",
];

fn kinds(elements: &[Element]) -> Vec<&'static str> {
    elements
        .iter()
        .map(|e| match e {
            Element::Heading { .. } => "heading",
            Element::Paragraph { .. } if e.is_empty_paragraph() => "blank",
            Element::Paragraph { .. } => "paragraph",
            Element::ListItem(_) => "list_item",
        })
        .collect()
}

fn list_items(elements: &[Element]) -> Vec<(&str, usize, Spacing)> {
    elements
        .iter()
        .filter_map(|e| match e {
            Element::ListItem(item) => Some((
                item.text.as_str(),
                item.style.nesting_level,
                item.style.spacing_after,
            )),
            _ => None,
        })
        .collect()
}

#[test]
fn conversion_is_total_over_fragment_combinations() {
    for a in FRAGMENTS {
        for b in FRAGMENTS {
            for c in FRAGMENTS {
                let text = format!("{a}\n{b}\n{c}");
                for style in [InlineStyle::Flatten, InlineStyle::BoldSpans] {
                    let doc = convert_with(&text, style);
                    invariants::check(&doc);
                }
            }
        }
    }
}

#[test]
fn empty_input_gives_empty_document() {
    assert!(convert("").is_empty());
    assert!(convert("\n\n   \n").is_empty());
}

#[rstest]
#[case("# A", 1)]
#[case("## A", 2)]
#[case("### A", 3)]
#[case("#### A", 4)]
#[case("##### A", 4)]
#[case("###### A", 4)]
fn heading_level_saturates_at_four(#[case] line: &str, #[case] level: u8) {
    let doc = convert(line);
    assert_eq!(doc.elements(), &[Element::heading(level, "A")]);
}

#[test]
fn nested_list_example() {
    let doc = convert("- alpha\n  - beta\n- gamma");
    assert_eq!(
        list_items(doc.elements()),
        vec![
            ("alpha", 0, Spacing::None),
            ("beta", 1, Spacing::None),
            ("gamma", 0, Spacing::Default),
        ]
    );
    assert_eq!(doc.len(), 3);
    for element in doc.elements() {
        let Element::ListItem(item) = element else {
            panic!("expected only list items, got {element:?}");
        };
        assert_eq!(item.style.indent_start, 18 * item.style.nesting_level as u32);
    }
}

#[test]
fn heading_separator_and_blank_line_trace() {
    let doc = convert("# Title\nSome text\n\n# Next");
    assert_eq!(
        doc.elements(),
        &[
            Element::heading(1, "Title"),
            Element::paragraph("Some text"),
            Element::empty_paragraph(),
            Element::empty_paragraph(),
            Element::heading(1, "Next"),
        ]
    );
}

#[test]
fn blank_line_inside_list_run_is_swallowed() {
    let doc = convert("- a\n\n- b\n  \n  - c");
    assert_eq!(kinds(doc.elements()), vec!["list_item"; 3]);
    assert_eq!(
        list_items(doc.elements()),
        vec![
            ("a", 0, Spacing::None),
            ("b", 0, Spacing::None),
            ("c", 1, Spacing::Default),
        ]
    );
}

#[test]
fn blank_line_after_list_run_is_still_swallowed() {
    // The blank is absorbed by the run; the paragraph then ends it.
    let doc = convert("- a\n\nAfter");
    assert_eq!(kinds(doc.elements()), vec!["list_item", "paragraph"]);
}

#[rstest]
#[case("Intro line\n- a", "Intro line")]
#[case("\n\n**Summary:**\n- a", "Summary:")]
#[case("Title\nSecond", "Title")]
fn first_paragraph_line_is_never_rendered(#[case] text: &str, #[case] dropped: &str) {
    let doc = convert(text);
    assert!(doc.elements().iter().all(|e| e.text() != dropped));
}

#[test]
fn only_the_first_paragraph_is_dropped() {
    let doc = convert("Title\nSecond");
    assert_eq!(doc.elements(), &[Element::paragraph("Second")]);
}

#[test]
fn dropped_first_paragraph_leaves_no_leading_blank() {
    let doc = convert("Intro\n\n\n- a\n- b");
    assert_eq!(kinds(doc.elements()), vec!["list_item", "list_item"]);
}

#[test]
fn compaction_is_idempotent() {
    let mut doc = build("Intro\n\n- a\n- b\n\nText\n\n## H\n- c", InlineStyle::Flatten);
    doc.compact();
    let once = doc.clone();
    doc.compact();
    assert_eq!(doc, once);
}

#[test]
fn inline_markers_are_flattened_in_items_and_paragraphs() {
    let doc = convert("# **Kept** heading\n**bold** and *italic* and `code`\n- __under__ _score_");
    assert_eq!(
        doc.elements(),
        &[
            Element::heading(1, "**Kept** heading"),
            Element::paragraph("bold and italic and code"),
            Element::list_item("under score", 0),
        ]
    );
}

#[test]
fn bold_spans_style_produces_ranges() {
    let doc = convert_with(
        "# Notes\n- **Timing:** ran long\n  - keep *italic*",
        InlineStyle::BoldSpans,
    );
    invariants::check(&doc);
    let Element::ListItem(first) = &doc.elements()[1] else {
        panic!("expected list item");
    };
    assert_eq!(first.text.text, "Timing: ran long");
    assert_eq!(first.text.bold, vec![0..7]);
    assert_eq!(doc.elements()[2].text(), "keep *italic*");
}

#[test]
fn unsupported_markdown_degrades_to_paragraphs() {
    let doc = convert("# T\n> quote\n1. one\n| a | b |");
    assert_eq!(
        kinds(doc.elements()),
        vec!["heading", "paragraph", "paragraph", "paragraph"]
    );
}

#[test]
fn typical_generated_summary() {
    let text = "\
Here is a summary of what went well:

**Overall**
- Students were engaged
  - Especially during the **hands-on** lab
- Clear instructions

### Highlights
- Pacing was good";

    let doc = convert(text);
    invariants::check(&doc);
    assert_eq!(
        kinds(doc.elements()),
        vec![
            "paragraph",
            "list_item",
            "list_item",
            "list_item",
            "blank",
            "heading",
            "list_item",
        ]
    );
    assert_eq!(doc.elements()[0].text(), "Overall");
    assert_eq!(
        list_items(doc.elements()),
        vec![
            ("Students were engaged", 0, Spacing::None),
            ("Especially during the hands-on lab", 1, Spacing::None),
            ("Clear instructions", 0, Spacing::Default),
            ("Pacing was good", 0, Spacing::Default),
        ]
    );
}
