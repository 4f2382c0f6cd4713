use super::{Document, Element, Spacing};
use crate::parsing::blocks::kinds::{Heading, ListItem};

/// Asserts the structural invariants of a compacted document.
///
/// Panics with a description of the first violation. Used by tests and the
/// benchmark to check conversion output.
pub fn check(doc: &Document) {
    let elements = doc.elements();

    if let Some(first) = elements.first() {
        assert!(
            !first.is_empty_paragraph(),
            "document opens with an empty paragraph"
        );
    }

    for (i, element) in elements.iter().enumerate() {
        match element {
            Element::Heading { level, .. } => assert!(
                (1..=Heading::MAX_LEVEL).contains(level),
                "heading {i} has level {level}"
            ),
            Element::ListItem(item) => {
                assert_eq!(
                    item.style.indent_start,
                    ListItem::indent_start(item.style.nesting_level),
                    "list item {i} indent does not match its nesting level"
                );
                if elements.get(i + 1).is_some_and(Element::is_list_item) {
                    assert_eq!(
                        item.style.spacing_after,
                        Spacing::None,
                        "list item {i} is followed by a list item but keeps its spacing"
                    );
                }
            }
            Element::Paragraph { .. } => {}
        }

        let text = match element {
            Element::Heading { .. } => continue,
            Element::Paragraph { text, .. } => text,
            Element::ListItem(item) => &item.text,
        };
        let mut last_end = 0;
        for range in &text.bold {
            assert!(
                range.start >= last_end && range.start < range.end,
                "element {i} has unordered or empty bold range {range:?}"
            );
            assert!(
                text.text.get(range.clone()).is_some(),
                "element {i} has bold range {range:?} outside its text"
            );
            last_end = range.end;
        }
    }
}
