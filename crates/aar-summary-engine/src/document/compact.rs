use log::debug;

use super::{Document, Element, Spacing};

/// Final cleanup over a built document.
///
/// 1. Every list item directly followed by another list item gets
///    `spacing_after = Spacing::None`, whatever it had at emission time.
/// 2. Leading empty paragraphs are removed, so the document never opens with
///    a vacuous block.
///
/// Idempotent: compacting a compacted document changes nothing.
pub fn compact(doc: &mut Document) {
    let elements = doc.elements_mut();
    let mut tightened = 0usize;
    for i in 1..elements.len() {
        if elements[i].is_list_item()
            && let Element::ListItem(prev) = &mut elements[i - 1]
        {
            prev.style.spacing_after = Spacing::None;
            tightened += 1;
        }
    }

    let mut removed = 0usize;
    while doc.elements().first().is_some_and(Element::is_empty_paragraph) {
        doc.remove_leading();
        removed += 1;
    }

    debug!("compacted document: {tightened} list items tightened, {removed} leading blanks removed");
}
