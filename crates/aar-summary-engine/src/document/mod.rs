//! # Document Model
//!
//! The rendered form of a conversion: an ordered sequence of block
//! [`Element`]s. The builder appends, the compactor mutates in place, and a
//! [`crate::render::DocumentSink`] consumes the result.
//!
//! ## Invariants
//!
//! - Nesting levels are never negative (`usize`) and `indent_start` is always
//!   `nesting_level * 18` points
//! - After [`Document::compact`], every list item directly followed by another
//!   list item has `spacing_after == Spacing::None`
//! - After [`Document::compact`], the document does not open with an empty
//!   paragraph

pub mod compact;
pub mod invariants;

use serde::Serialize;

use crate::parsing::{blocks::kinds::ListItem, inline::RichText};

/// Space after a block element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    /// The sink's normal paragraph spacing.
    #[default]
    Default,
    /// No space after the element.
    None,
}

/// Bullet glyph of a list item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    #[default]
    Bullet,
}

/// Line spacing inside a list item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSpacing {
    /// Single line spacing.
    #[default]
    Compact,
}

/// Presentation attributes of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListStyle {
    pub nesting_level: usize,
    /// Left indent in points.
    pub indent_start: u32,
    pub glyph: Glyph,
    pub line_spacing: LineSpacing,
    pub spacing_after: Spacing,
}

impl ListStyle {
    pub fn at_level(nesting_level: usize) -> Self {
        Self {
            nesting_level,
            indent_start: ListItem::indent_start(nesting_level),
            glyph: Glyph::Bullet,
            line_spacing: LineSpacing::Compact,
            spacing_after: Spacing::Default,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItemElement {
    pub text: RichText,
    #[serde(flatten)]
    pub style: ListStyle,
}

/// One structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Heading {
        level: u8,
        text: String,
    },
    Paragraph {
        text: RichText,
        spacing_after: Spacing,
    },
    ListItem(ListItemElement),
}

impl Element {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Element::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<RichText>) -> Self {
        Element::Paragraph {
            text: text.into(),
            spacing_after: Spacing::Default,
        }
    }

    /// The empty paragraph used for blank lines and heading separators.
    pub fn empty_paragraph() -> Self {
        Self::paragraph(RichText::default())
    }

    pub fn list_item(text: impl Into<RichText>, nesting_level: usize) -> Self {
        Element::ListItem(ListItemElement {
            text: text.into(),
            style: ListStyle::at_level(nesting_level),
        })
    }

    pub fn text(&self) -> &str {
        match self {
            Element::Heading { text, .. } => text,
            Element::Paragraph { text, .. } => text.as_str(),
            Element::ListItem(item) => item.text.as_str(),
        }
    }

    pub fn is_list_item(&self) -> bool {
        matches!(self, Element::ListItem(_))
    }

    pub fn is_empty_paragraph(&self) -> bool {
        matches!(self, Element::Paragraph { text, .. } if text.is_empty())
    }
}

/// An ordered, append-only sequence of block elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn append_heading(&mut self, level: u8, text: impl Into<String>) {
        self.push(Element::heading(level, text));
    }

    pub fn append_paragraph(&mut self, text: impl Into<RichText>) {
        self.push(Element::paragraph(text));
    }

    pub fn append_list_item(&mut self, text: impl Into<RichText>, nesting_level: usize) {
        self.push(Element::list_item(text, nesting_level));
    }

    /// Appends every element of `other`, in order.
    pub fn extend(&mut self, other: Document) {
        self.elements.extend(other.elements);
    }

    /// Removes and returns the first element.
    pub fn remove_leading(&mut self) -> Option<Element> {
        if self.elements.is_empty() {
            None
        } else {
            Some(self.elements.remove(0))
        }
    }

    /// Text of the first heading, if any.
    pub fn title(&self) -> Option<&str> {
        self.elements.iter().find_map(|e| match e {
            Element::Heading { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Runs the post-pass compactor in place. See [`compact::compact`].
    pub fn compact(&mut self) {
        compact::compact(self);
    }

    pub(crate) fn elements_mut(&mut self) -> &mut [Element] {
        &mut self.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn list_item_attributes_follow_level() {
        let Element::ListItem(item) = Element::list_item("x", 3) else {
            panic!("expected list item");
        };
        assert_eq!(item.style.nesting_level, 3);
        assert_eq!(item.style.indent_start, 54);
        assert_eq!(item.style.glyph, Glyph::Bullet);
        assert_eq!(item.style.line_spacing, LineSpacing::Compact);
        assert_eq!(item.style.spacing_after, Spacing::Default);
    }

    #[test]
    fn empty_paragraph_detection() {
        assert!(Element::empty_paragraph().is_empty_paragraph());
        assert!(!Element::paragraph("x").is_empty_paragraph());
        assert!(!Element::heading(1, "").is_empty_paragraph());
    }

    #[test]
    fn remove_leading_on_empty_document() {
        let mut doc = Document::new();
        assert_eq!(doc.remove_leading(), None);
    }

    #[test]
    fn title_is_first_heading() {
        let mut doc = Document::new();
        doc.append_paragraph("intro");
        doc.append_heading(2, "First");
        doc.append_heading(1, "Second");
        assert_eq!(doc.title(), Some("First"));
    }

    #[test]
    fn serializes_with_type_tags() {
        let mut doc = Document::new();
        doc.append_heading(1, "T");
        doc.append_list_item("a", 1);
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["elements"][0]["type"], "heading");
        assert_eq!(json["elements"][1]["type"], "list_item");
        assert_eq!(json["elements"][1]["indent_start"], 18);
        assert_eq!(json["elements"][1]["spacing_after"], "default");
        assert_eq!(json["elements"][1]["text"]["text"], "a");
    }
}
