use crate::parsing::{inline::InlineStyle, lines::RawLine};

use super::{
    kinds::{Heading, ListItem},
    types::BlockKind,
};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently without reference to surrounding
/// context; the builder supplies the context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// Zero-based line number in the input.
    pub line: usize,
    /// Leading whitespace characters on the original line.
    pub indent_width: usize,
    pub kind: BlockKind,
}

/// Classifies individual lines, applying one inline strategy to list item
/// and paragraph text.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownLineClassifier {
    style: InlineStyle,
}

impl MarkdownLineClassifier {
    pub fn new(style: InlineStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> InlineStyle {
        self.style
    }

    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence: blank, heading, list item, paragraph. Total over all input.
    pub fn classify(&self, line: &RawLine<'_>) -> LineClass {
        let indent_width = line.indent_width();

        let kind = if line.is_blank() {
            BlockKind::Blank
        } else if let Some((level, text)) = Heading::parse(line.content) {
            BlockKind::Heading {
                level,
                text: text.to_owned(),
            }
        } else if let Some(text) = ListItem::strip_marker(line.content) {
            BlockKind::ListItem {
                text: self.style.apply(text),
                nesting_level: ListItem::nesting_level(indent_width),
            }
        } else {
            BlockKind::Paragraph {
                text: self.style.apply(line.content),
            }
        };

        LineClass {
            line: line.number,
            indent_width,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::RichText;
    use pretty_assertions::assert_eq;

    fn classify(s: &str) -> BlockKind {
        MarkdownLineClassifier::default()
            .classify(&RawLine::new(0, s))
            .kind
    }

    #[test]
    fn blank_line() {
        assert_eq!(classify("   "), BlockKind::Blank);
    }

    #[test]
    fn heading_text_keeps_markers() {
        assert_eq!(
            classify("## **Wins**"),
            BlockKind::Heading {
                level: 2,
                text: "**Wins**".to_string()
            }
        );
    }

    #[test]
    fn indented_heading_is_still_a_heading() {
        assert!(matches!(
            classify("   # Title"),
            BlockKind::Heading { level: 1, .. }
        ));
    }

    #[test]
    fn list_item_is_normalized_and_nested() {
        assert_eq!(
            classify("    - **Bold** point"),
            BlockKind::ListItem {
                text: RichText::plain("Bold point"),
                nesting_level: 2,
            }
        );
    }

    #[test]
    fn odd_indent_rounds_down() {
        assert!(matches!(
            classify("   * item"),
            BlockKind::ListItem {
                nesting_level: 1,
                ..
            }
        ));
    }

    #[test]
    fn bold_line_is_a_paragraph_not_a_list_item() {
        assert_eq!(
            classify("**Summary** of the day"),
            BlockKind::Paragraph {
                text: RichText::plain("Summary of the day")
            }
        );
    }

    #[test]
    fn unsupported_syntax_degrades_to_paragraph() {
        for line in ["> quote", "1. ordered", "| a | b |", "```rust", "#hashtag"] {
            assert!(
                matches!(classify(line), BlockKind::Paragraph { .. }),
                "{line:?} should be a paragraph"
            );
        }
    }

    #[test]
    fn bold_spans_style_keeps_ranges() {
        let classifier = MarkdownLineClassifier::new(InlineStyle::BoldSpans);
        let class = classifier.classify(&RawLine::new(7, "- **Key:** value"));
        assert_eq!(class.line, 7);
        assert_eq!(
            class.kind,
            BlockKind::ListItem {
                text: RichText {
                    text: "Key: value".to_string(),
                    bold: vec![0..4],
                },
                nesting_level: 0,
            }
        );
    }
}
