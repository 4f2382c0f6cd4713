use crate::parsing::inline::RichText;

/// The block kind of one classified line.
///
/// Every line maps to exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// Empty or whitespace-only line.
    Blank,
    /// `#`-run heading, level clamped to `1..=4`. Heading text is never
    /// inline-processed.
    Heading { level: u8, text: String },
    /// `-` or `*` bulleted item.
    ListItem {
        text: RichText,
        /// Zero-based depth from the line's leading whitespace.
        nesting_level: usize,
    },
    /// Anything else.
    Paragraph { text: RichText },
}
