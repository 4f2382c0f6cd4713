use std::ops::Range;

use serde::Serialize;

use super::{bold_spans::apply_bold_spans, normalize::normalize};

/// Element text with optional bold ranges.
///
/// Ranges are byte offsets into `text`, on character boundaries, ascending
/// and non-overlapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RichText {
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bold: Vec<Range<usize>>,
}

impl RichText {
    /// Text without any styling.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: Vec::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

/// How inline markers in list items and paragraphs are treated.
///
/// Selected once per conversion and applied to every fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InlineStyle {
    /// Strip bold, italic and code markers and keep plain text.
    #[default]
    Flatten,
    /// Turn `**…**` spans into bold ranges; other markers stay as written.
    BoldSpans,
}

impl InlineStyle {
    pub fn apply(self, raw: &str) -> RichText {
        match self {
            InlineStyle::Flatten => RichText::plain(normalize(raw)),
            InlineStyle::BoldSpans => apply_bold_spans(raw),
        }
    }
}
