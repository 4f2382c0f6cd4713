//! # Rendering
//!
//! A [`DocumentSink`] receives a document as a sequence of append operations,
//! each optionally followed by bold styling over byte ranges of the element
//! just appended. [`render`] replays a [`Document`] into any sink.
//!
//! - **`html`**: `HtmlSink`, a standalone HTML page
//! - **`text`**: `TextSink`, a plain-text outline for terminals

pub mod html;
pub mod text;

use std::ops::Range;

use crate::{
    document::{Document, Element, ListStyle, Spacing},
    parsing::inline::RichText,
};

pub use html::HtmlSink;
pub use text::TextSink;

/// Receiver of the append-then-style operations a document maps onto.
pub trait DocumentSink {
    type Output;

    fn append_heading(&mut self, level: u8, text: &str);

    fn append_paragraph(&mut self, text: &str, spacing_after: Spacing);

    fn append_list_item(&mut self, text: &str, style: &ListStyle);

    /// Marks `range` (byte offsets) of the most recently appended element
    /// bold. Ranges outside the element's text are ignored.
    fn set_bold(&mut self, range: Range<usize>);

    fn finish(self) -> Self::Output;
}

/// Replays `doc` into `sink` and returns the sink's output.
pub fn render<S: DocumentSink>(doc: &Document, mut sink: S) -> S::Output {
    for element in doc.elements() {
        match element {
            Element::Heading { level, text } => sink.append_heading(*level, text),
            Element::Paragraph {
                text,
                spacing_after,
            } => {
                sink.append_paragraph(text.as_str(), *spacing_after);
                apply_bold(&mut sink, text);
            }
            Element::ListItem(item) => {
                sink.append_list_item(item.text.as_str(), &item.style);
                apply_bold(&mut sink, &item.text);
            }
        }
    }
    sink.finish()
}

fn apply_bold<S: DocumentSink>(sink: &mut S, text: &RichText) {
    for range in text.bold.iter().rev() {
        sink.set_bold(range.clone());
    }
}

/// The element a sink is still collecting bold ranges for.
#[derive(Debug)]
pub(crate) struct PendingText {
    text: String,
    bold: Vec<Range<usize>>,
}

impl PendingText {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            bold: Vec::new(),
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn add_bold(&mut self, range: Range<usize>) {
        if range.start < range.end && self.text.get(range.clone()).is_some() {
            self.bold.push(range);
        }
    }

    /// Renders the text with each bold run wrapped in `open`/`close` and
    /// every plain segment passed through `escape`.
    ///
    /// Overlapping ranges are merged first.
    pub(crate) fn render(&self, escape: impl Fn(&str) -> String, open: &str, close: &str) -> String {
        let mut ranges = self.bold.clone();
        ranges.sort_by_key(|r| r.start);
        let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
        for range in ranges {
            match merged.last_mut() {
                Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
                _ => merged.push(range),
            }
        }

        let mut out = String::with_capacity(self.text.len());
        let mut pos = 0;
        for range in merged {
            out.push_str(&escape(&self.text[pos..range.start]));
            out.push_str(open);
            out.push_str(&escape(&self.text[range.clone()]));
            out.push_str(close);
            pos = range.end;
        }
        out.push_str(&escape(&self.text[pos..]));
        out
    }
}
