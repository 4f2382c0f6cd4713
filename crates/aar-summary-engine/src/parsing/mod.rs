pub mod blocks;
pub mod inline;
pub mod lines;

#[cfg(test)]
mod tests;

use log::debug;

use crate::document::Document;
use blocks::{BlockBuilder, MarkdownLineClassifier};
use inline::InlineStyle;
use lines::raw_lines;

/// Converts generated text into a compacted [`Document`], flattening inline
/// markers to plain text.
pub fn convert(text: &str) -> Document {
    convert_with(text, InlineStyle::Flatten)
}

/// Converts generated text into a compacted [`Document`] using `style` for
/// inline markers.
///
/// Total over all input: malformed syntax degrades to paragraphs and
/// unterminated markers stay as text.
pub fn convert_with(text: &str, style: InlineStyle) -> Document {
    let mut doc = build(text, style);
    doc.compact();
    doc
}

/// Classifies and builds without the final compaction pass.
///
/// Used when several converted fragments are spliced into one document that
/// is compacted once at the end.
pub fn build(text: &str, style: InlineStyle) -> Document {
    let classifier = MarkdownLineClassifier::new(style);
    let mut builder = BlockBuilder::new();

    for line in raw_lines(text) {
        let lc = classifier.classify(&line);
        builder.push(&lc);
    }

    let doc = builder.finish();
    debug!("built {} elements from {} bytes", doc.len(), text.len());
    doc
}
