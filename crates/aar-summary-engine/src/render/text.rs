use std::ops::Range;

use crate::{
    document::{ListStyle, Spacing},
    parsing::blocks::kinds::Heading,
};

use super::{DocumentSink, PendingText};

/// Renders a document as a plain-text outline, one line per element.
///
/// Headings keep their `#` prefix, list items are indented two spaces per
/// nesting level behind a `•` glyph, and bold runs are wrapped in `**`.
#[derive(Debug, Default)]
pub struct TextSink {
    lines: Vec<String>,
    pending: Option<(String, PendingText)>,
}

impl TextSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn begin(&mut self, prefix: String, text: &str) {
        self.flush();
        self.pending = Some((prefix, PendingText::new(text)));
    }

    fn flush(&mut self) {
        if let Some((prefix, text)) = self.pending.take() {
            let line = format!("{prefix}{}", text.render(str::to_owned, "**", "**"));
            self.lines.push(line.trim_end().to_owned());
        }
    }
}

impl DocumentSink for TextSink {
    type Output = String;

    fn append_heading(&mut self, level: u8, text: &str) {
        let prefix = format!("{} ", Heading::MARKER.to_string().repeat(level.into()));
        self.begin(prefix, text);
    }

    fn append_paragraph(&mut self, text: &str, _spacing_after: Spacing) {
        self.begin(String::new(), text);
    }

    fn append_list_item(&mut self, text: &str, style: &ListStyle) {
        let prefix = format!("{}• ", "  ".repeat(style.nesting_level));
        self.begin(prefix, text);
    }

    fn set_bold(&mut self, range: Range<usize>) {
        if let Some((_, text)) = self.pending.as_mut() {
            text.add_bold(range);
        }
    }

    fn finish(mut self) -> String {
        self.flush();
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}
