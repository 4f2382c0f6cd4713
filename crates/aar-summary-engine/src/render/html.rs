use std::fmt::Write as _;
use std::ops::Range;

use crate::document::{Glyph, LineSpacing, ListStyle, Spacing};

use super::{DocumentSink, PendingText};

#[derive(Debug)]
enum PendingKind {
    Heading(u8),
    Paragraph(Spacing),
    ListItem(ListStyle),
}

/// Renders a document as a standalone HTML page.
///
/// Consecutive list items share one `<ul>`; each `<li>` carries its indent
/// as `margin-left` in points so nesting renders without nested lists.
#[derive(Debug)]
pub struct HtmlSink {
    title: String,
    body: String,
    pending: Option<(PendingKind, PendingText)>,
    in_list: bool,
}

impl HtmlSink {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
            pending: None,
            in_list: false,
        }
    }

    fn begin(&mut self, kind: PendingKind, text: &str) {
        self.flush();
        self.pending = Some((kind, PendingText::new(text)));
    }

    fn flush(&mut self) {
        let Some((kind, text)) = self.pending.take() else {
            return;
        };

        let is_item = matches!(kind, PendingKind::ListItem(_));
        if is_item && !self.in_list {
            self.body.push_str("<ul>\n");
        } else if !is_item && self.in_list {
            self.body.push_str("</ul>\n");
        }
        self.in_list = is_item;

        let inner = text.render(escape, "<strong>", "</strong>");
        // Writing to a String cannot fail.
        let _ = match kind {
            PendingKind::Heading(level) => writeln!(self.body, "<h{level}>{inner}</h{level}>"),
            PendingKind::Paragraph(spacing) => {
                let style = match spacing {
                    Spacing::Default => "",
                    Spacing::None => " style=\"margin-bottom: 0\"",
                };
                if text.text().is_empty() {
                    writeln!(self.body, "<p{style}><br></p>")
                } else {
                    writeln!(self.body, "<p{style}>{inner}</p>")
                }
            }
            PendingKind::ListItem(style) => {
                writeln!(self.body, "<li style=\"{}\">{inner}</li>", list_css(&style))
            }
        };
    }
}

impl DocumentSink for HtmlSink {
    type Output = String;

    fn append_heading(&mut self, level: u8, text: &str) {
        self.begin(PendingKind::Heading(level.clamp(1, 6)), text);
    }

    fn append_paragraph(&mut self, text: &str, spacing_after: Spacing) {
        self.begin(PendingKind::Paragraph(spacing_after), text);
    }

    fn append_list_item(&mut self, text: &str, style: &ListStyle) {
        self.begin(PendingKind::ListItem(*style), text);
    }

    fn set_bold(&mut self, range: Range<usize>) {
        if let Some((_, text)) = self.pending.as_mut() {
            text.add_bold(range);
        }
    }

    fn finish(mut self) -> String {
        self.flush();
        if self.in_list {
            self.body.push_str("</ul>\n");
        }
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
            escape(&self.title),
            self.body
        )
    }
}

fn escape(s: &str) -> String {
    html_escape::encode_text(s).into_owned()
}

fn list_css(style: &ListStyle) -> String {
    let glyph = match style.glyph {
        Glyph::Bullet => "disc",
    };
    let line_height = match style.line_spacing {
        LineSpacing::Compact => "1",
    };
    let mut css = format!(
        "list-style-type: {glyph}; margin-left: {}pt; line-height: {line_height}",
        style.indent_start
    );
    if style.spacing_after == Spacing::None {
        css.push_str("; margin-bottom: 0");
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        document::{Document, Element},
        parsing::{convert, convert_with, inline::InlineStyle},
        render::render,
    };
    use insta::assert_snapshot;

    fn body(html: &str) -> &str {
        let start = html.find("<body>\n").map_or(0, |i| i + "<body>\n".len());
        let end = html.find("</body>").unwrap_or(html.len());
        &html[start..end]
    }

    #[test]
    fn wraps_page_with_escaped_title() {
        let html = render(&Document::new(), HtmlSink::new("A & B"));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert_eq!(body(&html), "");
    }

    #[test]
    fn renders_headings_paragraphs_and_lists() {
        let doc = convert("# Title\nSome <text>\n\n- a\n  - b\n- c\nAfter");
        let html = render(&doc, HtmlSink::new("t"));
        assert_snapshot!(body(&html), @r#"
        <h1>Title</h1>
        <p>Some &lt;text&gt;</p>
        <p><br></p>
        <ul>
        <li style="list-style-type: disc; margin-left: 0pt; line-height: 1; margin-bottom: 0">a</li>
        <li style="list-style-type: disc; margin-left: 18pt; line-height: 1; margin-bottom: 0">b</li>
        <li style="list-style-type: disc; margin-left: 0pt; line-height: 1">c</li>
        </ul>
        <p>After</p>
        "#);
    }

    #[test]
    fn bold_ranges_become_strong() {
        let doc = convert_with("# T\n- **Key:** a < b", InlineStyle::BoldSpans);
        let html = render(&doc, HtmlSink::new("t"));
        assert!(html.contains("<li style=\"list-style-type: disc; margin-left: 0pt; line-height: 1\"><strong>Key:</strong> a &lt; b</li>"));
    }

    #[test]
    fn list_closed_at_end_of_document() {
        let mut doc = Document::new();
        doc.push(Element::list_item("only", 0));
        let html = render(&doc, HtmlSink::new("t"));
        assert!(body(&html).ends_with("</ul>\n"));
    }
}
