/// A single input line with its indentation separated from its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    /// Zero-based line number in the input.
    pub number: usize,
    /// Leading whitespace run, exactly as written.
    pub indent: &'a str,
    /// Content with leading and trailing whitespace removed.
    pub content: &'a str,
}

impl<'a> RawLine<'a> {
    pub fn new(number: usize, line: &'a str) -> Self {
        let content_start = line.len() - line.trim_start().len();
        let (indent, rest) = line.split_at(content_start);
        Self {
            number,
            indent,
            content: rest.trim_end(),
        }
    }

    /// Number of whitespace characters in the leading run (a tab counts as one).
    pub fn indent_width(&self) -> usize {
        self.indent.chars().count()
    }

    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }
}

/// Splits text into lines on `\n` or `\r\n`.
///
/// Empty input yields one blank line, and a trailing newline yields a final
/// blank line; both are harmless to the builder.
pub fn raw_lines(text: &str) -> impl Iterator<Item = RawLine<'_>> {
    text.split('\n')
        .enumerate()
        .map(|(number, line)| RawLine::new(number, line.strip_suffix('\r').unwrap_or(line)))
}
