use log::debug;

use crate::{
    document::{Document, Element},
    parsing::inline::RichText,
};

use super::{classify::LineClass, types::BlockKind};

/// The list run currently accepting items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRun {
    /// Nesting level of the most recent item in the run.
    pub nesting_level: usize,
}

/// Builder state.
///
/// `BeforeFirstBlock` holds until the first non-blank line; blank lines do
/// not leave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    BeforeFirstBlock,
    InParagraphRun,
    InListRun(ListRun),
}

/// State machine turning classified lines into document elements.
///
/// - A blank line inside a list run is swallowed; elsewhere (after the first
///   block) it becomes an empty paragraph
/// - A heading after the first block is preceded by an empty separator
///   paragraph
/// - The very first paragraph line is dropped: the caller has already
///   emitted its title
///
/// The builder never fails; the output still needs [`Document::compact`].
pub struct BlockBuilder {
    state: BuildState,
    out: Document,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            state: BuildState::BeforeFirstBlock,
            out: Document::new(),
        }
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    pub fn push(&mut self, c: &LineClass) {
        match &c.kind {
            BlockKind::Blank => self.push_blank(c.line),
            BlockKind::Heading { level, text } => self.push_heading(*level, text),
            BlockKind::ListItem {
                text,
                nesting_level,
            } => self.push_list_item(text, *nesting_level),
            BlockKind::Paragraph { text } => self.push_paragraph(c.line, text),
        }
    }

    /// Returns the built document, uncompacted.
    pub fn finish(self) -> Document {
        self.out
    }

    fn push_blank(&mut self, line: usize) {
        match self.state {
            BuildState::InListRun(_) => {
                debug!("line {line}: blank line inside list run swallowed");
            }
            BuildState::BeforeFirstBlock => {}
            BuildState::InParagraphRun => self.out.push(Element::empty_paragraph()),
        }
    }

    fn push_heading(&mut self, level: u8, text: &str) {
        if self.state != BuildState::BeforeFirstBlock {
            self.out.push(Element::empty_paragraph());
        }
        self.out.append_heading(level, text);
        self.state = BuildState::InParagraphRun;
    }

    fn push_list_item(&mut self, text: &RichText, nesting_level: usize) {
        if let BuildState::InListRun(run) = self.state
            && run.nesting_level != nesting_level
        {
            debug!(
                "list run continues at nesting level {nesting_level} (was {})",
                run.nesting_level
            );
        }
        self.out.append_list_item(text.clone(), nesting_level);
        self.state = BuildState::InListRun(ListRun { nesting_level });
    }

    fn push_paragraph(&mut self, line: usize, text: &RichText) {
        if self.state == BuildState::BeforeFirstBlock {
            debug!("line {line}: leading paragraph dropped");
        } else {
            self.out.append_paragraph(text.clone());
        }
        self.state = BuildState::InParagraphRun;
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
