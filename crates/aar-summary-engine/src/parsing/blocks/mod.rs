//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from local facts only (blank, heading, list item, paragraph,
//!    indentation)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` state machine turns
//!    the classified lines into document elements
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: block-specific types with owned markers (`Heading`, `ListItem`)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for element construction
//!
//! ## Key Invariants
//!
//! - Classification is total: every line maps to exactly one kind
//! - Nesting level is `floor(leading whitespace / 2)`, never negative
//! - Nothing here can fail; unknown syntax becomes a paragraph

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::{BlockBuilder, BuildState, ListRun};
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::BlockKind;
