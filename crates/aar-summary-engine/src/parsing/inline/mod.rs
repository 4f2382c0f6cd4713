//! # Inline Formatting
//!
//! Inline markers are handled by one strategy per conversion
//! ([`InlineStyle`]):
//!
//! - **`normalize`**: flattens bold, italic and code markers to plain text
//! - **`bold_spans`**: extracts `**…**` spans as bold ranges, then strips them
//!
//! ## Modules
//!
//! - **`types`**: `RichText` and `InlineStyle`
//! - **`kinds`**: delimiter-owning types (`Bold`, `Italic`, `CodeSpan`)
//!
//! Neither path can fail: anything that does not close is kept as text.

pub mod bold_spans;
pub mod kinds;
pub mod normalize;
pub mod types;

pub use bold_spans::apply_bold_spans;
pub use normalize::normalize;
pub use types::{InlineStyle, RichText};
