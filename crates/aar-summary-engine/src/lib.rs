pub mod document;
pub mod parsing;
pub mod render;
pub mod report;
pub mod sheet;

// Re-export key types for easier usage
pub use document::{Document, Element, ListItemElement, ListStyle, Spacing};
pub use parsing::{
    convert, convert_with,
    inline::{InlineStyle, RichText},
};
pub use render::{DocumentSink, HtmlSink, TextSink, render};
pub use report::{ReportTitle, compose_report};
pub use sheet::{Feedback, Sheet, SheetError};
