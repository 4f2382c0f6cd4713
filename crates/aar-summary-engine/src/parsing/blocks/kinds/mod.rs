//! Block kinds that own their syntax markers. Paragraphs have none: they are
//! whatever no other kind claims.

pub mod heading;
pub mod list_item;

pub use heading::Heading;
pub use list_item::ListItem;
