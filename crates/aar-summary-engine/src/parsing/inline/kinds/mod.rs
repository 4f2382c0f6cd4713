//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Bold`**: `**` and `__` pairs
//! - **`Italic`**: `*` and `_` pairs
//! - **`CodeSpan`**: `` ` `` pairs
//!
//! ## Design Principle
//!
//! All delimiter constants and patterns live here, not scattered in the
//! normalizer or the bold-span pass.

pub mod code_span;
pub mod emphasis;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
