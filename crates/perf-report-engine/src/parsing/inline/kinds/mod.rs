//! # Inline Kinds
//!
//! Each span kind owns its regex. The parser asks the kinds for matches and
//! never hardcodes a delimiter itself.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use link::Link;
