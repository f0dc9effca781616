//! # Inline Spans
//!
//! Turns the text of a single line into styled spans.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (Text, Bold, Italic, Code, Link)
//! - **`kinds`**: Span kinds owning their patterns (Bold, Italic, CodeSpan, Link)
//! - **`parser`**: `render_inline()` earliest-match tokenizer
//!
//! ## Matching Rules
//!
//! Spans never nest. The earliest-starting match wins; on a tie the order
//! bold, italic, code, link decides, so `**x**` is bold rather than italic.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::render_inline;
pub use types::{InlineSpan, plain_text};
