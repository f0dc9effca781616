//! Chart directives: `[{radar}]`, `[{bar}]`, `[{hist}]`, `[{gauge}]` and
//! `[{bands}]`, either self-closing or wrapping an inline data body.
//!
//! Substitution runs before block parsing. Resolved charts are kept in a side
//! table keyed by line index so the block builder never re-parses them.

pub mod fallback;
pub mod payload;
pub mod substitute;

pub use payload::{ChartBlock, ChartPayload, ChartSource, GAUGE_SCORE_MAX, gauge_percent};
pub use substitute::{Substitution, substitute};
