//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (chart side-table entry, table cells, list marker,
//!    heading level, rule, blank status)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` tracks the section
//!    context and a single open accumulator (list, table or callout) and emits
//!    `Block`s as they are flushed
//!
//! ## Modules
//!
//! - **`types`**: Output types (`Block`, `Paragraph`, `List`, `Table`, `Callout`, ...)
//! - **`kinds`**: Syntax owners (AtxHeading, ListMarker, TableRow, InlineCallout, ...)
//! - **`classify`**: `ReportLineClassifier` produces `LineClass` for each line
//! - **`nesting`**: `build_tree` rebuilds list nesting from indentation levels
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - At most one of list/table/callout is open; opening another flushes it
//! - Blank lines emit a spacer and never close a callout
//! - Chart lines flush everything and never join a paragraph

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod nesting;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, ReportLineClassifier};
pub use nesting::{FlatItem, build_tree};
pub use types::{
    Block, Callout, CalloutKind, Cell, Heading, HeadingStyle, List, ListKind, ListMode, ListNode,
    Paragraph, Table,
};
