//! # Snapshot Testing Support
//!
//! Utilities for testing the compiler via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts compiled blocks into a stable, line-oriented `Snap`
//!   dump for `insta` snapshot testing
//! - **`invariants`**: Runtime checks on compiler output (no empty callouts or lists,
//!   flow-text items stay flat, child levels exceed parent levels, gauge percentages
//!   stay in range)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
