//! # Block Kinds
//!
//! Syntax owners for each line-level construct. Every regex and delimiter of
//! the dialect lives in one of these types; the classifier and builder only
//! call them.

pub mod callout;
pub mod heading;
pub mod list;
pub mod milestone;
pub mod table;
pub mod thematic_break;
pub mod topic;

pub use callout::InlineCallout;
pub use heading::{AtxHeading, HeadingSig};
pub use list::{ListItemSig, ListMarker};
pub use milestone::Milestone;
pub use table::TableRow;
pub use thematic_break::ThematicBreak;
pub use topic::{SemanticTopic, TopicLine};
