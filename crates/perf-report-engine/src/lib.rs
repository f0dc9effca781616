pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use models::{AccentPalette, BundleError, ChartBundle, ChartKind, ReportDocument};
pub use parsing::{CompiledReport, blocks::Block, compile_report};
