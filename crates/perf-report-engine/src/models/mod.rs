pub mod accent;
pub mod chart_bundle;
pub mod document;

pub use accent::AccentPalette;
pub use chart_bundle::{BundleError, ChartBundle, ChartKind, GaugeReading, HistBin, SeriesPoint};
pub use document::ReportDocument;
