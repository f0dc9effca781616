use super::{AccentPalette, ChartBundle};

/// Input to a single compile pass.
#[derive(Debug, Clone, Default)]
pub struct ReportDocument {
    pub text: String,
    /// Enables vocabulary normalization, callouts, semantic labels and
    /// section-based bullet policy.
    pub is_general_report: bool,
    pub performance_classification: Option<String>,
    pub chart_data: Option<ChartBundle>,
    pub palette: AccentPalette,
}

impl ReportDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn general_report(mut self, enabled: bool) -> Self {
        self.is_general_report = enabled;
        self
    }

    #[must_use]
    pub fn with_classification(mut self, classification: impl Into<String>) -> Self {
        self.performance_classification = Some(classification.into());
        self
    }

    #[must_use]
    pub fn with_chart_data(mut self, bundle: ChartBundle) -> Self {
        self.chart_data = Some(bundle);
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: AccentPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Accent color attached to every chart block of this document.
    pub fn accent(&self) -> &str {
        self.palette
            .color_for(self.performance_classification.as_deref())
    }
}
