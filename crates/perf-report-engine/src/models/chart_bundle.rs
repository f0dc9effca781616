use serde::{Deserialize, Serialize};

/// The five chart kinds a report may request through a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Radar,
    Bar,
    Hist,
    Gauge,
    Bands,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Radar,
        ChartKind::Bar,
        ChartKind::Hist,
        ChartKind::Gauge,
        ChartKind::Bands,
    ];

    /// Directive tag name as written inside `[{...}]`.
    pub fn tag(self) -> &'static str {
        match self {
            ChartKind::Radar => "radar",
            ChartKind::Bar => "bar",
            ChartKind::Hist => "hist",
            ChartKind::Gauge => "gauge",
            ChartKind::Bands => "bands",
        }
    }
}

/// One named value of a radar, bar or bands series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SeriesPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            color: None,
        }
    }
}

/// One histogram bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistBin {
    pub range: String,
    pub count: u64,
    pub min_value: f64,
    pub max_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeReading {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Pre-computed chart series supplied by the caller alongside the report text.
///
/// Any series present here wins over data written inline in a directive body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBundle {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub radar: Vec<SeriesPoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bar: Vec<SeriesPoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hist: Vec<HistBin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gauge: Option<GaugeReading>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bands: Vec<SeriesPoint>,
}

#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("Malformed chart bundle: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Non-finite value for '{name}' in {kind:?} series")]
    NonFiniteValue { kind: ChartKind, name: String },
    #[error("Histogram bin '{range}' has minValue {min} greater than maxValue {max}")]
    InvertedBin { range: String, min: f64, max: f64 },
    #[error("Non-finite gauge value")]
    NonFiniteGauge,
}

impl ChartBundle {
    /// Parse and validate a bundle as delivered by the report service.
    pub fn from_json(json: &str) -> Result<Self, BundleError> {
        let bundle: ChartBundle = serde_json::from_str(json)?;
        bundle.validate()?;
        Ok(bundle)
    }

    /// Reject shapes the compiler cannot render meaningfully.
    pub fn validate(&self) -> Result<(), BundleError> {
        for (kind, series) in [
            (ChartKind::Radar, &self.radar),
            (ChartKind::Bar, &self.bar),
            (ChartKind::Bands, &self.bands),
        ] {
            if let Some(bad) = series.iter().find(|p| !p.value.is_finite()) {
                return Err(BundleError::NonFiniteValue {
                    kind,
                    name: bad.name.clone(),
                });
            }
        }

        for bin in &self.hist {
            if !bin.min_value.is_finite() || !bin.max_value.is_finite() {
                return Err(BundleError::NonFiniteValue {
                    kind: ChartKind::Hist,
                    name: bin.range.clone(),
                });
            }
            if bin.min_value > bin.max_value {
                return Err(BundleError::InvertedBin {
                    range: bin.range.clone(),
                    min: bin.min_value,
                    max: bin.max_value,
                });
            }
        }

        if let Some(gauge) = &self.gauge
            && !gauge.value.is_finite()
        {
            return Err(BundleError::NonFiniteGauge);
        }

        Ok(())
    }

    /// Whether the bundle carries usable data for `kind`.
    pub fn has(&self, kind: ChartKind) -> bool {
        match kind {
            ChartKind::Radar => !self.radar.is_empty(),
            ChartKind::Bar => !self.bar.is_empty(),
            ChartKind::Hist => !self.hist.is_empty(),
            ChartKind::Gauge => self.gauge.is_some(),
            ChartKind::Bands => !self.bands.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_camel_case_bundle() {
        let json = r##"{
            "bar": [{"name": "Vendas", "value": 3.5, "color": "#ff0000"}],
            "hist": [{"range": "0-1", "count": 4, "minValue": 0, "maxValue": 1}],
            "gauge": {"value": 4}
        }"##;

        let bundle = ChartBundle::from_json(json).unwrap();

        assert_eq!(bundle.bar.len(), 1);
        assert_eq!(bundle.bar[0].color.as_deref(), Some("#ff0000"));
        assert_eq!(bundle.hist[0].max_value, 1.0);
        assert_eq!(bundle.gauge.as_ref().map(|g| g.value), Some(4.0));
        assert!(bundle.radar.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ChartBundle::from_json("{\"bar\": 3}").unwrap_err();
        assert!(matches!(err, BundleError::Json(_)));
    }

    #[test]
    fn rejects_inverted_hist_bin() {
        let json = r#"{"hist": [{"range": "5-1", "count": 1, "minValue": 5, "maxValue": 1}]}"#;
        let err = ChartBundle::from_json(json).unwrap_err();
        assert!(matches!(err, BundleError::InvertedBin { .. }));
    }

    #[test]
    fn rejects_non_finite_series_value() {
        let bundle = ChartBundle {
            radar: vec![SeriesPoint::new("Foco", f64::NAN)],
            ..Default::default()
        };
        let err = bundle.validate().unwrap_err();
        assert!(matches!(
            err,
            BundleError::NonFiniteValue {
                kind: ChartKind::Radar,
                ..
            }
        ));
    }

    #[test]
    fn has_reports_only_non_empty_series() {
        let bundle = ChartBundle {
            bands: vec![SeriesPoint::new("A", 1.0)],
            ..Default::default()
        };
        assert!(bundle.has(ChartKind::Bands));
        assert!(!bundle.has(ChartKind::Bar));
        assert!(!bundle.has(ChartKind::Gauge));
    }
}
