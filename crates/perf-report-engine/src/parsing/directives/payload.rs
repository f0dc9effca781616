use serde::Serialize;

use crate::models::{ChartBundle, ChartKind, GaugeReading, HistBin, SeriesPoint};

/// Gauge values at or below this are 0-5 scores rather than percentages.
pub const GAUGE_SCORE_MAX: f64 = 5.0;

/// Maps a gauge reading to a 0-100 percentage.
///
/// Scores on the 0-5 scale are scaled; anything above is taken as a
/// percentage already. The result is clamped to `0..=100`.
pub fn gauge_percent(value: f64) -> f64 {
    let percent = if value <= GAUGE_SCORE_MAX {
        value * 100.0 / GAUGE_SCORE_MAX
    } else {
        value
    };
    percent.clamp(0.0, 100.0)
}

/// Concrete data for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartPayload {
    /// Radar, bar and bands charts.
    Series { series: Vec<SeriesPoint> },
    Hist { bins: Vec<HistBin> },
    Gauge {
        percent: f64,
        value: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

impl ChartPayload {
    pub fn gauge(reading: &GaugeReading) -> Self {
        ChartPayload::Gauge {
            percent: gauge_percent(reading.value),
            value: reading.value,
            label: reading.label.clone(),
        }
    }

    /// Payload for `kind` taken from the caller's bundle, if it has one.
    pub fn from_bundle(kind: ChartKind, bundle: &ChartBundle) -> Option<Self> {
        if !bundle.has(kind) {
            return None;
        }
        let payload = match kind {
            ChartKind::Radar => ChartPayload::Series {
                series: bundle.radar.clone(),
            },
            ChartKind::Bar => ChartPayload::Series {
                series: bundle.bar.clone(),
            },
            ChartKind::Bands => ChartPayload::Series {
                series: bundle.bands.clone(),
            },
            ChartKind::Hist => ChartPayload::Hist {
                bins: bundle.hist.clone(),
            },
            ChartKind::Gauge => ChartPayload::gauge(bundle.gauge.as_ref()?),
        };
        Some(payload)
    }
}

/// Where a chart's data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartSource {
    Bundle,
    Inline,
}

/// A resolved chart directive, ready to become a `Chart` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBlock {
    pub kind: ChartKind,
    pub payload: ChartPayload,
    /// Accent color picked from the document's performance classification.
    pub accent: String,
    pub source: ChartSource,
}
