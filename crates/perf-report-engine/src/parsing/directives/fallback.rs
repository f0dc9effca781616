//! Chart data written inline in a directive body.
//!
//! Bodies are tried as JSON first, then as `name: number` lines (or
//! `value:`/`label:` lines for gauges). Histograms have no inline form.

use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::models::{ChartKind, GaugeReading, SeriesPoint};

use super::payload::ChartPayload;

const NUMBER: &str = r"(-?\d+(?:[.,]\d+)?)\s*%?";

fn point_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^\s*(?:[-*]\s+)?(.+?)\s*:\s*{NUMBER}\s*$"))
            .expect("Invalid series line regex")
    })
}

fn gauge_value_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"(?i)^\s*(?:[-*]\s+)?(?:value|valor)\s*:\s*{NUMBER}\s*$"))
            .expect("Invalid gauge value regex")
    })
}

fn bare_number_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^\s*{NUMBER}\s*$")).expect("Invalid bare number regex")
    })
}

fn gauge_label_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*(?:[-*]\s+)?(?:label|r[oó]tulo)\s*:\s*(.+?)\s*$")
            .expect("Invalid gauge label regex")
    })
}

/// Accepts a decimal comma as well as a decimal point.
fn parse_number(s: &str) -> Option<f64> {
    s.replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Resolves a directive body into a payload, or `None` if it holds nothing usable.
pub fn parse_body(kind: ChartKind, body: &str) -> Option<ChartPayload> {
    let body = body.trim();
    if body.is_empty() || kind == ChartKind::Hist {
        return None;
    }
    if let Some(payload) = parse_json(kind, body) {
        return Some(payload);
    }
    match kind {
        ChartKind::Radar | ChartKind::Bar | ChartKind::Bands => {
            let series = parse_series(body);
            (!series.is_empty()).then_some(ChartPayload::Series { series })
        }
        ChartKind::Gauge => parse_gauge(body).map(|reading| ChartPayload::gauge(&reading)),
        ChartKind::Hist => None,
    }
}

fn parse_json(kind: ChartKind, body: &str) -> Option<ChartPayload> {
    if !body.starts_with(['[', '{']) {
        return None;
    }
    let parsed = match kind {
        ChartKind::Gauge => serde_json::from_str::<GaugeReading>(body)
            .map(|reading| ChartPayload::gauge(&reading)),
        _ => serde_json::from_str::<Vec<SeriesPoint>>(body)
            .map(|series| ChartPayload::Series { series }),
    };
    match parsed {
        Ok(ChartPayload::Series { series }) if series.is_empty() => None,
        Ok(payload) => Some(payload),
        Err(e) => {
            debug!("ignoring malformed JSON in {kind:?} directive: {e}");
            None
        }
    }
}

/// Collects every `name: number` line; other lines are skipped.
pub fn parse_series(body: &str) -> Vec<SeriesPoint> {
    body.lines()
        .filter_map(|line| {
            let caps = point_line().captures(line)?;
            let name = caps[1].replace("**", "").trim().to_string();
            let value = parse_number(&caps[2])?;
            (!name.is_empty()).then(|| SeriesPoint::new(name, value))
        })
        .collect()
}

/// Reads a gauge from a `value:` line (or a bare number) and an optional `label:` line.
pub fn parse_gauge(body: &str) -> Option<GaugeReading> {
    let mut value = None;
    let mut label = None;
    for line in body.lines() {
        if let Some(caps) = gauge_value_line()
            .captures(line)
            .or_else(|| bare_number_line().captures(line))
        {
            value = value.or_else(|| parse_number(&caps[1]));
        } else if let Some(caps) = gauge_label_line().captures(line) {
            label = label.or_else(|| Some(caps[1].to_string()));
        }
    }
    Some(GaugeReading {
        value: value?,
        label,
    })
}
