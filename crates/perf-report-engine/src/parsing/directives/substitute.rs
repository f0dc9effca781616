use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::models::{ChartBundle, ChartKind};

use super::fallback;
use super::payload::{ChartBlock, ChartPayload, ChartSource};

/// Report text with chart directives lifted out.
///
/// Each resolved directive is replaced by an empty line of its own; the
/// chart for it sits in `charts` under that line's zero-based index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Substitution {
    pub text: String,
    pub charts: BTreeMap<usize, ChartBlock>,
}

struct DirectiveMatch<'a> {
    kind: ChartKind,
    span: Range<usize>,
    body: Option<&'a str>,
}

/// Opening `[{kind}]` or closing `[{/kind}]` tag; group 1 is the slash.
fn tag_patterns() -> &'static [(ChartKind, Regex)] {
    static RE: OnceLock<Vec<(ChartKind, Regex)>> = OnceLock::new();
    RE.get_or_init(|| {
        ChartKind::ALL
            .iter()
            .map(|kind| {
                let pattern = format!(r"(?i)\[\{{(/?){}\}}\]", kind.tag());
                (
                    *kind,
                    Regex::new(&pattern).expect("Invalid chart directive regex"),
                )
            })
            .collect()
    })
}

/// Pairs tags of one kind in document order.
///
/// An opening tag directly followed by a closing tag encloses a body. An
/// opening tag followed by another opening tag, or by nothing, stands alone.
/// Stray closing tags are left in the text.
fn find_directives(text: &str) -> Vec<DirectiveMatch<'_>> {
    let mut found = vec![];
    for (kind, re) in tag_patterns() {
        let mut tags = re
            .captures_iter(text)
            .filter_map(|caps| Some((caps.get(0)?.range(), caps.get(1)?.is_empty())))
            .peekable();

        while let Some((open, is_open)) = tags.next() {
            if !is_open {
                continue;
            }
            let directive = match tags.next_if(|(_, next_open)| !next_open) {
                Some((close, _)) => DirectiveMatch {
                    kind: *kind,
                    span: open.start..close.end,
                    body: Some(&text[open.end..close.start]),
                },
                None => DirectiveMatch {
                    kind: *kind,
                    span: open,
                    body: None,
                },
            };
            found.push(directive);
        }
    }
    found.sort_by_key(|m| m.span.start);
    found
}

/// Bundle data wins; the directive body is only consulted when the bundle
/// has nothing for this kind.
fn resolve(
    kind: ChartKind,
    body: Option<&str>,
    bundle: Option<&ChartBundle>,
    accent: &str,
) -> Option<ChartBlock> {
    let (payload, source) = match bundle.and_then(|b| ChartPayload::from_bundle(kind, b)) {
        Some(payload) => (payload, ChartSource::Bundle),
        None => (fallback::parse_body(kind, body?)?, ChartSource::Inline),
    };
    Some(ChartBlock {
        kind,
        payload,
        accent: accent.to_string(),
        source,
    })
}

/// Replaces every chart directive in `text`.
///
/// Directives that resolve to data move onto their own line and are recorded
/// in the side table. Directives with no usable data are removed; when one
/// stood alone on its line the whole line goes with it.
pub fn substitute(text: &str, bundle: Option<&ChartBundle>, accent: &str) -> Substitution {
    let mut out = String::with_capacity(text.len());
    let mut charts = BTreeMap::new();
    let mut cursor = 0;

    for directive in find_directives(text) {
        if directive.span.start < cursor {
            continue;
        }
        out.push_str(&text[cursor..directive.span.start]);
        cursor = directive.span.end;

        let Some(chart) = resolve(directive.kind, directive.body, bundle, accent) else {
            debug!("dropping {} directive with no data", directive.kind.tag());
            let line_start = out.rfind('\n').map_or(0, |i| i + 1);
            let rest = &text[cursor..];
            let line_end = rest.find('\n').map_or(rest.len(), |i| i + 1);
            if out[line_start..].trim().is_empty() && rest[..line_end].trim().is_empty() {
                out.truncate(line_start);
                cursor += line_end;
            }
            continue;
        };

        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        charts.insert(out.matches('\n').count(), chart);

        let rest = &text[cursor..];
        if !rest.starts_with('\n') && !rest.starts_with("\r\n") {
            out.push('\n');
        }
    }
    out.push_str(&text[cursor..]);

    Substitution { text: out, charts }
}
