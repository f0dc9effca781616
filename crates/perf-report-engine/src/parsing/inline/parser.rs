use regex::Captures;

use super::{
    kinds::{Bold, CodeSpan, Italic, Link},
    types::InlineSpan,
};

/// A candidate span found somewhere in the remaining text.
struct Found {
    start: usize,
    end: usize,
    span: InlineSpan,
}

/// Renders one line of text into a sequence of [`InlineSpan`]s.
///
/// Repeatedly picks the earliest-starting match among the span kinds,
/// emits the text before it, emits the span and continues after it.
/// Whatever remains when nothing matches becomes a trailing text span.
///
/// # Returns
/// Spans covering the whole input; an empty input yields no spans.
pub fn render_inline(s: &str) -> Vec<InlineSpan> {
    let mut out = vec![];
    let mut rest = s;

    while let Some(found) = earliest(rest) {
        if found.start > 0 {
            out.push(InlineSpan::text(&rest[..found.start]));
        }
        out.push(found.span);
        rest = &rest[found.end..];
    }

    if !rest.is_empty() {
        out.push(InlineSpan::text(rest));
    }
    out
}

/// Returns the earliest match, keeping the first kind in precedence order on ties.
fn earliest(s: &str) -> Option<Found> {
    [try_bold(s), try_italic(s), try_code(s), try_link(s)]
        .into_iter()
        .flatten()
        .reduce(|best, next| if next.start < best.start { next } else { best })
}

fn found(caps: &Captures<'_>, span: InlineSpan) -> Option<Found> {
    let whole = caps.get(0)?;
    Some(Found {
        start: whole.start(),
        end: whole.end(),
        span,
    })
}

fn try_bold(s: &str) -> Option<Found> {
    let caps = Bold::regex().captures(s)?;
    found(&caps, InlineSpan::bold(&caps[1]))
}

fn try_italic(s: &str) -> Option<Found> {
    let caps = Italic::regex().captures(s)?;
    found(&caps, InlineSpan::italic(&caps[1]))
}

fn try_code(s: &str) -> Option<Found> {
    let caps = CodeSpan::regex().captures(s)?;
    found(&caps, InlineSpan::code(&caps[1]))
}

fn try_link(s: &str) -> Option<Found> {
    let caps = Link::regex().captures(s)?;
    found(&caps, InlineSpan::link(&caps[1], &caps[2]))
}
