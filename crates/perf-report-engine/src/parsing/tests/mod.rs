//! End-to-end tests for the compile pipeline.
//!
//! Each test compiles a whole document and checks the emitted blocks, with
//! the output invariants asserted on every result.

use pretty_assertions::assert_eq;

use crate::models::{ChartBundle, ReportDocument, SeriesPoint};
use crate::parsing::{
    CompiledReport,
    blocks::{Block, CalloutKind, HeadingStyle, ListMode},
    compile_report,
    directives::{ChartPayload, ChartSource},
    snapshot,
};

fn compile(doc: ReportDocument) -> CompiledReport {
    let report = compile_report(&doc);
    snapshot::invariants(&report.blocks);
    report
}

fn general(text: &str) -> CompiledReport {
    compile(ReportDocument::new(text).general_report(true))
}

fn kinds(blocks: &[Block]) -> Vec<&'static str> {
    blocks
        .iter()
        .map(|b| match b {
            Block::Heading(_) => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::List(_) => "list",
            Block::Table(_) => "table",
            Block::Callout(_) => "callout",
            Block::Chart(_) => "chart",
            Block::Rule => "rule",
            Block::Spacer => "spacer",
        })
        .collect()
}

fn callout_texts(block: &Block) -> (CalloutKind, Vec<String>) {
    let Block::Callout(c) = block else {
        panic!("expected callout, got {block:?}");
    };
    (c.kind, c.children.iter().map(|p| p.plain_text()).collect())
}

#[test]
fn highlight_and_risk_sections_become_callouts() {
    let report = general("## Destaques\nTexto A.\nTexto B.\n## Riscos\nTexto C.\n");

    assert_eq!(
        kinds(&report.blocks),
        vec!["heading", "callout", "heading", "callout"]
    );
    assert_eq!(
        callout_texts(&report.blocks[1]),
        (
            CalloutKind::Highlight,
            vec!["Texto A.".to_string(), "Texto B.".to_string()]
        )
    );
    assert_eq!(
        callout_texts(&report.blocks[3]),
        (CalloutKind::Risk, vec!["Texto C.".to_string()])
    );
}

#[test]
fn risk_callout_ends_at_next_h2() {
    let report = general("## Riscos\nPrimeiro\nSegundo\n## Outra Seção");

    assert_eq!(kinds(&report.blocks), vec!["heading", "callout", "heading"]);
    assert_eq!(
        callout_texts(&report.blocks[1]),
        (
            CalloutKind::Risk,
            vec!["Primeiro".to_string(), "Segundo".to_string()]
        )
    );
    let Block::Heading(h) = &report.blocks[2] else {
        panic!("expected heading");
    };
    assert_eq!(h.level, 2);
}

#[test]
fn callout_absorbs_paragraphs_until_next_section() {
    let report = general("## Destaques\nPrimeiro ponto\n\nSegundo ponto\n## Outra Secao\nTexto livre");

    assert_eq!(
        kinds(&report.blocks),
        vec!["heading", "spacer", "callout", "heading", "paragraph"]
    );
    assert_eq!(callout_texts(&report.blocks[2]).1.len(), 2);
}

#[test]
fn conclusion_lists_flow_as_text() {
    let report = general("## Conclusao\n- um\n  - dois");
    let Block::List(list) = &report.blocks[1] else {
        panic!("expected list");
    };
    assert_eq!(list.mode, ListMode::FlowText);
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[1].plain_text(), "dois");
}

#[test]
fn ranking_lists_keep_nesting() {
    let report = general("## Ranking\n- um\n  - dois");
    let Block::List(list) = &report.blocks[1] else {
        panic!("expected list");
    };
    assert_eq!(list.mode, ListMode::Nested);
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].children[0].plain_text(), "dois");
}

#[test]
fn table_with_separator_gets_header() {
    let report = compile(ReportDocument::new(
        "| Nome | Nota |\n|------|------|\n| Ana | 4 |\n| Rui | 3 |",
    ));
    let Block::Table(table) = &report.blocks[0] else {
        panic!("expected table");
    };
    let header: Vec<&str> = table
        .header
        .iter()
        .flatten()
        .map(|c| c.text.as_str())
        .collect();
    assert_eq!(header, vec!["Nome", "Nota"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1][0].text, "Rui");
}

#[test]
fn bundle_chart_wins_and_carries_accent() {
    let bundle = ChartBundle {
        bar: vec![SeriesPoint::new("X", 1.0)],
        ..Default::default()
    };
    let doc = ReportDocument::new("Intro\n[{bar}]Y: 2[{/bar}]\nFim")
        .with_classification("Excelente")
        .with_chart_data(bundle);
    let report = compile(doc);

    assert_eq!(kinds(&report.blocks), vec!["paragraph", "chart", "paragraph"]);
    let Block::Chart(chart) = &report.blocks[1] else {
        panic!("expected chart");
    };
    assert_eq!(chart.source, ChartSource::Bundle);
    assert_eq!(chart.accent, "#16a34a");
    assert_eq!(
        chart.payload,
        ChartPayload::Series {
            series: vec![SeriesPoint::new("X", 1.0)]
        }
    );
}

#[test]
fn inline_gauge_closes_open_callout() {
    let report = general("## Destaques\nA\n[{gauge}]value: 4[{/gauge}]\nB");

    assert_eq!(
        kinds(&report.blocks),
        vec!["heading", "callout", "chart", "paragraph"]
    );
    let Block::Chart(chart) = &report.blocks[2] else {
        panic!("expected chart");
    };
    assert!(matches!(
        chart.payload,
        ChartPayload::Gauge { percent, .. } if percent == 80.0
    ));
}

#[test]
fn directive_without_data_leaves_no_trace() {
    let report = general("Antes [{hist}] depois");
    assert_eq!(kinds(&report.blocks), vec!["paragraph"]);
}

#[test]
fn dropped_directive_line_does_not_split_list() {
    let report = general("- a\n[{hist}]\n- b");
    assert_eq!(kinds(&report.blocks), vec!["list"]);
    let Block::List(list) = &report.blocks[0] else {
        panic!("expected list");
    };
    assert_eq!(list.items.len(), 2);
}

#[test]
fn self_closing_chart_keeps_following_text() {
    let bundle = ChartBundle {
        bar: vec![SeriesPoint::new("X", 1.0)],
        ..Default::default()
    };
    let doc = ReportDocument::new("[{bar}]\nTexto importante\n[{bar}]Y: 2[{/bar}]\nFim")
        .with_chart_data(bundle);
    let report = compile(doc);

    assert_eq!(
        kinds(&report.blocks),
        vec!["chart", "paragraph", "chart", "paragraph"]
    );
    let Block::Paragraph(p) = &report.blocks[1] else {
        panic!("expected paragraph");
    };
    assert_eq!(p.plain_text(), "Texto importante");
}

#[test]
fn empty_document() {
    assert!(compile(ReportDocument::new("")).blocks.is_empty());
}

#[test]
fn blank_lines_only_emit_spacers() {
    let report = compile(ReportDocument::new("\n\n"));
    assert_eq!(kinds(&report.blocks), vec!["spacer", "spacer"]);
}

#[test]
fn plain_mode_skips_general_policy() {
    let report = compile(ReportDocument::new(
        "## Destaques\n**Riscos**: turnover\nscore por BU",
    ));

    assert_eq!(kinds(&report.blocks), vec!["heading", "paragraph", "paragraph"]);
    let Block::Paragraph(last) = &report.blocks[2] else {
        panic!("expected paragraph");
    };
    assert_eq!(last.plain_text(), "score por BU");
}

#[test]
fn general_mode_normalizes_vocabulary() {
    let report = general("Media de score por BU");
    let Block::Paragraph(p) = &report.blocks[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(p.plain_text(), "Media de nota por Unidade");
}

#[test]
fn action_plan_milestones_become_headings() {
    let report = general("## Plano de Acao\n- **30 dias:** mapear gaps\n- revisar metas");
    let Block::Heading(h) = &report.blocks[1] else {
        panic!("expected heading");
    };
    assert_eq!(h.style, HeadingStyle::Milestone);
    assert_eq!(h.text, "30 dias: mapear gaps");
    assert_eq!(kinds(&report.blocks), vec!["heading", "heading", "list"]);
}

#[test]
fn band_subsections_are_compact_cards() {
    let report = general("## Analise por Faixa\n### Faixa 4\nTexto");
    let Block::Heading(h) = &report.blocks[1] else {
        panic!("expected heading");
    };
    assert_eq!(h.style, HeadingStyle::CompactCard);
}

#[test]
fn outline_lists_headings_in_order() {
    let report = general("# Relatorio\n## Destaques\nA\n### Sub **forte**");
    assert_eq!(
        report.outline(),
        vec![
            (1, "Relatorio".to_string()),
            (2, "Destaques".to_string()),
            (3, "Sub forte".to_string()),
        ]
    );
}
