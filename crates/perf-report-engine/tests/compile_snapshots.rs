use perf_report_engine::{
    ChartBundle, ReportDocument, compile_report,
    models::{GaugeReading, HistBin},
    parsing::snapshot,
};

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn compile_fixture(doc: ReportDocument) -> String {
    let report = compile_report(&doc);
    snapshot::invariants(&report.blocks);
    snapshot::normalize(&report).to_string()
}

#[test]
fn fixture_general_report() {
    let doc = ReportDocument::new(read_fixture("general_report")).general_report(true);
    insta::assert_snapshot!(compile_fixture(doc), @r"
    heading h1 Standard: Relatorio Geral
    spacer
    heading h2 Standard: Sumario Executivo
    list Unordered Grid
      - Media geral de <b>3,8</b>
      - Dispersao moderada
    spacer
    heading h2 Standard: Destaques
    spacer
    callout Highlight
      paragraph: A unidade Norte lidera.
      paragraph [Tendencia]: alta consistente
    heading h2 Standard: Riscos de Retencao
    spacer
    callout Risk
      paragraph [Dispersao]: ampla entre equipes
    heading h2 Standard: Conclusao
    list Unordered FlowText
      - primeiro ponto
      - segundo ponto
    ");
}

#[test]
fn fixture_charts_and_tables() {
    let bundle = ChartBundle {
        hist: vec![
            HistBin {
                range: "1-2".into(),
                count: 3,
                min_value: 1.0,
                max_value: 2.0,
            },
            HistBin {
                range: "4-5".into(),
                count: 12,
                min_value: 4.0,
                max_value: 5.0,
            },
        ],
        gauge: Some(GaugeReading {
            value: 3.5,
            label: None,
        }),
        ..Default::default()
    };
    let doc = ReportDocument::new(read_fixture("charts_and_tables"))
        .general_report(true)
        .with_classification("Acima do Esperado")
        .with_chart_data(bundle);

    insta::assert_snapshot!(compile_fixture(doc), @r"
    heading h2 Standard: Distribuicao das Notas
    chart hist Bundle #16a34a: 1-2:3 4-5:12
    spacer
    table
      header [Faixa | Pessoas]
      row [1-2 | 3]
      row [4-5 | 12]
    spacer
    chart radar Inline #16a34a: Entrega=4 Lideranca=3.5
    chart gauge Bundle #16a34a: 70% of 3.5
    rule
    paragraph: Fim do relatorio.
    ");
}

#[test]
fn fixture_plain_report() {
    let doc = ReportDocument::new(read_fixture("plain_report"));
    insta::assert_snapshot!(compile_fixture(doc), @r"
    heading h1 Standard: Avaliacao Individual
    heading h2 Standard: Destaques
    paragraph: Texto com <i>italico</i>, <code>codigo</code> e <a https://example.com/p>painel</a>.
    list Ordered Nested
      - primeiro
      - segundo
    list Unordered Nested
      - detalhe
    rule
    ");
}

/// Compiling the same input twice yields identical output.
#[test]
fn compile_is_deterministic() {
    let doc = ReportDocument::new(read_fixture("general_report")).general_report(true);
    assert_eq!(compile_report(&doc), compile_report(&doc));
}
