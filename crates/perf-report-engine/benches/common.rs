// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_report(sections: usize) -> String {
    let base = "## Sumario Executivo\n\n- Media geral de 3,8\n- Dispersao moderada\n\n\
## Destaques\n\nA unidade Norte lidera o ranking.\n**Tendencia**: alta consistente\n\n\
## Ranking por Unidade\n\n| Unidade | Media |\n|---|---|\n| Norte | 4,2 |\n| Sul | 3,1 |\n\n\
- Norte\n  - time A\n  - time B\n- Sul\n\n[{radar}]\n- Entrega: 4\n- Lideranca: 3,5\n[{/radar}]\n\n\
## Plano de Acao\n\n- **30 dias:** mapear gaps\n- **90 dias:** revisar metas\n\n";
    base.repeat(sections)
}

#[allow(dead_code)]
pub fn generate_inline_heavy(paragraphs: usize) -> String {
    let line = "Texto com **negrito**, *italico*, `codigo` e [link](https://example.com) repetidos.\n";
    line.repeat(paragraphs)
}
