//! # Section Context
//!
//! Tracks the current H2 section and H3 subsection and derives formatting
//! policy from keyword tables. Titles are accent-folded before matching, and
//! every table entry is a folded substring.

use super::{blocks::CalloutKind, fold::fold};

const BULLET_SECTIONS: &[&str] = &[
    "sumario executivo",
    "resumo executivo",
    "executive summary",
    "distribuicao",
    "distribution",
    "classificacao",
    "classification",
    "faixa",
    "band",
    "papel",
    "papeis",
    "funcao",
    "funcoes",
    "role",
    "ranking",
    "top",
    "bottom",
    "prioridades da gestao",
    "prioridades de gestao",
    "management priorities",
    "plano de acao",
    "action plan",
    "tabela",
    "table",
    "quadro",
];

const HIGHLIGHT_SECTIONS: &[&str] = &["destaques", "highlights", "pontos fortes"];

const RISK_SECTIONS: &[&str] = &["riscos", "risks", "pontos de atencao"];

const COMPACT_CARD_SECTIONS: &[&str] = &[
    "analise por faixa",
    "analysis by band",
    "media por faixa",
    "average score by band",
];

const EXECUTIVE_SUMMARY: &[&str] = &["sumario executivo", "resumo executivo", "executive summary"];

const ACTION_PLAN: &[&str] = &["plano de acao", "action plan"];

const BAND_MENTIONS: &[&str] = &["faixa", "band"];

/// Policy flags derived from one heading title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TitlePolicy {
    pub bullets_allowed: bool,
    pub callout: Option<CalloutKind>,
    pub compact_card: bool,
    pub executive_summary: bool,
    pub action_plan: bool,
}

fn matches_any(folded: &str, table: &[&str]) -> bool {
    table.iter().any(|fragment| folded.contains(fragment))
}

/// Classifies a heading title against the keyword tables.
pub fn classify(title: &str) -> TitlePolicy {
    let folded = fold(title);
    let callout = if matches_any(&folded, HIGHLIGHT_SECTIONS) {
        Some(CalloutKind::Highlight)
    } else if matches_any(&folded, RISK_SECTIONS) {
        Some(CalloutKind::Risk)
    } else {
        None
    };

    TitlePolicy {
        bullets_allowed: matches_any(&folded, BULLET_SECTIONS),
        callout,
        compact_card: matches_any(&folded, COMPACT_CARD_SECTIONS),
        executive_summary: matches_any(&folded, EXECUTIVE_SUMMARY),
        action_plan: matches_any(&folded, ACTION_PLAN),
    }
}

/// Whether a subsection title names a score band ("Faixa 4", "Band A").
pub fn mentions_band(title: &str) -> bool {
    matches_any(&fold(title), BAND_MENTIONS)
}

/// Section state for one compile pass.
///
/// Outside general-report mode every query answers with the permissive
/// default: bullets allowed, nothing else enabled.
#[derive(Debug, Clone, Default)]
pub struct SectionContext {
    general: bool,
    section: String,
    subsection: String,
    section_policy: TitlePolicy,
    subsection_policy: TitlePolicy,
}

impl SectionContext {
    pub fn new(general: bool) -> Self {
        Self {
            general,
            ..Default::default()
        }
    }

    /// Records a heading. H1 clears everything, H2 replaces the section and
    /// clears the subsection, H3 replaces the subsection. Deeper levels are
    /// ignored.
    pub fn on_heading(&mut self, level: u8, title: &str) {
        match level {
            1 => {
                self.section.clear();
                self.subsection.clear();
                self.section_policy = TitlePolicy::default();
                self.subsection_policy = TitlePolicy::default();
            }
            2 => {
                self.section = title.to_string();
                self.section_policy = classify(title);
                self.subsection.clear();
                self.subsection_policy = TitlePolicy::default();
            }
            3 => {
                self.subsection = title.to_string();
                self.subsection_policy = classify(title);
            }
            _ => {}
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn subsection(&self) -> &str {
        &self.subsection
    }

    pub fn bullets_allowed(&self) -> bool {
        !self.general
            || self.section_policy.bullets_allowed
            || self.subsection_policy.bullets_allowed
    }

    pub fn is_executive_summary(&self) -> bool {
        self.general && self.section_policy.executive_summary
    }

    pub fn is_compact_card_section(&self) -> bool {
        self.general && self.section_policy.compact_card
    }

    /// Callout kind of the current H2, if it is a highlights/risks section.
    pub fn active_callout(&self) -> Option<CalloutKind> {
        if self.general {
            self.section_policy.callout
        } else {
            None
        }
    }

    pub fn is_action_plan(&self) -> bool {
        self.general && (self.section_policy.action_plan || self.subsection_policy.action_plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Ranking por Unidade", true)]
    #[case("Distribuição das Notas", true)]
    #[case("Plano de Ação", true)]
    #[case("Conclusão", false)]
    #[case("Contexto Geral", false)]
    fn bullets_table(#[case] title: &str, #[case] allowed: bool) {
        assert_eq!(classify(title).bullets_allowed, allowed);
    }

    #[rstest]
    #[case("Destaques", Some(CalloutKind::Highlight))]
    #[case("Principais Riscos", Some(CalloutKind::Risk))]
    #[case("Pontos de Atenção", Some(CalloutKind::Risk))]
    #[case("Outra Seção", None)]
    fn callout_table(#[case] title: &str, #[case] kind: Option<CalloutKind>) {
        assert_eq!(classify(title).callout, kind);
    }

    #[test]
    fn executive_summary_and_compact_cards() {
        assert!(classify("Sumário Executivo").executive_summary);
        assert!(classify("Análise por Faixa").compact_card);
        assert!(!classify("Análise Geral").compact_card);
    }

    #[test]
    fn h2_clears_subsection_and_h1_clears_both() {
        let mut ctx = SectionContext::new(true);
        ctx.on_heading(2, "Ranking");
        ctx.on_heading(3, "Top 5");
        assert_eq!(ctx.subsection(), "Top 5");

        ctx.on_heading(2, "Conclusão");
        assert_eq!(ctx.section(), "Conclusão");
        assert_eq!(ctx.subsection(), "");
        assert!(!ctx.bullets_allowed());

        ctx.on_heading(3, "Ranking final");
        assert!(ctx.bullets_allowed());

        ctx.on_heading(1, "Relatório");
        assert_eq!(ctx.section(), "");
        assert_eq!(ctx.subsection(), "");
    }

    #[test]
    fn callout_set_by_h2_and_cleared_by_other_h2() {
        let mut ctx = SectionContext::new(true);
        ctx.on_heading(2, "Riscos");
        assert_eq!(ctx.active_callout(), Some(CalloutKind::Risk));
        ctx.on_heading(3, "Detalhe");
        assert_eq!(ctx.active_callout(), Some(CalloutKind::Risk));
        ctx.on_heading(2, "Outra Seção");
        assert_eq!(ctx.active_callout(), None);
    }

    #[test]
    fn non_general_mode_is_permissive() {
        let mut ctx = SectionContext::new(false);
        ctx.on_heading(2, "Destaques");
        assert!(ctx.bullets_allowed());
        assert_eq!(ctx.active_callout(), None);

        ctx.on_heading(2, "Sumário Executivo");
        assert!(!ctx.is_executive_summary());
    }

    #[test]
    fn band_mentions() {
        assert!(mentions_band("Faixa 4 - Supera"));
        assert!(mentions_band("Band A"));
        assert!(!mentions_band("Resumo"));
    }
}
