//! Domain-term translation applied to general reports before block parsing.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Ordered substitutions. Longer phrases come before the words they contain,
/// and no replacement contains a source term, which keeps the pass idempotent.
const TERMS: &[(&str, &str)] = &[
    ("top performers", "alto desempenho"),
    ("low performers", "baixo desempenho"),
    ("business units", "unidades de negócio"),
    ("business unit", "unidade de negócio"),
    ("performance scores", "notas de desempenho"),
    ("performance score", "nota de desempenho"),
    ("std dev", "desvio padrão"),
    ("headcount", "quadro de pessoal"),
    ("BUs", "unidades"),
    ("BU", "unidade"),
    ("scores", "notas"),
    ("score", "nota"),
    ("ratings", "avaliações"),
    ("rating", "avaliação"),
    ("managers", "gestores"),
    ("manager", "gestor"),
    ("employees", "colaboradores"),
    ("employee", "colaborador"),
    ("leaders", "líderes"),
    ("leader", "líder"),
    ("roles", "funções"),
    ("role", "função"),
];

fn rules() -> &'static [(Regex, &'static str)] {
    static RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES.get_or_init(|| {
        TERMS
            .iter()
            .map(|(term, replacement)| {
                let words: Vec<String> = term.split(' ').map(regex::escape).collect();
                let pattern = format!(r"(?i)\b{}\b", words.join(r"\s+"));
                let re = Regex::new(&pattern).expect("Invalid vocabulary regex");
                (re, *replacement)
            })
            .collect()
    })
}

/// Translate domain terms and turn underscores into spaces.
///
/// Underscores go first so `manager_level` is seen as two words; a later
/// pass over the output then finds nothing left to translate.
/// A match starting with an uppercase letter gets a capitalized replacement.
pub fn normalize(text: &str) -> String {
    let mut out = text.replace('_', " ");
    for (re, replacement) in rules() {
        if !re.is_match(&out) {
            continue;
        }
        out = re
            .replace_all(&out, |caps: &Captures<'_>| match_case(&caps[0], replacement))
            .into_owned();
    }
    out
}

fn match_case(matched: &str, replacement: &str) -> String {
    let starts_upper = matched.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper {
        return replacement.to_string();
    }
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Average score per BU", "Average nota per Unidade")]
    #[case("Top performers lead", "Alto desempenho lead")]
    #[case("the business  unit managers", "the unidade de negócio gestores")]
    #[case("nota_media_geral", "nota media geral")]
    #[case("score_level", "nota level")]
    #[case("scoreboard stays", "scoreboard stays")]
    fn translates_whole_words(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize("## Role ranking\nScores by manager_level and BU\n- top performers: 3");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn leaves_directives_intact() {
        let text = "[{bar}]\nVendas: 3\n[{/bar}]";
        assert_eq!(normalize(text), text);
    }
}
