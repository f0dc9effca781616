use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Lowercases `s` and strips diacritics, so `"Conclusão"` folds to `"conclusao"`.
///
/// All keyword tables in the compiler are written in folded form.
pub fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}
