// Character classification and Unicode utilities.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Convert a character to its simple uppercase equivalent.
///
/// For characters with multi-character uppercase expansions, returns only
/// the first character (one-to-one mapping).
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only
/// the first character.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Canonically decompose `text` and drop every combining mark, stripping
/// accents while preserving base letters ("CAMIÓN" -> "CAMION",
/// "Ñ" -> "N").
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|&c| !is_combining_mark(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_upper_basic_latin() {
        assert_eq!(simple_upper('a'), 'A');
        assert_eq!(simple_upper('z'), 'Z');
        assert_eq!(simple_upper('A'), 'A');
    }

    #[test]
    fn simple_upper_extended() {
        assert_eq!(simple_upper('\u{00F1}'), '\u{00D1}'); // ñ -> Ñ
        assert_eq!(simple_upper('\u{00E9}'), '\u{00C9}'); // é -> É
    }

    #[test]
    fn simple_lower_basic_latin() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_lower('Z'), 'z');
        assert_eq!(simple_lower('a'), 'a');
    }

    #[test]
    fn simple_case_on_non_letters() {
        assert_eq!(simple_upper('1'), '1');
        assert_eq!(simple_lower('-'), '-');
    }

    #[test]
    fn strip_diacritics_accents() {
        assert_eq!(strip_diacritics("CAMI\u{00D3}N"), "CAMION");
        assert_eq!(strip_diacritics("\u{00C1}RBOL"), "ARBOL");
        assert_eq!(strip_diacritics("\u{00C9}POCA"), "EPOCA");
    }

    #[test]
    fn strip_diacritics_tilde_and_diaeresis() {
        assert_eq!(strip_diacritics("\u{00D1}"), "N"); // Ñ
        assert_eq!(strip_diacritics("\u{00DC}"), "U"); // Ü
        assert_eq!(strip_diacritics("PING\u{00DC}INO"), "PINGUINO");
    }

    #[test]
    fn strip_diacritics_already_decomposed() {
        // Base letter followed by a combining tilde
        assert_eq!(strip_diacritics("N\u{0303}"), "N");
    }

    #[test]
    fn strip_diacritics_plain_text_unchanged() {
        assert_eq!(strip_diacritics("HOLA MUNDO 123"), "HOLA MUNDO 123");
    }
}
