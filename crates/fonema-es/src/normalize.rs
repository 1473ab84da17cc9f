// Orthographic normalization for lexicon keys.
//
// A lexicon key is the canonical first column of a pronunciation-lexicon
// entry: upper-case, diacritics stripped, restricted to A-Z, digits and
// single interior spaces.

use fonema_core::character::strip_diacritics;

/// Sentinel key for inputs that normalize to nothing. The underscore
/// keeps it outside the space of real keys; the lexicon preprocessor
/// filters entries carrying it.
pub const UNKNOWN_KEY: &str = "UNK_SYMBOL";

/// Canonicalize a raw word or phrase into a lexicon key.
///
/// Structural punctuation is substituted before the character filter so
/// that tokens like "TCP/IP" or "R&D" survive as pronounceable keys; the
/// ampersand is spelled out as the conjunction Y. A single input token
/// never produces a multi-word key: when the substitutions introduce
/// spaces where the input had none, the spaces are removed again
/// ("TCP/IP" -> "TCPIP", "R&D" -> "RYD"). Phrases keep their word
/// boundaries ("BIG DATA" stays two words).
pub fn normalize(word: &str) -> String {
    let trimmed = word.trim();
    let had_internal_space = trimmed.chars().any(char::is_whitespace);

    let upper = trimmed.to_uppercase();
    let mut substituted = String::with_capacity(upper.len());
    for c in upper.chars() {
        match c {
            '/' | '-' | '_' => substituted.push(' '),
            '&' => substituted.push_str(" Y "),
            _ => substituted.push(c),
        }
    }

    let folded: String = strip_diacritics(&substituted)
        .chars()
        .map(|c| match c {
            '\u{00D1}' => 'N', // Ñ
            '\u{00DC}' => 'U', // Ü
            _ => c,
        })
        .collect();

    let kept: String = folded
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|&c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == ' ')
        .collect();

    let key = kept.split_whitespace().collect::<Vec<_>>().join(" ");

    let key = if !had_internal_space && key.contains(' ') {
        key.replace(' ', "")
    } else {
        key
    };

    if key.is_empty() { UNKNOWN_KEY.to_string() } else { key }
}
