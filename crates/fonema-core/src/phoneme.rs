// Target phoneme inventory.
//
// The recognizer lexicon expects entries over a small fixed set of
// phoneme tokens. Everything the segmenter and the rhotic resolver emit
// must come from this set.

/// Tap rhotic: the single-flap "r" as in "pero", "caro".
pub const TAP: &str = "r";

/// Trill rhotic: the multiple-vibration "rr" as in "perro", "rosa".
pub const TRILL: &str = "rh";

/// Placeholder emitted when transcription or mapping cannot produce a
/// confident result ("unrecognized speech").
pub const FALLBACK: &str = "spn";

/// The complete target inventory, fallback included.
pub const INVENTORY: &[&str] = &[
    "a", "e", "i", "o", "u", // vowels
    "p", "t", "k", "b", "d", "g", // stops
    "f", "s", "x", "z", // fricatives
    "m", "n", "ni", // nasals
    "l", "y", // laterals / palatal
    TAP, TRILL, // rhotics
    "ch", // affricate
    FALLBACK,
];

/// Check whether a token belongs to the target inventory.
pub fn is_target_phoneme(token: &str) -> bool {
    INVENTORY.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rhotics_and_fallback_are_in_inventory() {
        assert!(is_target_phoneme(TAP));
        assert!(is_target_phoneme(TRILL));
        assert!(is_target_phoneme(FALLBACK));
    }

    #[test]
    fn inventory_has_no_duplicates() {
        for (i, a) in INVENTORY.iter().enumerate() {
            for b in &INVENTORY[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn inventory_tokens_are_lowercase_ascii() {
        for token in INVENTORY {
            assert!(!token.is_empty());
            assert!(token.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert!(!is_target_phoneme("rr"));
        assert!(!is_target_phoneme("q"));
        assert!(!is_target_phoneme(""));
    }
}
