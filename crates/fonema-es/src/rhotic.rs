// Tap/trill disambiguation from orthographic context.
//
// Spanish spells two phonemically distinct rhotics with the same letter,
// and the engine's IPA output often collapses the distinction or assigns
// it the wrong way. The trill positions are reconstructed from the
// spelling of the word: consonant clusters ("ENRIQUE", "ISRAEL",
// "ALREDEDOR"), the "rr" digraph ("PERRO"), and word-initial r ("ROSA").

use fonema_core::character::simple_upper;
use fonema_core::phoneme::{TAP, TRILL};

/// Consonants that force a following orthographic r to the trill.
const TRILL_CLUSTER_ONSETS: [char; 3] = ['N', 'L', 'S'];

/// Rewrite tap tokens to the trill where the spelling of `word` implies
/// the strong vibrant. `word` is compared case-insensitively; sequence
/// length and token order are preserved, only tap tokens change.
///
/// The rules fire independently, in a fixed order, and never undo an
/// earlier rewrite:
///
/// 1. cluster: N/L/S immediately before r rewrites the first tap only
/// 2. digraph: a literal "rr" rewrites every tap not already rewritten
/// 3. word-initial: a leading r rewrites the first remaining tap; a
///    trill encountered first already satisfies the rule
pub fn resolve(word: &str, phonemes: &mut [&'static str]) {
    if phonemes.is_empty() {
        return;
    }
    let letters: Vec<char> = word.chars().map(simple_upper).collect();
    let mut rewritten = vec![false; phonemes.len()];

    if has_trill_cluster(&letters) {
        if let Some(i) = phonemes.iter().position(|&p| p == TAP) {
            phonemes[i] = TRILL;
            rewritten[i] = true;
        }
    }

    if has_rr_digraph(&letters) {
        for i in 0..phonemes.len() {
            if phonemes[i] == TAP && !rewritten[i] {
                phonemes[i] = TRILL;
                rewritten[i] = true;
            }
        }
    }

    if letters.first() == Some(&'R') {
        for i in 0..phonemes.len() {
            if phonemes[i] == TAP && !rewritten[i] {
                phonemes[i] = TRILL;
                break;
            }
            if phonemes[i] == TRILL {
                break;
            }
        }
    }
}

fn has_trill_cluster(letters: &[char]) -> bool {
    letters
        .windows(2)
        .any(|w| TRILL_CLUSTER_ONSETS.contains(&w[0]) && w[1] == 'R')
}

fn has_rr_digraph(letters: &[char]) -> bool {
    letters.windows(2).any(|w| w[0] == 'R' && w[1] == 'R')
}
