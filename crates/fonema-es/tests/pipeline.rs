//! End-to-end pipeline scenarios against a mock transcription engine.

use fonema_es::engine::{EngineError, Transliterator};
use fonema_es::pipeline::{Diagnostic, Transcriber, Transcription};

// ---------------------------------------------------------------------------
// Mock engine
// ---------------------------------------------------------------------------

/// Engine backed by a fixed word -> IPA table; any other word fails the
/// way a real engine fails on input it has no model for.
struct TableEngine(&'static [(&'static str, &'static str)]);

impl Transliterator for TableEngine {
    fn transliterate(&self, word: &str) -> Result<String, EngineError> {
        self.0
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, ipa)| (*ipa).to_string())
            .ok_or_else(|| EngineError::Engine(format!("no transcription for {word:?}")))
    }
}

fn transcriber() -> Transcriber<TableEngine> {
    Transcriber::new(TableEngine(&[
        ("CASA", "kasa"),
        ("PERRO", "pe\u{027E}o"),
        ("ROSA", "\u{027E}osa"),
        ("ENRIQUE", "en\u{027E}ike"),
        ("CHILE", "t\u{0361}\u{0283}ile"),
        ("CAMI\u{00D3}N", "kamjon"),
        ("TCP/IP", "tesepeipe"),
        ("NAQ", "na\u{0294}"), // ʔ is not in the segment map
    ]))
}

fn entry(raw: &str) -> Transcription {
    transcriber().transcribe(raw).expect("non-blank input")
}

// ---------------------------------------------------------------------------
// Lexicon-line scenarios
// ---------------------------------------------------------------------------

#[test]
fn casa_round_trip() {
    let t = entry("CASA");
    assert_eq!(t.key, "CASA");
    assert_eq!(t.pronunciation, "k a s a");
    assert!(t.notes.is_empty());
}

#[test]
fn lowercase_input_reaches_the_same_entry() {
    let t = entry("casa");
    assert_eq!(t.key, "CASA");
    assert_eq!(t.pronunciation, "k a s a");
}

#[test]
fn digraph_trill_is_reconstructed() {
    // The engine emits the tap for PERRO; the spelling wins.
    let t = entry("PERRO");
    assert_eq!(t.pronunciation, "p e rh o");
}

#[test]
fn word_initial_trill_is_reconstructed() {
    let t = entry("ROSA");
    assert_eq!(t.pronunciation, "rh o s a");
}

#[test]
fn cluster_trill_is_reconstructed() {
    let t = entry("ENRIQUE");
    assert_eq!(t.pronunciation, "e n rh i k e");
}

#[test]
fn ligated_affricate_maps_whole() {
    let t = entry("CHILE");
    assert_eq!(t.pronunciation, "ch i l e");
}

#[test]
fn accented_word_keeps_diacritics_for_the_engine() {
    // The key is folded, but the engine saw the accented form.
    let t = entry("camión");
    assert_eq!(t.key, "CAMION");
    assert_eq!(t.pronunciation, "k a m i o n");
}

#[test]
fn punctuated_token_key_is_collapsed() {
    let t = entry("TCP/IP");
    assert_eq!(t.key, "TCPIP");
    assert_eq!(t.pronunciation, "t e s e p e i p e");
}

// ---------------------------------------------------------------------------
// Failure containment
// ---------------------------------------------------------------------------

#[test]
fn engine_failure_yields_fallback_line_and_run_continues() {
    let t = transcriber();

    let failed = t.transcribe("XYZZY").unwrap();
    assert_eq!(failed.key, "XYZZY");
    assert_eq!(failed.pronunciation, "spn");
    assert!(matches!(
        failed.notes.as_slice(),
        [Diagnostic::EngineFailure { .. }]
    ));

    // The next word is unaffected.
    let next = t.transcribe("CASA").unwrap();
    assert_eq!(next.pronunciation, "k a s a");
}

#[test]
fn unmapped_symbol_is_reported_not_fatal() {
    let t = entry("NAQ");
    assert_eq!(t.pronunciation, "n a spn");
    match t.notes.as_slice() {
        [Diagnostic::UnmappedSymbol { symbol, offset, ipa }] => {
            assert_eq!(*symbol, '\u{0294}');
            assert_eq!(*offset, 2);
            assert_eq!(ipa, "na\u{0294}");
        }
        other => panic!("expected one unmapped-symbol note, got {other:?}"),
    }
}

#[test]
fn blank_lines_produce_no_entries() {
    let t = transcriber();
    assert!(t.transcribe("").is_none());
    assert!(t.transcribe("   \t ").is_none());
}
