// Per-word transcription pipeline.
//
// For each input word: normalize to a lexicon key, obtain the IPA string
// from the engine, segment it, apply the rhotic heuristics with the same
// word form the engine saw, and join the tokens. Failures are contained
// per word: one failing word degrades to the fallback token and never
// aborts the words after it.

use fonema_core::phoneme::FALLBACK;

use crate::engine::Transliterator;
use crate::normalize::normalize;
use crate::rhotic;
use crate::segment::segment;

/// One transcribed word: lexicon key, pronunciation, and the diagnostics
/// collected on the way.
#[derive(Debug, Clone)]
pub struct Transcription {
    pub key: String,
    /// Space-joined target phonemes, never empty.
    pub pronunciation: String,
    /// Notes for the error channel; never part of the lexicon output.
    pub notes: Vec<Diagnostic>,
}

/// Per-word diagnostics.
#[derive(Debug, Clone)]
pub enum Diagnostic {
    /// A code point in the engine's IPA output has no segment-map entry.
    /// Surfaced for table maintenance, not an error.
    UnmappedSymbol {
        symbol: char,
        offset: usize,
        ipa: String,
    },
    /// The engine failed for this word; the fallback pronunciation was
    /// emitted instead.
    EngineFailure { message: String },
}

/// Drives the per-word pipeline against a transcription engine.
pub struct Transcriber<T> {
    engine: T,
}

impl<T: Transliterator> Transcriber<T> {
    pub fn new(engine: T) -> Self {
        Self { engine }
    }

    /// Transcribe one input line. Returns `None` for blank lines.
    ///
    /// Never fails: a per-word engine error degrades to the fallback
    /// token and a [`Diagnostic::EngineFailure`] note.
    pub fn transcribe(&self, raw: &str) -> Option<Transcription> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let key = normalize(trimmed);
        // The engine and the rhotic heuristics both see this form:
        // upper-cased, diacritics and Ñ/Ü intact.
        let word = trimmed.to_uppercase();

        let (pronunciation, notes) = match self.engine.transliterate(&word) {
            Ok(ipa) => {
                let mut seg = segment(&ipa);
                rhotic::resolve(&word, &mut seg.phonemes);
                let notes = seg
                    .unmapped
                    .iter()
                    .map(|&(offset, symbol)| Diagnostic::UnmappedSymbol {
                        symbol,
                        offset,
                        ipa: ipa.clone(),
                    })
                    .collect();
                let joined = seg.phonemes.join(" ");
                let pronunciation = if joined.is_empty() {
                    FALLBACK.to_string()
                } else {
                    joined
                };
                (pronunciation, notes)
            }
            Err(e) => (
                FALLBACK.to_string(),
                vec![Diagnostic::EngineFailure {
                    message: e.to_string(),
                }],
            ),
        };

        Some(Transcription {
            key,
            pronunciation,
            notes,
        })
    }
}
