// The external transcription engine seam.
//
// The engine receives one orthographic word (upper-cased, diacritics and
// Ñ/Ü intact) and returns a continuous IPA string for it. Engines are
// expected to be synchronous and potentially slow; the pipeline issues
// one call per word and applies no retry policy beyond the per-word
// fallback.

use std::io;

/// Error produced by a transliteration engine for a single word.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The engine channel failed.
    #[error("engine I/O error: {0}")]
    Io(#[from] io::Error),

    /// The engine stopped producing output.
    #[error("engine closed its output stream")]
    Closed,

    /// Engine-specific failure for this word.
    #[error("{0}")]
    Engine(String),
}

/// A grapheme-to-IPA transcription engine.
pub trait Transliterator {
    fn transliterate(&self, word: &str) -> Result<String, EngineError>;
}

/// Plain functions and closures work as engines, which keeps tests and
/// embedding callers free of wrapper types.
impl<F> Transliterator for F
where
    F: Fn(&str) -> Result<String, EngineError>,
{
    fn transliterate(&self, word: &str) -> Result<String, EngineError> {
        self(word)
    }
}
