//! Spanish grapheme-to-phoneme conversion for pronunciation lexicons.
//!
//! Converts out-of-vocabulary orthographic words into phoneme sequences
//! over a small fixed target inventory, one lexicon entry per word. The
//! IPA transcription itself comes from an external engine; this crate
//! canonicalizes the word into a lexicon key, segments the engine's IPA
//! output into known units, maps each unit to target phonemes, and
//! reconstructs the tap/trill rhotic distinction from the spelling.
//!
//! # Architecture
//!
//! - [`normalize`] -- orthographic normalizer producing lexicon keys
//! - [`segment`] -- greedy longest-match IPA segmenter over a static unit table
//! - [`rhotic`] -- tap/trill disambiguation from orthographic context
//! - [`engine`] -- the external transcription engine seam
//! - [`pipeline`] -- per-word orchestration with failure containment
//! - [`lexicon`] -- re-keying of existing base-lexicon files

pub mod engine;
pub mod lexicon;
pub mod normalize;
pub mod pipeline;
pub mod rhotic;
pub mod segment;
