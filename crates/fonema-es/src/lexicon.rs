// Base-lexicon re-keying.
//
// A deployment usually starts from an existing lexicon of
// `word<TAB>pronunciation` lines whose words are still in their original
// orthography. Re-keying runs each word through the normalizer so base
// entries and G2P output share one key space.

use crate::normalize::{UNKNOWN_KEY, normalize};

/// One usable base-lexicon entry after re-keying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub key: String,
    pub pronunciation: String,
}

/// Why a line was rejected. Rejections are warnings at the call site,
/// never fatal.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RekeyError {
    #[error("expected word<TAB>pronunciation, got {0:?}")]
    Malformed(String),

    #[error("word normalizes to the unknown-symbol key: {0:?}")]
    UnusableKey(String),
}

/// Re-key one base-lexicon line.
///
/// Blank lines and `#` comments are `Ok(None)`. The pronunciation field
/// is kept as-is apart from trimming; only the word is rewritten.
pub fn rekey_line(line: &str) -> Result<Option<LexiconEntry>, RekeyError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let Some((word, pronunciation)) = line.split_once('\t') else {
        return Err(RekeyError::Malformed(line.to_string()));
    };
    let pronunciation = pronunciation.trim();
    if pronunciation.is_empty() {
        return Err(RekeyError::Malformed(line.to_string()));
    }

    let key = normalize(word);
    if key == UNKNOWN_KEY {
        return Err(RekeyError::UnusableKey(word.to_string()));
    }

    Ok(Some(LexiconEntry {
        key,
        pronunciation: pronunciation.to_string(),
    }))
}
