// Greedy longest-match segmentation of IPA strings.
//
// The transcription engine returns one continuous IPA string per word,
// with no separators between symbols. Segmentation walks it left to
// right, consuming the longest known unit at the cursor (units are 1-3
// code points; the ligated affricate and the literal "RR" segment must
// win over their single-symbol prefixes) and emitting the unit's target
// phonemes. A code point with no table entry degrades to one fallback
// token and is reported back to the caller.

use std::sync::OnceLock;

use hashbrown::HashMap;

use fonema_core::phoneme::FALLBACK;

/// IPA unit -> space-separated target phonemes, in table order.
/// An empty value drops the unit entirely (the mute h, stray combining
/// marks, slashes).
const SEGMENT_TABLE: &[(&str, &str)] = &[
    // vowels
    ("a", "a"),
    ("e", "e"),
    ("i", "i"),
    ("o", "o"),
    ("u", "u"),
    ("\u{0259}", "a"), // ə
    ("\u{0251}", "a"), // ɑ
    ("\u{025B}", "e"), // ɛ
    ("\u{0254}", "o"), // ɔ
    ("\u{026A}", "i"), // ɪ
    ("\u{028A}", "u"), // ʊ
    // stops
    ("p", "p"),
    ("t", "t"),
    ("k", "k"),
    ("b", "b"),
    ("d", "d"),
    ("g", "g"),
    ("\u{0261}", "g"), // ɡ, the IPA script g
    // fricatives and the voiced approximant foldings
    ("f", "f"),
    ("s", "s"),
    ("x", "x"),
    ("\u{03B8}", "z"), // θ, Castilian z/ce/ci
    ("\u{00F0}", "d"), // ð, soft intervocalic d
    ("\u{03B2}", "b"), // β, soft intervocalic b/v
    ("\u{0263}", "g"), // ɣ, soft intervocalic g
    ("h", ""),         // mute in standard Spanish
    // nasals
    ("m", "m"),
    ("n", "n"),
    ("\u{0272}", "ni"), // ɲ, the ñ
    ("\u{014B}", "n"),  // ŋ, velar n
    // laterals and palatals (yeísta merger of ʎ and ʝ)
    ("l", "l"),
    ("\u{028E}", "y"), // ʎ
    ("\u{029D}", "y"), // ʝ
    // rhotics: the engine uses the plain trill symbol for the strong
    // vibrant, and some engine versions emit a literal "RR" segment
    ("\u{027E}", "r"), // ɾ, the tap
    ("r", "rh"),
    ("RR", "rh"),
    // glides, vocalic inside diphthongs
    ("j", "i"),
    ("w", "u"),
    // affricate, with and without the tie bar
    ("t\u{0361}\u{0283}", "ch"), // t͡ʃ
    ("t\u{0283}", "ch"),         // tʃ
    // the letter x passed through untranscribed ("taxi", "éxito")
    ("X", "k s"),
    // combining marks that survive as standalone code points
    ("\u{0301}", ""), // acute
    ("\u{0303}", ""), // tilde
    ("\u{0308}", ""), // diaeresis
    // structural symbols
    ("/", ""),
    ("&", "i"),
    // digit names
    ("0", "s e r o"),
    ("1", "u n o"),
    ("2", "d o s"),
    ("3", "t r e s"),
    ("4", "k u a t r o"),
    ("5", "s i n k o"),
    ("6", "s e i s"),
    ("7", "s i e t e"),
    ("8", "o ch o"),
    ("9", "n u e b e"),
];

/// One segment-map entry, its unit expanded to code points.
struct Entry {
    unit: Vec<char>,
    phonemes: Vec<&'static str>,
}

/// The segment map, bucketed by leading code point. Within a bucket,
/// entries are ordered by descending unit length (ties keep table
/// order), so a lookup always tries longer units strictly before their
/// prefixes.
struct SegmentMap {
    by_first: HashMap<char, Vec<Entry>>,
}

impl SegmentMap {
    fn build() -> Self {
        let mut by_first: HashMap<char, Vec<Entry>> = HashMap::new();
        for &(unit, mapped) in SEGMENT_TABLE {
            let chars: Vec<char> = unit.chars().collect();
            by_first.entry(chars[0]).or_default().push(Entry {
                unit: chars,
                phonemes: mapped.split_whitespace().collect(),
            });
        }
        for bucket in by_first.values_mut() {
            // Stable: equal lengths stay in table order.
            bucket.sort_by(|a, b| b.unit.len().cmp(&a.unit.len()));
        }
        Self { by_first }
    }

    /// The process-wide map, built on first use and read-only after.
    fn global() -> &'static SegmentMap {
        static MAP: OnceLock<SegmentMap> = OnceLock::new();
        MAP.get_or_init(SegmentMap::build)
    }

    /// The longest unit matching at the start of `chars`.
    fn match_at(&self, chars: &[char]) -> Option<&Entry> {
        let bucket = self.by_first.get(chars.first()?)?;
        bucket.iter().find(|e| chars.starts_with(&e.unit))
    }
}

/// Result of segmenting one IPA string.
#[derive(Debug, Clone)]
pub struct Segmentation {
    /// Target phonemes in input order.
    pub phonemes: Vec<&'static str>,
    /// Code points with no table entry, with their char offsets. Each
    /// contributed one fallback token; callers surface these as
    /// diagnostics for table maintenance.
    pub unmapped: Vec<(usize, char)>,
}

/// Segment an IPA string into target phonemes.
///
/// Empty input means the engine produced nothing for the word and yields
/// a single fallback token. Unknown symbols never abort the walk; each
/// one becomes a fallback token and an `unmapped` record.
pub fn segment(ipa: &str) -> Segmentation {
    let chars: Vec<char> = ipa.chars().collect();
    if chars.is_empty() {
        return Segmentation {
            phonemes: vec![FALLBACK],
            unmapped: Vec::new(),
        };
    }

    let map = SegmentMap::global();
    let mut phonemes = Vec::with_capacity(chars.len());
    let mut unmapped = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        match map.match_at(&chars[pos..]) {
            Some(entry) => {
                phonemes.extend_from_slice(&entry.phonemes);
                pos += entry.unit.len();
            }
            None => {
                unmapped.push((pos, chars[pos]));
                phonemes.push(FALLBACK);
                pos += 1;
            }
        }
    }

    Segmentation { phonemes, unmapped }
}
