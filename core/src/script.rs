//! Script and character-role classification for Myanmar and Shan text.
//!
//! Everything here is a direct numeric comparison against static codepoint
//! ranges. Classification is per codepoint, not per grapheme cluster, so a
//! combining mark classifies independently of its base consonant.
//!
//! Shan shares the U+1000 block with Burmese; the Shan-specific codepoints
//! are scattered inside that block, with the Khamti/Aiton extensions in
//! U+AA60..U+AA7F. Shan membership is tested first, then the block range.

use serde::{Deserialize, Serialize};

/// Zero-width space, used as the transient display placeholder while a
/// pre-base vowel waits for its consonant. Stripped from all finalized text.
pub const PLACEHOLDER: char = '\u{200B}';

/// Dependent vowel E (Myanmar), rendered left of its base consonant.
pub const MYANMAR_E: char = '\u{1031}';
/// Dependent vowel E (Shan), rendered left of its base consonant.
pub const SHAN_E: char = '\u{1084}';
/// Dependent vowel I, written above the base.
pub const VOWEL_I: char = '\u{102D}';
/// Dependent vowel U, written below the base.
pub const VOWEL_U: char = '\u{102F}';
/// Dependent vowel UU, written below the base.
pub const VOWEL_UU: char = '\u{1030}';
/// Anusvara (final nasal dot above).
pub const ANUSVARA: char = '\u{1036}';
/// Invisible stacker: subordinates the following consonant into the cluster.
pub const STACKER: char = '\u{1039}';
/// Asat (visible killer).
pub const ASAT: char = '\u{103A}';

/// Language of a codepoint, for run segmentation and speech dispatch.
///
/// Tags are mutually exclusive; `English` is the fallback for anything that
/// matches neither script, including digits, Latin text and punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Script {
    Shan,
    Myanmar,
    English,
}

/// Grammatical role of a key's codepoint, as far as the reordering rules
/// care. Anything the rules never inspect is `OtherMark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    BaseConsonant,
    PreBaseVowel,
    Medial,
    KillMark,
    OtherMark,
    Whitespace,
    Control,
}

/// Classify a codepoint into its script.
pub fn classify(ch: char) -> Script {
    if is_shan(ch) {
        Script::Shan
    } else if is_myanmar(ch) {
        Script::Myanmar
    } else {
        Script::English
    }
}

/// Shan-specific codepoints: the scattered points inside the Myanmar block
/// (independent vowel A, E-above, consonant extensions, tone marks, digits)
/// plus the whole extended-A block.
#[inline]
pub fn is_shan(ch: char) -> bool {
    matches!(ch as u32,
        0x1022 | 0x1035 | 0x1062 | 0x1064
        | 0x1067..=0x106D
        | 0x1075..=0x109F
        | 0xAA60..=0xAA7F)
}

/// Myanmar block membership (U+1000..U+109F). Shan is carved out first by
/// `classify`, so this answers "Burmese" there despite the shared block.
#[inline]
pub fn is_myanmar(ch: char) -> bool {
    matches!(ch as u32, 0x1000..=0x109F)
}

/// Base consonants and independent vowels: the principal series, the Shan
/// consonant series, and the extended-A series.
#[inline]
pub fn is_base_consonant(ch: char) -> bool {
    matches!(ch as u32, 0x1000..=0x102A | 0x1075..=0x1081 | 0xAA60..=0xAA7F)
}

/// The two pre-base vowel signs, one per script.
#[inline]
pub fn is_pre_base_vowel(ch: char) -> bool {
    ch == MYANMAR_E || ch == SHAN_E
}

/// Medial signs: Ya/Ra/Wa/Ha plus the Shan medial Wa.
#[inline]
pub fn is_medial(ch: char) -> bool {
    matches!(ch as u32, 0x103B..=0x103E | 0x1082)
}

/// Kill/stacking marks: the invisible stacker and the asat.
#[inline]
pub fn is_kill_mark(ch: char) -> bool {
    ch == STACKER || ch == ASAT
}

/// Codepoints a pre-base vowel can attach behind. A vowel whose preceding
/// codepoint is one of these is already in storage position and must not be
/// claimed by a later consonant.
#[inline]
pub fn is_vowel_base(ch: char) -> bool {
    is_base_consonant(ch) || is_medial(ch)
}

/// Fixed two-codepoint pairs that arrive in typing order but must be stored
/// swapped: vowel I typed after vowel U/UU, and vowel U typed after the
/// anusvara.
#[inline]
pub fn is_stack_swap(prev: char, next: char) -> bool {
    matches!((prev, next), (VOWEL_U | VOWEL_UU, VOWEL_I) | (ANUSVARA, VOWEL_U))
}

/// Lookback swaps against the committed tail: the stacked-vowel pairs, plus
/// a medial typed after an attached pre-base vowel (the medial belongs
/// between the base and the vowel in storage order).
#[inline]
pub fn is_tail_swap(prev: char, next: char) -> bool {
    is_stack_swap(prev, next) || (is_pre_base_vowel(prev) && is_medial(next))
}

/// Role of a codepoint. Context-free: the same codepoint always maps to the
/// same class.
pub fn role_of(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Whitespace
    } else if is_base_consonant(ch) {
        CharClass::BaseConsonant
    } else if is_pre_base_vowel(ch) {
        CharClass::PreBaseVowel
    } else if is_medial(ch) {
        CharClass::Medial
    } else if is_kill_mark(ch) {
        CharClass::KillMark
    } else {
        CharClass::OtherMark
    }
}

/// Role of a raw key code. Negative codes are layout sentinels (shift,
/// delete, language switch, ...) and classify as `Control`, as does any code
/// that is not a Unicode scalar value.
pub fn classify_key(code: i32) -> CharClass {
    if code < 0 {
        return CharClass::Control;
    }
    match char::from_u32(code as u32) {
        Some(ch) => role_of(ch),
        None => CharClass::Control,
    }
}
