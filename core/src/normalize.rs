//! Batch canonical-order pass for arbitrary text.
//!
//! Pasted or stored text arrives with the same visual-order artifacts that
//! live keystrokes have: pre-base vowels written before their base, stacked
//! vowel pairs in typing order, leftover display placeholders. `normalize`
//! applies the session's correction rules in one left-to-right pass, so a
//! codepoint stream produces the same text whether it is typed through a
//! [`TypingSession`](crate::TypingSession) or normalized in one shot.
//!
//! A pre-base vowel already sitting behind a base consonant or medial is in
//! storage order and is left alone; only a vowel with no base to its left
//! claims the codepoint that follows it. Without that distinction a second
//! pass would tear the vowel of one syllable off and hand it to the next
//! syllable's consonant.
//!
//! This is not Unicode normalization; NFC/NFD composition is untouched and
//! text in other scripts passes through unchanged.

use crate::script::{
    is_base_consonant, is_medial, is_pre_base_vowel, is_tail_swap, is_vowel_base, PLACEHOLDER,
};

/// Remove the transient display placeholders without reordering anything.
pub fn strip_placeholders(s: &str) -> String {
    s.chars().filter(|&c| c != PLACEHOLDER).collect()
}

/// Rewrite `s` into canonical storage order.
///
/// Placeholders are dropped first. Then, in a single pass: a pre-base vowel
/// with no base to its left swaps behind an immediately following base
/// consonant or medial (both codepoints consumed, mirroring the live
/// reordering of a vowel waiting for its base), and the tail-swap pairs swap
/// against the previously emitted codepoint. Unrecognized codepoints pass
/// through, so the function is total, and on text free of orphaned vowel
/// runs `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(s: &str) -> String {
    let chars: Vec<char> = s.chars().filter(|&c| c != PLACEHOLDER).collect();
    let mut out: Vec<char> = Vec::with_capacity(chars.len());

    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        let attached = matches!(out.last(), Some(&prev) if is_vowel_base(prev));

        if is_pre_base_vowel(ch) && !attached {
            if let Some(&next) = chars.get(i + 1) {
                if is_base_consonant(next) || is_medial(next) {
                    out.push(next);
                    out.push(ch);
                    i += 2;
                    continue;
                }
            }
        }

        if let Some(&prev) = out.last() {
            if is_tail_swap(prev, ch) {
                out.pop();
                out.push(ch);
                out.push(prev);
                i += 1;
                continue;
            }
        }

        out.push(ch);
        i += 1;
    }

    out.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_placeholders_everywhere() {
        assert_eq!(
            strip_placeholders("\u{200B}\u{1031}a\u{200B}"),
            "\u{1031}a"
        );
        assert_eq!(normalize("\u{200B}\u{200B}"), "");
    }

    #[test]
    fn pre_base_vowel_moves_behind_its_base() {
        assert_eq!(normalize("\u{1031}\u{1000}"), "\u{1000}\u{1031}");
        assert_eq!(normalize("\u{1084}\u{1075}"), "\u{1075}\u{1084}");
        // Medials count as a base too.
        assert_eq!(normalize("\u{1031}\u{103B}"), "\u{103B}\u{1031}");
    }

    #[test]
    fn stacked_vowel_pairs_swap() {
        assert_eq!(normalize("\u{102F}\u{102D}"), "\u{102D}\u{102F}");
        assert_eq!(normalize("\u{1030}\u{102D}"), "\u{102D}\u{1030}");
        assert_eq!(normalize("\u{1036}\u{102F}"), "\u{102F}\u{1036}");
        assert_eq!(
            normalize("\u{1000}\u{102F}\u{102D}"),
            "\u{1000}\u{102D}\u{102F}"
        );
    }

    #[test]
    fn attached_vowel_keeps_its_base() {
        // The vowel already follows a consonant, so the consonant after it
        // starts a fresh syllable instead of stealing the vowel.
        assert_eq!(
            normalize("\u{1000}\u{1031}\u{1001}"),
            "\u{1000}\u{1031}\u{1001}"
        );
    }

    #[test]
    fn two_visual_syllables_normalize_independently() {
        // "e k e kh" typed twice in visual order is two stored syllables.
        assert_eq!(
            normalize("\u{1084}\u{1075}\u{1084}\u{1076}"),
            "\u{1075}\u{1084}\u{1076}\u{1084}"
        );
    }

    #[test]
    fn medial_slides_between_base_and_attached_vowel() {
        assert_eq!(
            normalize("\u{1000}\u{1031}\u{103C}"),
            "\u{1000}\u{103C}\u{1031}"
        );
    }

    #[test]
    fn trailing_vowel_stays_put() {
        assert_eq!(normalize("\u{1000}\u{1031}"), "\u{1000}\u{1031}");
        assert_eq!(normalize("\u{1031}"), "\u{1031}");
    }

    #[test]
    fn idempotent_on_mixed_text() {
        let samples = [
            "hello world",
            "\u{1031}\u{1000}\u{102C} tea",
            "\u{1084}\u{1075}\u{1084}\u{1076}",
            "\u{1000}\u{1031}\u{1001}\u{1031}",
            "\u{1000}\u{1039}\u{1001}\u{102C}",
            "\u{1036}\u{102F}\u{102F}",
            "\u{1000}\u{1031}\u{103C}",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn other_scripts_pass_through() {
        assert_eq!(normalize("abc DEF!"), "abc DEF!");
        assert_eq!(normalize("中文"), "中文");
    }
}
