//! Cursor-relative syllable and word extraction.
//!
//! The speak-as-you-type echo reads back the syllable or word that was just
//! completed. Both helpers take the text before the cursor and scan
//! backward; neither allocates until the boundary is found.

use crate::script::{role_of, CharClass, PLACEHOLDER, STACKER};

/// The last syllable before the cursor.
///
/// Scans backward for the syllable-initial consonant. A kill or stacking
/// mark flags the consonant found next (backward) as a final or stacked
/// consonant rather than a syllable start, and a consonant sitting directly
/// after the stacking mark is part of the cluster, so a stacked pair like
/// KA U+1039 KHA never splits. The nearest whitespace bounds the scan when
/// it is closer to the cursor. Display placeholders are dropped from the
/// result.
pub fn syllable_before(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut start = 0;

    let mut pending_stack = false;
    for i in (0..chars.len()).rev() {
        match role_of(chars[i]) {
            CharClass::Whitespace => {
                start = i + 1;
                break;
            }
            CharClass::KillMark => {
                pending_stack = true;
            }
            CharClass::BaseConsonant => {
                if pending_stack {
                    pending_stack = false;
                    continue;
                }
                if i > 0 && chars[i - 1] == STACKER {
                    continue;
                }
                start = i;
                break;
            }
            _ => {}
        }
    }

    chars[start..]
        .iter()
        .filter(|&&c| c != PLACEHOLDER)
        .collect()
}

/// The last whitespace-delimited word before the cursor, placeholders
/// removed. Trailing whitespace (the separator that just ended the word) is
/// ignored, so the call right after a space still sees the finished word.
pub fn word_before(text: &str) -> String {
    let tail = text.split_whitespace().last().unwrap_or("");
    tail.chars().filter(|&c| c != PLACEHOLDER).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacked_cluster_is_one_syllable() {
        let text = "hello \u{1000}\u{1039}\u{1001}\u{102C}";
        assert_eq!(syllable_before(text), "\u{1000}\u{1039}\u{1001}\u{102C}");
    }

    #[test]
    fn killed_final_stays_with_its_syllable() {
        // "auk": the asat-killed final consonant is not a syllable start.
        let text = "\u{1005}\u{102C}\u{1021}\u{1031}\u{102C}\u{1000}\u{103A}";
        assert_eq!(
            syllable_before(text),
            "\u{1021}\u{1031}\u{102C}\u{1000}\u{103A}"
        );
    }

    #[test]
    fn syllable_starts_at_the_last_bare_consonant() {
        let text = "\u{1000}\u{102C}\u{1001}\u{1031}\u{102C}";
        assert_eq!(syllable_before(text), "\u{1001}\u{1031}\u{102C}");
    }

    #[test]
    fn medial_onset_is_included() {
        let text = "\u{1000}\u{103C}\u{1031}\u{102C}\u{1004}\u{103A}";
        assert_eq!(
            syllable_before(text),
            "\u{1000}\u{103C}\u{1031}\u{102C}\u{1004}\u{103A}"
        );
    }

    #[test]
    fn placeholders_never_reach_the_caller() {
        let text = "\u{1000}\u{200B}\u{1031}";
        assert_eq!(syllable_before(text), "\u{1000}\u{1031}");
        assert_eq!(word_before(text), "\u{1000}\u{1031}");
    }

    #[test]
    fn word_before_skips_the_trailing_separator() {
        assert_eq!(word_before("hello \u{1000}\u{102C} "), "\u{1000}\u{102C}");
        assert_eq!(word_before("hello"), "hello");
        assert_eq!(word_before("   "), "");
        assert_eq!(word_before(""), "");
        // Separators wider than one byte must not split a codepoint.
        assert_eq!(word_before("a\u{00A0}\u{1000}"), "\u{1000}");
    }

    #[test]
    fn empty_text_yields_empty_syllable() {
        assert_eq!(syllable_before(""), "");
        assert_eq!(syllable_before("abc"), "abc");
    }
}
