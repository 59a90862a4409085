//! Per-session reordering engine.
//!
//! The phonetic layouts emit codepoints in visual order: the user presses
//! the pre-base vowel key first because that glyph sits left of the
//! consonant, but storage order mandates consonant first. `TypingSession`
//! owns the buffer for the word in progress and rewrites the tail as
//! keystrokes arrive, so the committed text is canonical at every step.
//!
//! Corrections never touch the platform directly. Every call returns an
//! [`Edit`] instruction (delete N codepoints from the tail, then insert);
//! a thin adapter applies it to the live text sink. The buffer and the sink
//! therefore stay bit-identical, which the correction rules rely on.

use crate::normalize::normalize;
use crate::script::{is_tail_swap, is_vowel_base, role_of, CharClass, PLACEHOLDER};
use crate::word_buffer::WordBuffer;

/// One atomic correction against the text sink: remove `delete` codepoints
/// from the end, then insert `insert`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Edit {
    pub delete: usize,
    pub insert: String,
}

impl Edit {
    /// An edit that changes nothing.
    pub fn none() -> Self {
        Self::default()
    }

    fn insert_char(ch: char) -> Self {
        Self {
            delete: 0,
            insert: ch.to_string(),
        }
    }

    fn insert_str(s: impl Into<String>) -> Self {
        Self {
            delete: 0,
            insert: s.into(),
        }
    }

    /// Whether applying this edit would leave the sink unchanged.
    pub fn is_noop(&self) -> bool {
        self.delete == 0 && self.insert.is_empty()
    }

    /// Compose with an edit applied immediately after this one, yielding a
    /// single equivalent instruction. A later delete first consumes this
    /// edit's own insertion before reaching further into the sink tail.
    pub fn then(self, next: Edit) -> Edit {
        let mut insert: Vec<char> = self.insert.chars().collect();
        let overlap = next.delete.min(insert.len());
        insert.truncate(insert.len() - overlap);
        insert.extend(next.insert.chars());
        Edit {
            delete: self.delete + (next.delete - overlap),
            insert: insert.into_iter().collect(),
        }
    }
}

/// Result of feeding one codepoint (or one key label) to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendOutcome {
    /// Instruction for the platform text sink.
    pub edit: Edit,
    /// The finished word, normalized, when this keystroke closed one.
    pub flushed: Option<String>,
}

impl AppendOutcome {
    fn edit_only(edit: Edit) -> Self {
        Self {
            edit,
            flushed: None,
        }
    }
}

/// Word punctuation ends the word in progress just like whitespace. Section
/// marks are the scripts' own sentence punctuation.
fn is_boundary_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation() || ch == '\u{104A}' || ch == '\u{104B}'
}

/// Stateful reordering engine, one instance per active typing session.
///
/// State is the word buffer plus one flag: whether a pre-base vowel is
/// sitting at the tail behind its display placeholder, still waiting for a
/// base. The flag is true exactly when the buffer tail is the transient
/// `[placeholder, vowel]` pair.
#[derive(Debug, Clone, Default)]
pub struct TypingSession {
    buffer: WordBuffer,
    pending_vowel: bool,
}

impl TypingSession {
    /// Create a session with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The buffer for the word in progress.
    pub fn buffer(&self) -> &WordBuffer {
        &self.buffer
    }

    /// Whether a pre-base vowel is waiting for its base consonant.
    pub fn pending_vowel(&self) -> bool {
        self.pending_vowel
    }

    /// The word in progress without placeholder markers, for suggestion
    /// prefixes and display.
    pub fn visible_word(&self) -> String {
        self.buffer.visible_string()
    }

    /// Feed one keystroke codepoint through the correction rules.
    ///
    /// Whitespace and word punctuation flush the word in progress and then
    /// insert themselves unchanged. Everything else is appended under the
    /// reordering rules; input that matches no rule passes straight through,
    /// so no codepoint is ever rejected.
    pub fn append_codepoint(&mut self, ch: char) -> AppendOutcome {
        // The placeholder is an internal marker, never a real keystroke.
        if ch == PLACEHOLDER {
            return AppendOutcome::edit_only(Edit::none());
        }

        let role = role_of(ch);

        if role == CharClass::Whitespace || is_boundary_punctuation(ch) {
            let flushed = self.flush();
            return AppendOutcome {
                edit: Edit::insert_char(ch),
                flushed,
            };
        }

        let attached = matches!(self.buffer.last(), Some(prev) if is_vowel_base(prev));

        if role == CharClass::PreBaseVowel && !attached {
            // Visual-order vowel: show it behind a placeholder and wait for
            // the base. A vowel typed directly after a base or medial is
            // already in storage order and takes the plain path below.
            self.buffer.push(PLACEHOLDER);
            self.buffer.push(ch);
            self.pending_vowel = true;
            let mut s = String::with_capacity(PLACEHOLDER.len_utf8() + ch.len_utf8());
            s.push(PLACEHOLDER);
            s.push(ch);
            return AppendOutcome::edit_only(Edit::insert_str(s));
        }

        if self.pending_vowel
            && matches!(role, CharClass::BaseConsonant | CharClass::Medial)
        {
            // The base arrived: replace [placeholder, vowel] with
            // [base, vowel] in one atomic delete-and-retype.
            let vowel = match self.buffer.pop() {
                Some(v) => v,
                None => ch, // unreachable while the flag invariant holds
            };
            self.buffer.pop(); // placeholder
            self.buffer.push(ch);
            self.buffer.push(vowel);
            self.pending_vowel = false;
            let mut s = String::with_capacity(ch.len_utf8() + vowel.len_utf8());
            s.push(ch);
            s.push(vowel);
            return AppendOutcome::edit_only(Edit { delete: 2, insert: s });
        }

        if let Some(prev) = self.buffer.last() {
            if is_tail_swap(prev, ch) {
                // Stacked vowel pair typed in the wrong order, or a medial
                // arriving after an attached pre-base vowel: retype both in
                // storage order.
                self.buffer.pop();
                self.buffer.push(ch);
                self.buffer.push(prev);
                self.pending_vowel = false;
                let mut s = String::with_capacity(ch.len_utf8() + prev.len_utf8());
                s.push(ch);
                s.push(prev);
                return AppendOutcome::edit_only(Edit { delete: 1, insert: s });
            }
        }

        self.buffer.push(ch);
        self.pending_vowel = false;
        AppendOutcome::edit_only(Edit::insert_char(ch))
    }

    /// Commit a key label codepoint by codepoint, folding the individual
    /// corrections into one instruction. Layout keys that carry a composed
    /// label (a whole syllable on one key) go through here.
    pub fn commit_label(&mut self, label: &str) -> AppendOutcome {
        let mut edit = Edit::none();
        let mut flushed = None;
        for ch in label.chars() {
            let out = self.append_codepoint(ch);
            edit = edit.then(out.edit);
            if out.flushed.is_some() {
                flushed = out.flushed;
            }
        }
        AppendOutcome { edit, flushed }
    }

    /// Delete one codepoint before the cursor.
    ///
    /// With an empty buffer the deletion still goes to the sink (the cursor
    /// may sit after earlier committed text). Inside a word, removing the
    /// vowel of the transient pair also removes its placeholder so the sink
    /// never ends on a bare marker; backspacing the word away entirely
    /// resets the session.
    pub fn backspace(&mut self) -> Edit {
        if self.buffer.is_empty() {
            self.pending_vowel = false;
            return Edit {
                delete: 1,
                insert: String::new(),
            };
        }

        let mut delete = 1;
        self.buffer.pop();
        if self.buffer.last() == Some(PLACEHOLDER) {
            self.buffer.pop();
            delete = 2;
        }
        self.pending_vowel = match self.buffer.last() {
            Some(v) => {
                role_of(v) == CharClass::PreBaseVowel && self.buffer.tail_is_placeholder_pair(v)
            }
            None => false,
        };
        Edit {
            delete,
            insert: String::new(),
        }
    }

    /// Finish the word in progress: normalize it once, clear the session,
    /// and hand the word back for the persistence collaborator. Returns
    /// `None` when nothing was buffered.
    pub fn flush(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            self.pending_vowel = false;
            return None;
        }
        let word = normalize(&self.buffer.as_string());
        self.buffer.clear();
        self.pending_vowel = false;
        if word.is_empty() {
            None
        } else {
            Some(word)
        }
    }

    /// Drop all state without producing a word. Safe at any point.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.pending_vowel = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{MYANMAR_E, SHAN_E, VOWEL_I, VOWEL_U};

    fn apply(sink: &mut String, edit: &Edit) {
        for _ in 0..edit.delete {
            sink.pop();
        }
        sink.push_str(&edit.insert);
    }

    #[test]
    fn vowel_then_consonant_reorders() {
        let mut s = TypingSession::new();
        let mut sink = String::new();

        let out = s.append_codepoint(MYANMAR_E);
        apply(&mut sink, &out.edit);
        assert!(s.pending_vowel());
        assert_eq!(sink, "\u{200B}\u{1031}");

        let out = s.append_codepoint('\u{1000}');
        apply(&mut sink, &out.edit);
        assert!(!s.pending_vowel());
        assert_eq!(out.edit.delete, 2);
        assert_eq!(sink, "\u{1000}\u{1031}");
        assert_eq!(s.buffer().as_string(), sink);
    }

    #[test]
    fn medial_also_claims_the_pending_vowel() {
        let mut s = TypingSession::new();
        s.append_codepoint(SHAN_E);
        let out = s.append_codepoint('\u{103C}');
        assert_eq!(out.edit.delete, 2);
        assert_eq!(out.edit.insert, "\u{103C}\u{1084}");
        assert_eq!(s.buffer().as_string(), "\u{103C}\u{1084}");
    }

    #[test]
    fn stacked_vowels_swap_on_single_lookback() {
        let mut s = TypingSession::new();
        s.append_codepoint('\u{1000}');
        s.append_codepoint(VOWEL_U);
        let out = s.append_codepoint(VOWEL_I);
        assert_eq!(out.edit.delete, 1);
        assert_eq!(out.edit.insert, "\u{102D}\u{102F}");
        assert_eq!(s.buffer().as_string(), "\u{1000}\u{102D}\u{102F}");
    }

    #[test]
    fn vowel_after_base_needs_no_placeholder() {
        let mut s = TypingSession::new();
        s.append_codepoint('\u{1000}');
        let out = s.append_codepoint(MYANMAR_E);
        assert_eq!(out.edit, Edit::insert_char(MYANMAR_E));
        assert!(!s.pending_vowel());
        assert_eq!(s.buffer().as_string(), "\u{1000}\u{1031}");

        // The next consonant starts a fresh syllable, no stealing.
        let out = s.append_codepoint('\u{1001}');
        assert_eq!(out.edit, Edit::insert_char('\u{1001}'));
        assert_eq!(s.buffer().as_string(), "\u{1000}\u{1031}\u{1001}");
    }

    #[test]
    fn medial_after_attached_vowel_swaps_behind_it() {
        let mut s = TypingSession::new();
        s.append_codepoint('\u{1000}');
        s.append_codepoint(MYANMAR_E);
        let out = s.append_codepoint('\u{103C}');
        assert_eq!(out.edit.delete, 1);
        assert_eq!(out.edit.insert, "\u{103C}\u{1031}");
        assert_eq!(s.buffer().as_string(), "\u{1000}\u{103C}\u{1031}");
    }

    #[test]
    fn whitespace_flushes_and_inserts_itself() {
        let mut s = TypingSession::new();
        s.append_codepoint(MYANMAR_E);
        s.append_codepoint('\u{1001}');
        let out = s.append_codepoint(' ');
        assert_eq!(out.edit, Edit::insert_char(' '));
        assert_eq!(out.flushed.as_deref(), Some("\u{1001}\u{1031}"));
        assert!(s.buffer().is_empty());
        assert!(!s.pending_vowel());

        // Fresh word afterwards: single codepoint, no pending flag.
        let out = s.append_codepoint('\u{1002}');
        assert_eq!(out.edit, Edit::insert_char('\u{1002}'));
        assert_eq!(s.buffer().chars(), &['\u{1002}']);
        assert!(!s.pending_vowel());
    }

    #[test]
    fn backspace_removes_dangling_placeholder() {
        let mut s = TypingSession::new();
        s.append_codepoint(MYANMAR_E);
        let edit = s.backspace();
        assert_eq!(edit.delete, 2);
        assert!(s.buffer().is_empty());
        assert!(!s.pending_vowel());

        // Empty buffer still forwards a one-codepoint delete to the sink.
        let edit = s.backspace();
        assert_eq!(edit.delete, 1);
    }

    #[test]
    fn label_commit_folds_edits() {
        let mut s = TypingSession::new();
        s.append_codepoint(MYANMAR_E);
        // Label "ka + aa": the leading consonant claims the pending vowel.
        let out = s.commit_label("\u{1000}\u{102C}");
        assert_eq!(out.edit.delete, 2);
        assert_eq!(out.edit.insert, "\u{1000}\u{1031}\u{102C}");
        assert_eq!(s.buffer().as_string(), "\u{1000}\u{1031}\u{102C}");
    }

    #[test]
    fn placeholder_input_is_ignored() {
        let mut s = TypingSession::new();
        let out = s.append_codepoint(PLACEHOLDER);
        assert!(out.edit.is_noop());
        assert!(s.buffer().is_empty());
    }

    #[test]
    fn edit_composition_absorbs_later_deletes() {
        let first = Edit {
            delete: 0,
            insert: "\u{200B}\u{1031}".into(),
        };
        let second = Edit {
            delete: 2,
            insert: "\u{1000}\u{1031}".into(),
        };
        assert_eq!(
            first.then(second),
            Edit {
                delete: 0,
                insert: "\u{1000}\u{1031}".into()
            }
        );

        let free_delete = Edit {
            delete: 1,
            insert: String::new(),
        };
        assert_eq!(
            Edit::none().then(free_delete.clone()),
            free_delete
        );
    }
}
