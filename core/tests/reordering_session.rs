// core/tests/reordering_session.rs
//
// End-to-end typing flows through TypingSession, applying every returned
// Edit to a plain String standing in for the platform text sink.
//
// Tests cover:
// - The sink and the session buffer staying bit-identical at every keystroke
// - Visual-order vowel input producing canonical committed text
// - Flush on whitespace and word punctuation
// - Backspace across the transient placeholder pair
// - Label commits folding multiple corrections into one edit

use libmyanmar_core::{Edit, TypingSession};

/// Apply one edit instruction the way the platform adapter would: pop
/// `delete` codepoints off the end, then append the insertion.
fn apply(sink: &mut String, edit: &Edit) {
    for _ in 0..edit.delete {
        sink.pop();
    }
    sink.push_str(&edit.insert);
}

/// Feed a string one codepoint at a time, checking the lockstep invariant
/// after every keystroke. Returns the final sink contents.
fn type_string(session: &mut TypingSession, sink: &mut String, text: &str) {
    for ch in text.chars() {
        let out = session.append_codepoint(ch);
        apply(sink, &out.edit);
        let tail_len = session.buffer().len();
        let sink_tail: String = sink
            .chars()
            .skip(sink.chars().count() - tail_len)
            .collect();
        assert_eq!(
            sink_tail,
            session.buffer().as_string(),
            "sink tail diverged from buffer after {:?}",
            ch
        );
    }
}

#[test]
fn test_sink_tracks_buffer_through_mixed_input() {
    let sequences = [
        "\u{1031}\u{1000}",
        "\u{1031}\u{1000}\u{102C}",
        "\u{1084}\u{103C}\u{1075}",
        "\u{1000}\u{102F}\u{102D}",
        "\u{1000}\u{1036}\u{102F}",
        "\u{1031}\u{1019}\u{103C}",
        "\u{1000}\u{1031}\u{103C}",
        "abc\u{1031}\u{1000}d",
    ];
    for seq in sequences {
        let mut session = TypingSession::new();
        let mut sink = String::new();
        type_string(&mut session, &mut sink, seq);
    }
}

#[test]
fn test_visual_order_word_commits_canonically() {
    let mut session = TypingSession::new();
    let mut sink = String::new();

    // User types e, then ka, then aa: stored as ka, e, aa.
    type_string(&mut session, &mut sink, "\u{1031}\u{1000}\u{102C}");
    assert_eq!(sink, "\u{1000}\u{1031}\u{102C}");
}

#[test]
fn test_two_syllable_word_round_trip() {
    let mut session = TypingSession::new();
    let mut sink = String::new();

    // Two syllables typed in visual order; each vowel binds to its own base.
    type_string(&mut session, &mut sink, "\u{1031}\u{1000}\u{1031}\u{1001}");
    assert_eq!(sink, "\u{1000}\u{1031}\u{1001}\u{1031}");
}

#[test]
fn test_space_flushes_the_normalized_word() {
    let mut session = TypingSession::new();
    let mut sink = String::new();

    type_string(&mut session, &mut sink, "\u{1031}\u{1000}\u{102C}");
    let out = session.append_codepoint(' ');
    apply(&mut sink, &out.edit);

    assert_eq!(out.flushed.as_deref(), Some("\u{1000}\u{1031}\u{102C}"));
    assert_eq!(sink, "\u{1000}\u{1031}\u{102C} ");
    assert!(session.buffer().is_empty());
}

#[test]
fn test_section_mark_flushes_like_whitespace() {
    let mut session = TypingSession::new();
    let mut sink = String::new();

    type_string(&mut session, &mut sink, "\u{1031}\u{1000}");
    let out = session.append_codepoint('\u{104B}');
    apply(&mut sink, &out.edit);

    assert_eq!(out.flushed.as_deref(), Some("\u{1000}\u{1031}"));
    assert_eq!(sink, "\u{1000}\u{1031}\u{104B}");

    // ASCII punctuation closes a word the same way.
    let mut session = TypingSession::new();
    session.append_codepoint('\u{1000}');
    let out = session.append_codepoint('.');
    assert_eq!(out.flushed.as_deref(), Some("\u{1000}"));
}

#[test]
fn test_backspace_removes_the_whole_transient_pair() {
    let mut session = TypingSession::new();
    let mut sink = String::new();

    let out = session.append_codepoint('\u{1031}');
    apply(&mut sink, &out.edit);
    assert_eq!(sink.chars().count(), 2); // placeholder + vowel

    let edit = session.backspace();
    apply(&mut sink, &edit);
    assert_eq!(edit.delete, 2);
    assert!(sink.is_empty());
    assert!(session.buffer().is_empty());
    assert!(!session.pending_vowel());
}

#[test]
fn test_backspace_reexposes_a_pending_vowel() {
    let mut session = TypingSession::new();
    let mut sink = String::new();

    // Pending vowel, then a claiming consonant.
    type_string(&mut session, &mut sink, "\u{1031}\u{1031}\u{1000}");
    assert!(!session.pending_vowel());

    // Deleting the vowel then the consonant uncovers the earlier transient
    // pair, so the pending flag comes back.
    let edit = session.backspace();
    apply(&mut sink, &edit);
    assert_eq!(edit.delete, 1);
    assert!(!session.pending_vowel());

    let edit = session.backspace();
    apply(&mut sink, &edit);
    assert_eq!(edit.delete, 1);
    assert!(session.pending_vowel());

    // A consonant typed now claims the re-exposed vowel.
    let out = session.append_codepoint('\u{1001}');
    apply(&mut sink, &out.edit);
    assert_eq!(out.edit.delete, 2);
    assert_eq!(sink, "\u{1001}\u{1031}");
}

#[test]
fn test_backspace_on_empty_buffer_still_deletes_committed_text() {
    let mut session = TypingSession::new();
    let mut sink = String::from("\u{1000}\u{1031} ");

    // The word before the cursor was already flushed; the session buffer is
    // empty but the keystroke must still reach the sink.
    let edit = session.backspace();
    apply(&mut sink, &edit);
    assert_eq!(edit.delete, 1);
    assert_eq!(sink, "\u{1000}\u{1031}");
}

#[test]
fn test_label_commit_is_one_edit() {
    let mut session = TypingSession::new();
    let mut sink = String::new();

    let out = session.append_codepoint('\u{1031}');
    apply(&mut sink, &out.edit);

    // A composed key label: leading consonant claims the pending vowel, the
    // rest appends, all folded into a single instruction.
    let out = session.commit_label("\u{1000}\u{103A}");
    apply(&mut sink, &out.edit);
    assert_eq!(out.edit.delete, 2);
    assert_eq!(sink, "\u{1000}\u{1031}\u{103A}");
    assert_eq!(session.buffer().as_string(), sink);
}

#[test]
fn test_reset_discards_the_word_in_progress() {
    let mut session = TypingSession::new();
    session.append_codepoint('\u{1031}');
    session.append_codepoint('\u{1000}');

    session.reset();
    assert!(session.buffer().is_empty());
    assert!(!session.pending_vowel());
    assert_eq!(session.flush(), None);
}

#[test]
fn test_visible_word_hides_the_placeholder() {
    let mut session = TypingSession::new();
    session.append_codepoint('\u{1031}');
    assert_eq!(session.visible_word(), "\u{1031}");
    session.append_codepoint('\u{1000}');
    assert_eq!(session.visible_word(), "\u{1000}\u{1031}");
}
