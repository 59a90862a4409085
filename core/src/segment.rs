//! Script-run segmentation for mixed text.
//!
//! Text-to-speech and clipboard handling both need mixed Shan, Burmese and
//! Latin text cut into runs that a per-script voice can consume one at a
//! time. The splitter tags each run with the [`Script`] of its codepoints;
//! whitespace never opens or closes a run on its own, it simply travels with
//! whichever run is open.

use serde::{Deserialize, Serialize};

use crate::script::{classify, role_of, CharClass, Script};

/// One maximal same-script stretch of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub tag: Script,
}

impl TextRun {
    pub fn new(text: impl Into<String>, tag: Script) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

/// Split `text` into ordered script runs.
///
/// Whitespace is appended to the open run without touching its tag; a run
/// that has seen only whitespace so far takes its tag from the first
/// non-whitespace codepoint. A codepoint of a different script closes the
/// open run and seeds the next one. Concatenating the returned runs always
/// reproduces the input exactly; a run that never receives a tag (input of
/// pure whitespace) is reported as English.
pub fn segment(text: &str) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut open = String::new();
    let mut tag: Option<Script> = None;

    for ch in text.chars() {
        if role_of(ch) == CharClass::Whitespace {
            open.push(ch);
            continue;
        }
        let script = classify(ch);
        if let Some(current) = tag {
            if current != script {
                runs.push(TextRun::new(std::mem::take(&mut open), current));
            }
        }
        open.push(ch);
        tag = Some(script);
    }

    if !open.is_empty() {
        runs.push(TextRun::new(open, tag.unwrap_or(Script::English)));
    }
    runs
}
