//! Per-key pronunciation lookup.
//!
//! The speech feedback layer wants a spoken name for each key, not the bare
//! glyph: the letter U+1000 is announced as its alphabet name, not as a lone
//! consonant sound. The mapping is a line-oriented `code=text` resource with
//! decimal key codes; a missing or unreadable file degrades to the built-in
//! table, and an unmapped code falls back to the character itself.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::warn;

/// Alphabet names bundled with the keyboard, keyed by decimal key code.
static BUILT_IN: Lazy<HashMap<i32, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Burmese letter names.
    m.insert(0x1000, "\u{1000}\u{1000}\u{103C}\u{102E}\u{1038}");
    m.insert(0x1001, "\u{1001}\u{1001}\u{103D}\u{1031}\u{1038}");
    m.insert(0x1002, "\u{1002}\u{1004}\u{101A}\u{103A}");
    m.insert(0x1004, "\u{1004}");

    // The pre-base vowel is announced by its sign name.
    m.insert(0x1031, "\u{101E}\u{101D}\u{1031}\u{1011}\u{102D}\u{102F}\u{1038}");

    m
});

/// Key-code to pronunciation table.
#[derive(Debug, Clone, Default)]
pub struct PhoneticTable {
    map: HashMap<i32, String>,
}

impl PhoneticTable {
    /// An empty table; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table bundled with the keyboard.
    pub fn built_in() -> Self {
        let map = BUILT_IN
            .iter()
            .map(|(&code, &text)| (code, text.to_string()))
            .collect();
        Self { map }
    }

    /// Load a mapping file, one `code=text` entry per line. Malformed lines
    /// are skipped; a missing or unreadable file yields the built-in table.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => Self::parse(&content),
            Err(err) => {
                warn!(path = %path.as_ref().display(), %err, "pronunciation mapping not loaded");
                Self::built_in()
            }
        }
    }

    /// Parse mapping lines. Each entry is `decimal_code=spoken_text`; lines
    /// that do not split into exactly those two parts, or whose code is not
    /// an integer, are skipped.
    pub fn parse(content: &str) -> Self {
        let mut map = HashMap::new();
        for line in content.lines() {
            let Some((code, text)) = line.split_once('=') else {
                continue;
            };
            let Ok(code) = code.trim().parse::<i32>() else {
                continue;
            };
            let text = text.trim();
            if !text.is_empty() {
                map.insert(code, text.to_string());
            }
        }
        Self { map }
    }

    /// The mapped pronunciation, if the table has one.
    pub fn lookup(&self, code: i32) -> Option<&str> {
        self.map.get(&code).map(String::as_str)
    }

    /// What to speak for a key press: the mapped pronunciation, or the key's
    /// own character when unmapped. Codes that are no character at all yield
    /// nothing.
    pub fn announce(&self, code: i32) -> Option<String> {
        if let Some(text) = self.lookup(code) {
            return Some(text.to_string());
        }
        if code < 0 {
            return None;
        }
        char::from_u32(code as u32).map(|ch| ch.to_string())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
