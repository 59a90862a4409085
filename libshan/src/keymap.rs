//! Key codes and layout sentinels.
//!
//! The layouts encode every non-character key as a negative code. Character
//! keys carry the codepoint itself, plus an optional composed label when one
//! key commits a whole sequence.

/// Non-character control keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKey {
    Shift,
    SymbolsOn,
    Enter,
    Delete,
    SymbolsOff,
    Voice,
    LanguageSwitch,
}

impl ControlKey {
    /// Map a layout sentinel to its control key. Unknown sentinels (layout
    /// padding like -100) map to nothing and the keyboard ignores them.
    pub fn from_code(code: i32) -> Option<ControlKey> {
        match code {
            -1 => Some(ControlKey::Shift),
            -2 => Some(ControlKey::SymbolsOn),
            -4 => Some(ControlKey::Enter),
            -5 => Some(ControlKey::Delete),
            -6 => Some(ControlKey::SymbolsOff),
            -10 => Some(ControlKey::Voice),
            -101 => Some(ControlKey::LanguageSwitch),
            _ => None,
        }
    }

    /// The sentinel the layouts use for this key.
    pub fn code(self) -> i32 {
        match self {
            ControlKey::Shift => -1,
            ControlKey::SymbolsOn => -2,
            ControlKey::Enter => -4,
            ControlKey::Delete => -5,
            ControlKey::SymbolsOff => -6,
            ControlKey::Voice => -10,
            ControlKey::LanguageSwitch => -101,
        }
    }
}

/// One key press as delivered by a layout: the raw code and the label
/// printed on the key cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    pub code: i32,
    pub label: String,
}

impl Key {
    /// A plain character key.
    pub fn character(ch: char) -> Self {
        Self {
            code: ch as i32,
            label: ch.to_string(),
        }
    }

    /// A key whose label commits more codepoints than its primary code (a
    /// whole syllable printed on one cap).
    pub fn labeled(code: i32, label: impl Into<String>) -> Self {
        Self {
            code,
            label: label.into(),
        }
    }

    /// A control key press.
    pub fn control(key: ControlKey) -> Self {
        Self {
            code: key.code(),
            label: String::new(),
        }
    }
}
