//! libshan crate root
//!
//! This crate provides the Shan keyboard frontend: raw key handling, the
//! pronunciation table and the keyboard configuration, composed over the
//! shared `libmyanmar-core` reordering and suggestion types.
//!
//! Public API exported here:
//! - `ShanKeyboard`, `KeyReply` and `UiAction` from `keyboard`
//! - `Key` and `ControlKey` from `keymap`
//! - `PhoneticTable` from `phonetic`
//! - `ShanConfig` from `config`

// Re-export the keyboard-specific modules.
pub mod config;
pub mod keyboard;
pub mod keymap;
pub mod phonetic;

// Re-export text-processing components from core.
pub use libmyanmar_core::{
    normalize, segment, strip_placeholders, AppendOutcome, Config, Dispatcher, Edit, RunSink,
    Script, Suggester, Suggestion, TextRun, TypingSession, WordStore, Wordlist,
};

// Convenience re-exports for common types used by callers.
pub use config::ShanConfig;
pub use keyboard::{KeyReply, ShanKeyboard, UiAction};
pub use keymap::{ControlKey, Key};
pub use phonetic::PhoneticTable;
