//! libmyanmar-core
//!
//! Canonical-order typing, script classification, run segmentation and the
//! suggestion stack shared by the Myanmar/Shan keyboard crates.
//!
//! Keystrokes arrive in visual order (pre-base vowels first); storage wants
//! logical order. This crate owns that rewriting, plus the pieces built on
//! top of canonical text: the learned word store, the shipped wordlist, the
//! suggestion ranking, and per-script run delivery for speech.
//!
//! Public API:
//! - `TypingSession` / `Edit` - incremental reordering, one instance per session
//! - `normalize` - the same rules as a batch pass over whole strings
//! - `Script` / `CharClass` - codepoint classification tables
//! - `TextRun` / `segment` - mixed-script run segmentation
//! - `syllable_before` / `word_before` - cursor-relative boundary extraction
//! - `WordStore` - persistent learned-word frequencies (redb or in-memory)
//! - `Wordlist` - static fst + bincode base dictionary
//! - `Suggester` - merged, cached prefix suggestions
//! - `Dispatcher` / `RunSink` - cooperative per-run speech delivery
//! - `Config` - shared tuning knobs
use serde::{Deserialize, Serialize};

pub mod script;
pub use script::{classify, classify_key, role_of, CharClass, Script};

pub mod word_buffer;
pub use word_buffer::WordBuffer;

pub mod session;
pub use session::{AppendOutcome, Edit, TypingSession};

pub mod normalize;
pub use normalize::{normalize, strip_placeholders};

pub mod segment;
pub use segment::{segment, TextRun};

pub mod boundary;
pub use boundary::{syllable_before, word_before};

pub mod wordstore;
pub use wordstore::{InMemoryWordStore, RedbWordStore, WordStore};

pub mod wordlist;
pub use wordlist::{WordEntry, Wordlist};

pub mod suggest;
pub use suggest::{Suggester, Suggestion};

pub mod dispatch;
pub use dispatch::{Dispatcher, RunSink};

/// Generic tuning knobs shared by the keyboard crates.
///
/// Language-specific options (layout planes, speech toggles) belong in the
/// frontend crates' own config types, which flatten this one.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Maximum suggestions returned for a prefix.
    pub suggestion_limit: usize,

    /// Multiplier applied to learned-word counts when ranking against the
    /// shipped corpus frequencies.
    pub user_boost: u64,

    /// Maximum number of entries in the prefix -> suggestions cache.
    pub max_cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // A candidate strip fits about five suggestions.
            suggestion_limit: 5,
            // One use of a learned word outweighs all but the most common
            // dictionary entries.
            user_boost: 100,
            // Prefixes are short; a small cache covers a typing session.
            max_cache_size: 256,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_toml_roundtrip() {
        let config = Config {
            suggestion_limit: 3,
            user_boost: 40,
            max_cache_size: 64,
        };
        let text = config.to_toml_string().unwrap();
        let back = Config::from_toml_str(&text).unwrap();
        assert_eq!(back.suggestion_limit, 3);
        assert_eq!(back.user_boost, 40);
        assert_eq!(back.max_cache_size, 64);
    }

    #[test]
    fn config_defaults_are_sane() {
        let config = Config::default();
        assert!(config.suggestion_limit > 0);
        assert!(config.user_boost > 0);
        assert!(config.max_cache_size > 0);
    }
}
