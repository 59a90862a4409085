/// Shan keyboard configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All generic options from `libmyanmar_core::Config` (flattened via serde)
/// - Per-key pronunciation speech
/// - Completed-word echo
/// - Automatic learning of flushed words
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShanConfig {
    /// Base configuration fields (suggestion limit, boost, cache size)
    #[serde(flatten)]
    pub base: libmyanmar_core::Config,

    /// Speak the pronunciation of each key as it is pressed.
    pub speak_keys: bool,

    /// Speak the finished word when a separator closes it.
    pub echo_words: bool,

    /// Learn flushed words into the word store.
    pub auto_learn: bool,
}

impl Default for ShanConfig {
    fn default() -> Self {
        Self {
            base: libmyanmar_core::Config::default(),
            speak_keys: true,
            echo_words: false,
            auto_learn: true,
        }
    }
}

impl ShanConfig {
    /// Convert this keyboard config into the base config for the suggester.
    pub fn into_base(self) -> libmyanmar_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &libmyanmar_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut libmyanmar_core::Config {
        &mut self.base
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: ShanConfig = toml::from_str(&content)?;
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
