//! Key handling over the core typing session.
//!
//! `ShanKeyboard` is the piece the platform shell talks to: it owns the
//! reordering session, the suggestion stack and the pronunciation table, and
//! turns each raw key press into one [`KeyReply`] the shell can apply
//! without understanding any script rules itself.

use libmyanmar_core::{Edit, Suggester, Suggestion, TypingSession};
use tracing::debug;

use crate::config::ShanConfig;
use crate::keymap::{ControlKey, Key};
use crate::phonetic::PhoneticTable;

/// Shell-level request attached to a key press. The keyboard core does not
/// own layouts or audio; it only names what the shell should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    None,
    ToggleShift,
    ShowSymbols,
    HideSymbols,
    StartVoiceInput,
    SwitchLanguage,
}

/// Everything one key press produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyReply {
    /// Correction to apply to the text sink.
    pub edit: Edit,
    /// Word closed by this key press, normalized.
    pub flushed: Option<String>,
    /// Spoken name of the pressed key, when key speech is enabled.
    pub pronunciation: Option<String>,
    /// Finished word to read back, when word echo is enabled.
    pub echo: Option<String>,
    /// Action for the platform shell.
    pub action: UiAction,
}

impl KeyReply {
    fn noop() -> Self {
        Self {
            edit: Edit::none(),
            flushed: None,
            pronunciation: None,
            echo: None,
            action: UiAction::None,
        }
    }

    fn action(action: UiAction) -> Self {
        Self {
            action,
            ..Self::noop()
        }
    }
}

/// The Shan keyboard frontend: one instance per input session.
pub struct ShanKeyboard {
    session: TypingSession,
    suggester: Suggester,
    phonetics: PhoneticTable,
    config: ShanConfig,
}

impl ShanKeyboard {
    pub fn new(suggester: Suggester, phonetics: PhoneticTable, config: ShanConfig) -> Self {
        Self {
            session: TypingSession::new(),
            suggester,
            phonetics,
            config,
        }
    }

    /// Handle one key press.
    ///
    /// Control sentinels map to their shell actions; delete and enter drive
    /// the session directly. Character keys go through the reordering rules,
    /// committing the full label when the cap carries a composed sequence.
    /// Unknown negative codes (layout padding) produce an empty reply.
    pub fn handle_key(&mut self, key: &Key) -> KeyReply {
        if let Some(control) = ControlKey::from_code(key.code) {
            return self.handle_control(control);
        }
        if key.code < 0 {
            return KeyReply::noop();
        }

        let outcome = if key.label.chars().count() > 1 {
            self.session.commit_label(&key.label)
        } else {
            match char::from_u32(key.code as u32) {
                Some(ch) => self.session.append_codepoint(ch),
                None => return KeyReply::noop(),
            }
        };

        let pronunciation = if self.config.speak_keys {
            self.phonetics.announce(key.code)
        } else {
            None
        };
        let echo = self.finish_word(outcome.flushed.as_deref());

        KeyReply {
            edit: outcome.edit,
            flushed: outcome.flushed,
            pronunciation,
            echo,
            action: UiAction::None,
        }
    }

    fn handle_control(&mut self, control: ControlKey) -> KeyReply {
        match control {
            ControlKey::Delete => KeyReply {
                edit: self.session.backspace(),
                ..KeyReply::noop()
            },
            ControlKey::Enter => {
                let flushed = self.session.flush();
                let echo = self.finish_word(flushed.as_deref());
                KeyReply {
                    edit: Edit {
                        delete: 0,
                        insert: "\n".to_string(),
                    },
                    flushed,
                    echo,
                    ..KeyReply::noop()
                }
            }
            ControlKey::Shift => KeyReply::action(UiAction::ToggleShift),
            ControlKey::SymbolsOn => KeyReply::action(UiAction::ShowSymbols),
            ControlKey::SymbolsOff => KeyReply::action(UiAction::HideSymbols),
            ControlKey::Voice => KeyReply::action(UiAction::StartVoiceInput),
            ControlKey::LanguageSwitch => {
                // The word in progress is committed before the layout changes.
                let flushed = self.session.flush();
                let echo = self.finish_word(flushed.as_deref());
                KeyReply {
                    flushed,
                    echo,
                    action: UiAction::SwitchLanguage,
                    ..KeyReply::noop()
                }
            }
        }
    }

    /// Learn a flushed word and decide whether to echo it.
    fn finish_word(&self, flushed: Option<&str>) -> Option<String> {
        let word = flushed?;
        if self.config.auto_learn {
            self.suggester.commit_word(word);
            debug!(word, "flushed word learned");
        }
        if self.config.echo_words {
            Some(word.to_string())
        } else {
            None
        }
    }

    /// Candidates for the word in progress.
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.suggester.suggest(&self.session.visible_word())
    }

    /// Replace the word in progress with a chosen candidate. The candidate
    /// counts as a committed use.
    pub fn accept_suggestion(&mut self, word: &str) -> Edit {
        let delete = self.session.buffer().len();
        self.session.reset();
        self.suggester.commit_word(word);
        Edit {
            delete,
            insert: word.to_string(),
        }
    }

    pub fn session(&self) -> &TypingSession {
        &self.session
    }

    pub fn suggester(&self) -> &Suggester {
        &self.suggester
    }

    pub fn config(&self) -> &ShanConfig {
        &self.config
    }
}
