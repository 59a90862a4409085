//! Prefix suggestions over the base wordlist and the learned store.
//!
//! Ranking merges both sources: the shipped corpus frequency plus the
//! user's own counts scaled by the configured boost, so a word typed a few
//! times quickly climbs past dictionary entries. Results for a prefix are
//! cached until the next learned word invalidates the weights.

use std::cell::RefCell;
use std::num::NonZeroUsize;

use ahash::AHashMap;

use crate::wordlist::Wordlist;
use crate::wordstore::WordStore;
use crate::Config;

/// One ranked suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub text: String,
    /// Merged ranking weight: base frequency plus boosted user count.
    pub weight: u64,
}

impl Suggestion {
    pub fn new<T: Into<String>>(text: T, weight: u64) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }
}

/// Suggestion engine: wordlist, learned store, and an LRU result cache.
pub struct Suggester {
    wordlist: Wordlist,
    store: WordStore,
    config: Config,
    cache: RefCell<lru::LruCache<String, Vec<Suggestion>>>,
}

impl Suggester {
    pub fn new(wordlist: Wordlist, store: WordStore, config: Config) -> Self {
        let capacity =
            NonZeroUsize::new(config.max_cache_size.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            wordlist,
            store,
            config,
            cache: RefCell::new(lru::LruCache::new(capacity)),
        }
    }

    /// Ranked completions for the word in progress. An empty prefix yields
    /// nothing; suggestions only make sense inside a word.
    pub fn suggest(&self, prefix: &str) -> Vec<Suggestion> {
        if prefix.is_empty() {
            return Vec::new();
        }

        if let Some(cached) = self.cache.borrow_mut().get(prefix) {
            return cached.clone();
        }

        let mut weights: AHashMap<String, u64> = AHashMap::new();
        for entry in self.wordlist.prefix(prefix) {
            let slot = weights.entry(entry.text).or_insert(0);
            *slot = slot.saturating_add(entry.freq);
        }
        for (word, count) in self.store.suggest(prefix, usize::MAX) {
            let boosted = count.saturating_mul(self.config.user_boost);
            let slot = weights.entry(word).or_insert(0);
            *slot = slot.saturating_add(boosted);
        }

        let mut ranked: Vec<Suggestion> = weights
            .into_iter()
            .map(|(text, weight)| Suggestion { text, weight })
            .collect();
        ranked.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.text.cmp(&b.text)));
        ranked.truncate(self.config.suggestion_limit);

        self.cache
            .borrow_mut()
            .put(prefix.to_string(), ranked.clone());
        ranked
    }

    /// Record a finished word in the learned store and drop cached results
    /// so the new count is visible immediately.
    pub fn commit_word(&self, word: &str) {
        self.store.learn(word);
        self.cache.borrow_mut().clear();
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
