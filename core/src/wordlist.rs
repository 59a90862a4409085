//! Static base dictionary.
//!
//! The shipped wordlist is an fst map from word to an index into a
//! bincode-serialized entry vector, the same two-file layout the build tool
//! produces. The fst keeps prefix scans cheap on phone-sized dictionaries;
//! the payload vector carries the corpus frequency used for ranking. A small
//! in-memory overlay accepts dynamic inserts so tests and small deployments
//! can run without artifact files.

use ahash::AHashMap;
use fst::automaton::{Automaton, Str};
use fst::{IntoStreamer, Map, MapBuilder, Streamer};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// One dictionary word with its corpus frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub text: String,
    pub freq: u64,
}

impl WordEntry {
    pub fn new<T: Into<String>>(text: T, freq: u64) -> Self {
        Self {
            text: text.into(),
            freq,
        }
    }
}

/// Base dictionary: fst index plus payload entries, with a mutable overlay.
pub struct Wordlist {
    map: Map<Vec<u8>>,
    entries: Vec<WordEntry>,
    overlay: AHashMap<String, u64>,
}

impl Wordlist {
    /// An empty wordlist; lookups hit only the overlay.
    pub fn empty() -> Self {
        Self {
            map: Map::default(),
            entries: Vec::new(),
            overlay: AHashMap::new(),
        }
    }

    /// Load the artifact pair produced by [`Wordlist::write_artifacts`].
    pub fn load<P: AsRef<Path>>(
        fst_path: P,
        bincode_path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let map = {
            let mut f = File::open(fst_path.as_ref())?;
            let mut buf = Vec::new();
            f.read_to_end(&mut buf)?;
            Map::new(buf)?
        };

        let entries = {
            let mut f = File::open(bincode_path.as_ref())?;
            let mut buf = Vec::new();
            f.read_to_end(&mut buf)?;
            bincode::deserialize(&buf)?
        };

        Ok(Self {
            map,
            entries,
            overlay: AHashMap::new(),
        })
    }

    /// Add a word to the overlay, summing with any existing overlay count.
    pub fn insert<T: Into<String>>(&mut self, word: T, freq: u64) {
        let entry = self.overlay.entry(word.into()).or_insert(0);
        *entry = entry.saturating_add(freq);
    }

    /// Base frequency for an exact word, overlay and artifact combined.
    pub fn frequency(&self, word: &str) -> u64 {
        let base = match self.map.get(word) {
            Some(idx) => self.entries.get(idx as usize).map(|e| e.freq).unwrap_or(0),
            None => 0,
        };
        base.saturating_add(self.overlay.get(word).copied().unwrap_or(0))
    }

    /// All dictionary words starting with `prefix`, highest frequency first,
    /// ties in codepoint order.
    pub fn prefix(&self, prefix: &str) -> Vec<WordEntry> {
        let mut merged: AHashMap<String, u64> = AHashMap::new();

        let matcher = Str::new(prefix).starts_with();
        let mut stream = self.map.search(matcher).into_stream();
        while let Some((key, idx)) = stream.next() {
            let text = String::from_utf8_lossy(key).into_owned();
            let freq = self.entries.get(idx as usize).map(|e| e.freq).unwrap_or(0);
            let slot = merged.entry(text).or_insert(0);
            *slot = slot.saturating_add(freq);
        }

        for (word, freq) in &self.overlay {
            if word.starts_with(prefix) {
                let slot = merged.entry(word.clone()).or_insert(0);
                *slot = slot.saturating_add(*freq);
            }
        }

        let mut out: Vec<WordEntry> = merged
            .into_iter()
            .map(|(text, freq)| WordEntry { text, freq })
            .collect();
        out.sort_by(|a, b| b.freq.cmp(&a.freq).then_with(|| a.text.cmp(&b.text)));
        out
    }

    /// Number of words in the loaded artifact (the overlay is not counted).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.overlay.is_empty()
    }

    /// Build the two artifact files from raw entries.
    ///
    /// Duplicate words are merged by summing frequencies. The fst requires
    /// its keys in byte order, so entries are sorted before building.
    pub fn write_artifacts<P: AsRef<Path>>(
        entries: &[WordEntry],
        fst_path: P,
        bincode_path: P,
    ) -> anyhow::Result<()> {
        let mut merged: AHashMap<String, u64> = AHashMap::new();
        for e in entries {
            let slot = merged.entry(e.text.clone()).or_insert(0);
            *slot = slot.saturating_add(e.freq);
        }
        let mut sorted: Vec<WordEntry> = merged
            .into_iter()
            .map(|(text, freq)| WordEntry { text, freq })
            .collect();
        sorted.sort_by(|a, b| a.text.cmp(&b.text));

        let mut builder = MapBuilder::new(Vec::new())?;
        for (idx, entry) in sorted.iter().enumerate() {
            builder.insert(&entry.text, idx as u64)?;
        }
        let bytes = builder.into_inner()?;
        File::create(fst_path.as_ref())?.write_all(&bytes)?;

        let file = File::create(bincode_path.as_ref())?;
        bincode::serialize_into(BufWriter::new(file), &sorted)?;
        Ok(())
    }
}

impl Default for Wordlist {
    fn default() -> Self {
        Self::empty()
    }
}
