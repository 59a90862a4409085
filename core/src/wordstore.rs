//! Learned-word persistence.
//!
//! Every flushed word is counted, and the counts drive the suggestion
//! ranking. Two backends sit behind the [`WordStore`] enum: a thread-safe
//! in-memory map for tests and short-lived sessions, and a `redb` database
//! for the real keyboard. Persistence is fire-and-forget from the typing
//! path: backend failures are logged and swallowed, never surfaced to the
//! caller mid-keystroke.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use redb::ReadableTable;
use tracing::warn;

/// Sort store hits for suggestion use: highest count first, ties in
/// codepoint order so the ranking is stable run to run.
fn rank(mut hits: Vec<(String, u64)>, limit: usize) -> Vec<(String, u64)> {
    hits.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hits.truncate(limit);
    hits
}

/// Thread-safe in-memory word store.
///
/// Counts are u64 and merges simply add. Useful for unit tests and for
/// sessions that do not want a database file on disk.
#[derive(Clone, Debug, Default)]
pub struct InMemoryWordStore {
    inner: Arc<RwLock<HashMap<String, u64>>>,
}

impl InMemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more use of `word`.
    pub fn learn(&self, word: &str) {
        self.learn_with_count(word, 1);
    }

    /// Count `delta` uses at once, for imports and merges.
    pub fn learn_with_count(&self, word: &str, delta: u64) {
        if delta == 0 {
            return;
        }
        if let Ok(mut map) = self.inner.write() {
            let entry = map.entry(word.to_string()).or_insert(0);
            *entry = entry.saturating_add(delta);
        }
    }

    pub fn frequency(&self, word: &str) -> u64 {
        if let Ok(map) = self.inner.read() {
            map.get(word).copied().unwrap_or(0)
        } else {
            0
        }
    }

    /// Learned words starting with `prefix`, best first.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<(String, u64)> {
        let hits = if let Ok(map) = self.inner.read() {
            map.iter()
                .filter(|(w, _)| w.starts_with(prefix))
                .map(|(w, n)| (w.clone(), *n))
                .collect()
        } else {
            Vec::new()
        };
        rank(hits, limit)
    }

    pub fn merge_from(&self, other: &InMemoryWordStore) {
        if let (Ok(mut dst), Ok(src)) = (self.inner.write(), other.inner.read()) {
            for (k, v) in src.iter() {
                let entry = dst.entry(k.clone()).or_insert(0);
                *entry = entry.saturating_add(*v);
            }
        }
    }

    pub fn snapshot(&self) -> HashMap<String, u64> {
        if let Ok(map) = self.inner.read() {
            map.clone()
        } else {
            HashMap::new()
        }
    }
}

/// Backend switch used by higher-level code.
pub enum WordStore {
    InMemory(InMemoryWordStore),
    Redb(RedbWordStore),
}

impl WordStore {
    pub fn new_in_memory() -> Self {
        WordStore::InMemory(InMemoryWordStore::new())
    }

    /// Open or create a `redb`-backed store at `path`.
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self, redb::Error> {
        Ok(WordStore::Redb(RedbWordStore::open(path)?))
    }

    /// Count one more use of `word`. Backend failures are logged, not
    /// returned; a lost increment must never interrupt typing.
    pub fn learn(&self, word: &str) {
        self.learn_with_count(word, 1);
    }

    pub fn learn_with_count(&self, word: &str, delta: u64) {
        match self {
            WordStore::InMemory(m) => m.learn_with_count(word, delta),
            WordStore::Redb(r) => {
                if let Err(err) = r.learn_with_count(word, delta) {
                    warn!(word, %err, "word store increment failed");
                }
            }
        }
    }

    pub fn frequency(&self, word: &str) -> u64 {
        match self {
            WordStore::InMemory(m) => m.frequency(word),
            WordStore::Redb(r) => r.frequency(word).unwrap_or(0),
        }
    }

    /// Learned words starting with `prefix`, descending count, ties in
    /// codepoint order.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<(String, u64)> {
        match self {
            WordStore::InMemory(m) => m.suggest(prefix, limit),
            WordStore::Redb(r) => r.suggest(prefix, limit).unwrap_or_default(),
        }
    }

    /// Merge another store into this one, summing counts. Cross-backend
    /// merges go through a snapshot.
    pub fn merge_from(&self, other: &WordStore) {
        for (k, v) in other.snapshot() {
            self.learn_with_count(&k, v);
        }
    }

    pub fn snapshot(&self) -> HashMap<String, u64> {
        match self {
            WordStore::InMemory(m) => m.snapshot(),
            WordStore::Redb(r) => r.snapshot().unwrap_or_default(),
        }
    }

    /// All entries as a vector of pairs, unsorted.
    pub fn iter_all(&self) -> Vec<(String, u64)> {
        self.snapshot().into_iter().collect()
    }

    /// Serialize the full contents as pretty JSON with stable key order.
    pub fn export_json(&self) -> anyhow::Result<String> {
        let sorted: BTreeMap<String, u64> = self.snapshot().into_iter().collect();
        Ok(serde_json::to_string_pretty(&sorted)?)
    }

    /// Merge entries from a JSON export into this store. Returns the number
    /// of entries applied.
    pub fn import_json(&self, json: &str) -> anyhow::Result<usize> {
        let entries: HashMap<String, u64> = serde_json::from_str(json)?;
        let count = entries.len();
        for (word, n) in entries {
            self.learn_with_count(&word, n);
        }
        Ok(count)
    }
}

/// Persistent word store on `redb`.
///
/// One table maps word to count; every increment is its own write
/// transaction, which keeps the store consistent if the process dies
/// mid-keystroke.
pub struct RedbWordStore {
    db: redb::Database,
}

impl RedbWordStore {
    const TABLE: redb::TableDefinition<'static, &'static str, u64> =
        redb::TableDefinition::new("word_freq");

    /// Create or open the database at `path`. The table is created up front
    /// so reads on a fresh store see an empty table instead of a missing
    /// one.
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self, redb::Error> {
        if let Some(parent) = path.as_ref().parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let db = redb::Database::create(path.as_ref())?;
        let txn = db.begin_write()?;
        txn.open_table(Self::TABLE)?;
        txn.commit()?;
        Ok(RedbWordStore { db })
    }

    pub fn learn(&self, word: &str) -> Result<(), redb::Error> {
        self.learn_with_count(word, 1)
    }

    pub fn learn_with_count(&self, word: &str, delta: u64) -> Result<(), redb::Error> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(Self::TABLE)?;
            let current = match table.get(word)? {
                Some(existing) => existing.value(),
                None => 0,
            };
            table.insert(word, current.saturating_add(delta))?;
        }
        txn.commit()?;
        Ok(())
    }

    pub fn frequency(&self, word: &str) -> Result<u64, redb::Error> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(Self::TABLE)?;
        match table.get(word)? {
            Some(val) => Ok(val.value()),
            None => Ok(0),
        }
    }

    /// Prefix scan over the sorted table, then rank by count.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Result<Vec<(String, u64)>, redb::Error> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(Self::TABLE)?;
        let mut hits = Vec::new();
        for item in table.range(prefix..)? {
            let (k, v) = item?;
            if !k.value().starts_with(prefix) {
                break;
            }
            hits.push((k.value().to_string(), v.value()));
        }
        Ok(rank(hits, limit))
    }

    pub fn snapshot(&self) -> Result<HashMap<String, u64>, redb::Error> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(Self::TABLE)?;
        let mut out = HashMap::new();
        for item in table.iter()? {
            let (k, v) = item?;
            out.insert(k.value().to_string(), v.value());
        }
        Ok(out)
    }
}
