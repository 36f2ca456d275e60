//! Entry store: the ordered ledger and its persistence
//!
//! Owns the in-memory entry list (newest first) and the backing key-value
//! store. Every mutation is written through; if the write fails the
//! in-memory change stands and the error is surfaced so callers can warn.

use log::warn;

use crate::error::CashflowResult;
use crate::models::{Entry, EntryFields, EntryId};

use super::kv::{KeyValueStore, LEDGER_KEY};

/// The ledger: an ordered collection of entries, newest first
pub struct EntryStore<S: KeyValueStore> {
    store: S,
    entries: Vec<Entry>,
}

impl<S: KeyValueStore> EntryStore<S> {
    /// Open the ledger, reading whatever the backing store holds
    ///
    /// A missing store starts the session empty; an unreadable one does the
    /// same with a logged warning rather than refusing to start.
    pub fn open(store: S) -> Self {
        let mut ledger = Self {
            store,
            entries: Vec::new(),
        };
        ledger.load();
        ledger
    }

    fn load(&mut self) {
        self.entries = match self.store.get(LEDGER_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Ignoring unreadable ledger data, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read ledger from storage, starting empty: {}", e);
                Vec::new()
            }
        };
    }

    fn persist(&mut self) -> CashflowResult<()> {
        let raw = serde_json::to_string(&self.entries)?;
        self.store.set(LEDGER_KEY, &raw)
    }

    /// All entries, newest first
    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the ledger has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by id
    pub fn find(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Add a new entry at the front of the ledger
    ///
    /// On a persist failure the entry is still in memory and the error is
    /// returned.
    pub fn add(&mut self, fields: EntryFields) -> CashflowResult<Entry> {
        let mut entry = Entry::new(fields);

        // Ids carry a random suffix; regenerate on the off chance of a clash
        while self.find(&entry.id).is_some() {
            entry.id = EntryId::generate();
        }

        self.entries.insert(0, entry.clone());
        self.persist()?;
        Ok(entry)
    }

    /// Overwrite an existing entry's fields, keeping its id and position
    ///
    /// An unknown id is a logged no-op returning `Ok(None)`.
    pub fn update(&mut self, id: &EntryId, fields: EntryFields) -> CashflowResult<Option<Entry>> {
        let updated = match self.entries.iter_mut().find(|e| &e.id == id) {
            Some(entry) => {
                entry.apply(fields);
                entry.clone()
            }
            None => {
                warn!("Ignoring update for unknown entry {}", id);
                return Ok(None);
            }
        };

        self.persist()?;
        Ok(Some(updated))
    }

    /// Delete an entry
    ///
    /// Returns whether anything was removed; an unknown id is a logged no-op.
    pub fn remove(&mut self, id: &EntryId) -> CashflowResult<bool> {
        let before = self.entries.len();
        self.entries.retain(|e| &e.id != id);

        if self.entries.len() == before {
            warn!("Ignoring delete for unknown entry {}", id);
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }
}
