//! In-memory content store.
//!
//! The entire entry set lives in a `Vec<Entry>` in file order. Useful
//! both for the real console (entries are static) and for unit tests
//! with controlled entry sets.

use serde::Deserialize;

use logbook_types::Result;

use crate::{ContentStore, Entry};

/// A fully in-memory, read-only entry store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<Entry>,
}

/// On-disk shape of an entries file: a list of `[[entry]]` tables.
#[derive(Debug, Deserialize)]
struct EntriesFile {
    #[serde(default)]
    entry: Vec<Entry>,
}

impl MemoryStore {
    /// Create a store from a fixed entry set, preserving order.
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Parse a TOML entries document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: EntriesFile = toml::from_str(text)?;
        log::debug!("loaded {} entries", file.entry.len());
        Ok(Self::new(file.entry))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ContentStore for MemoryStore {
    fn find_by_id(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id.eq_ignore_ascii_case(id))
    }

    fn list_all(&self) -> &[Entry] {
        &self.entries
    }
}
