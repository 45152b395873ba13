//! Read-only content store for the logbook console.
//!
//! Entries are static records (id, title, date, tags, body) loaded
//! once at startup, either from a TOML file or from the built-in demo
//! set. Commands only ever read from the store.

mod demo;
mod memory;

use serde::{Deserialize, Serialize};

pub use demo::demo_entries;
pub use memory::MemoryStore;

/// A single logbook entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier the user types after READ.
    pub id: String,
    /// Entry title.
    pub title: String,
    /// Publication date, free-form text.
    pub date: String,
    /// Ordered tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-text body; rendered line by line.
    pub body: String,
}

/// Read-only lookup capability consumed by the command handlers.
pub trait ContentStore {
    /// Look up an entry by identifier.
    ///
    /// Matching ignores ASCII case: the dispatcher upper-cases the
    /// whole submitted line, so ids arrive upper-cased regardless of
    /// what the user typed.
    fn find_by_id(&self, id: &str) -> Option<&Entry>;

    /// All entries in store order.
    fn list_all(&self) -> &[Entry];
}
