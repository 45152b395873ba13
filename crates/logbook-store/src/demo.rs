//! Built-in demo entries.
//!
//! Used when no entries file is configured so the console has
//! something to show out of the box.

use crate::Entry;

/// The default entry set shipped with the console.
pub fn demo_entries() -> Vec<Entry> {
    vec![
        Entry {
            id: "001".to_string(),
            title: "Hello, logbook".to_string(),
            date: "2024-02-01".to_string(),
            tags: vec!["meta".to_string(), "intro".to_string()],
            body: "This console is a small reading room for a static \
                   logbook.\nType LIST to see what is here, then READ \
                   <id> to open an entry.\nUse the arrow keys to recall \
                   earlier commands."
                .to_string(),
        },
        Entry {
            id: "002".to_string(),
            title: "Why a terminal".to_string(),
            date: "2024-02-14".to_string(),
            tags: vec!["design".to_string()],
            body: "A prompt is honest. It shows nothing until asked and \
                   everything it is told.\nNo layout, no chrome, just \
                   lines of text in the order they were written."
                .to_string(),
        },
        Entry {
            id: "003".to_string(),
            title: "Keeping notes".to_string(),
            date: "2024-03-05".to_string(),
            tags: vec!["habits".to_string(), "notes".to_string()],
            body: "Short entries beat long ones that never get written.\n\
                   One id, one date, a handful of tags and a few lines \
                   of body text is plenty."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ContentStore, MemoryStore};

    #[test]
    fn demo_set_is_non_empty() {
        assert!(!demo_entries().is_empty());
    }

    #[test]
    fn demo_ids_are_unique() {
        let entries = demo_entries();
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn demo_entries_are_findable() {
        let store = MemoryStore::new(demo_entries());
        assert!(store.find_by_id("001").is_some());
        assert!(store.find_by_id("002").is_some());
    }

    #[test]
    fn demo_entries_have_bodies_and_dates() {
        for e in demo_entries() {
            assert!(!e.body.is_empty());
            assert!(!e.date.is_empty());
            assert!(!e.title.is_empty());
        }
    }
}
