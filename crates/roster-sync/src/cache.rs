//! Session-local cache of fetched schedule entries.

use std::collections::HashMap;

/// Mapping from date key to entry content for one client session.
///
/// Fully replaced by each month-load fetch and patched on each
/// successful save. The cache is an owned value passed to callers
/// explicitly; nothing is shared between sessions or persisted.
#[derive(Debug, Clone, Default)]
pub struct EntryCache {
    entries: HashMap<String, String>,
}

impl EntryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole cache with a freshly fetched dataset.
    pub fn replace_all(&mut self, entries: HashMap<String, String>) {
        self.entries = entries;
    }

    /// Patch a single entry after a successful save, so renders without
    /// a fresh fetch reflect the new value.
    pub fn patch(&mut self, date_key: impl Into<String>, content: impl Into<String>) {
        self.entries.insert(date_key.into(), content.into());
    }

    /// Content for a date key, if cached.
    pub fn get(&self, date_key: &str) -> Option<&str> {
        self.entries.get(date_key).map(String::as_str)
    }

    /// The underlying map, for merging into a month grid.
    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let cache = EntryCache::new();
        assert!(cache.is_empty());
        assert!(cache.get("2024-03-05").is_none());
    }

    #[test]
    fn test_replace_all_discards_previous_contents() {
        let mut cache = EntryCache::new();
        cache.patch("2024-02-01", "stale");

        let mut fresh = HashMap::new();
        fresh.insert("2024-03-05".to_string(), "A".to_string());
        cache.replace_all(fresh);

        assert_eq!(cache.len(), 1);
        assert!(cache.get("2024-02-01").is_none());
        assert_eq!(cache.get("2024-03-05"), Some("A"));
    }

    #[test]
    fn test_patch_overwrites_in_place() {
        let mut cache = EntryCache::new();
        cache.patch("2024-03-05", "A");
        cache.patch("2024-03-05", "B");

        assert_eq!(cache.get("2024-03-05"), Some("B"));
        assert_eq!(cache.len(), 1);
    }
}
