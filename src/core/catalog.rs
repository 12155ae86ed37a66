// The process-wide event catalog: a finite, ordered, read-only rotation of
// event templates, loaded once and never modified at runtime.

use std::sync::Arc;

use lazy_static::lazy_static;

use super::model::EventTemplate;

lazy_static! {
    /// The embedded Wilderness flash event rotation.
    pub static ref EVENTS: Arc<Catalog> = Arc::new(
        Catalog::from_json(include_str!("../../data/events.json"))
            .expect("embedded events.json is valid")
    );
}

/// Ordered, immutable sequence of event templates. Invariants checked at
/// construction: at least one entry, and each entry's `id` equals its index.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<EventTemplate>,
}

impl Catalog {
    /// Build a catalog, asserting the rotation invariants. Panics on an empty
    /// list or a non-contiguous id sequence; both are programming errors in
    /// the data file, not runtime conditions.
    pub fn new(entries: Vec<EventTemplate>) -> Self {
        assert!(!entries.is_empty(), "event catalog must not be empty");
        for (idx, entry) in entries.iter().enumerate() {
            assert_eq!(
                entry.id, idx,
                "catalog entry '{}' has id {} at position {}",
                entry.name, entry.id, idx
            );
        }
        Self { entries }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let entries: Vec<EventTemplate> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[EventTemplate] {
        &self.entries
    }

    pub fn get(&self, idx: usize) -> Option<&EventTemplate> {
        self.entries.get(idx)
    }
}
