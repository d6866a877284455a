//! Occurrence data model and the deduplicating collection.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::location::SourceLocation;

/// One textual instance of a translatable string found in source.
///
/// Created by an extractor on a successful match and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizableOccurrence {
    /// The translatable text. Never empty.
    pub msg_id: String,
    /// The plural form, for plural call shapes.
    pub plural_id: Option<String>,
    /// Grouping discriminator, e.g. the enclosing namespace and type.
    pub context: Option<String>,
    pub location: SourceLocation,
}

/// Identity of a translatable unit: two occurrences with the same key refer
/// to the same string in the PO output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OccurrenceKey {
    pub msg_id: String,
    pub context: Option<String>,
}

impl OccurrenceKey {
    fn of(occurrence: &LocalizableOccurrence) -> Self {
        Self {
            msg_id: occurrence.msg_id.clone(),
            context: occurrence.context.clone(),
        }
    }
}

/// A deduplicated translatable unit with every location it was seen at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizableStringEntry {
    pub msg_id: String,
    pub plural_id: Option<String>,
    pub context: Option<String>,
    /// Supporting locations, in order of discovery.
    pub locations: Vec<SourceLocation>,
}

/// Insertion-ordered collection of translatable units, keyed by
/// (message id, context).
///
/// Entries appear in first-discovery order and are never removed or
/// reordered, so a re-run over unchanged sources produces an identical
/// collection.
#[derive(Debug, Default)]
pub struct LocalizableStringCollection {
    entries: IndexMap<OccurrenceKey, LocalizableStringEntry>,
}

impl LocalizableStringCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence.
    ///
    /// A new key inserts a new entry; an existing key appends the location
    /// and backfills a missing plural form (first non-empty value wins).
    pub fn add(&mut self, occurrence: LocalizableOccurrence) {
        let key = OccurrenceKey::of(&occurrence);
        match self.entries.entry(key) {
            Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();
                if entry.plural_id.is_none() {
                    entry.plural_id = occurrence.plural_id;
                }
                entry.locations.push(occurrence.location);
            }
            Entry::Vacant(slot) => {
                slot.insert(LocalizableStringEntry {
                    msg_id: occurrence.msg_id,
                    plural_id: occurrence.plural_id,
                    context: occurrence.context,
                    locations: vec![occurrence.location],
                });
            }
        }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &LocalizableStringEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of recorded locations across all entries.
    pub fn occurrence_count(&self) -> usize {
        self.entries.values().map(|e| e.locations.len()).sum()
    }
}
