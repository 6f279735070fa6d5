use chrono::{DateTime, Utc};
use iced::widget::image;
use tracing::{debug, info};

use super::data::{Category, EntryId, ReferenceEntry};
use super::handles::HandleRegistry;
use super::intake::{self, CandidateFile};

/// The ReferenceStore holds every entry on the board, newest first,
/// together with the registry of their image handles.
///
/// All mutations are addressed by `EntryId`; unknown ids are no-ops.
#[derive(Debug, Default)]
pub struct ReferenceStore {
    entries: Vec<ReferenceEntry>,
    handles: HandleRegistry,
}

impl ReferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a batch through intake and merge whatever was accepted.
    /// Returns the number of entries added.
    pub fn ingest(&mut self, batch: Vec<CandidateFile>, now: DateTime<Utc>) -> usize {
        let accepted = intake::accept(batch, &mut self.handles, now);
        self.insert(accepted)
    }

    /// Merge new entries and re-sort newest first.
    ///
    /// An empty batch leaves the store untouched. New entries go ahead of
    /// existing ones with the same timestamp.
    pub fn insert(&mut self, mut new_entries: Vec<ReferenceEntry>) -> usize {
        let added = new_entries.len();
        if added == 0 {
            return 0;
        }

        new_entries.append(&mut self.entries);
        self.entries = new_entries;
        // Stable, so equal timestamps keep their relative order
        self.entries
            .sort_by(|a, b| b.created_at.cmp(&a.created_at));

        debug!("Added {} entries ({} total)", added, self.entries.len());
        added
    }

    /// Entries in display order (newest first)
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&ReferenceEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: EntryId) -> Option<&mut ReferenceEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Image handle for an entry, if the entry is still live
    pub fn image(&self, entry: &ReferenceEntry) -> Option<&image::Handle> {
        self.handles.get(entry.handle)
    }

    pub fn outstanding_handles(&self) -> usize {
        self.handles.outstanding()
    }

    /// Flip one category on an entry. Collection order is not touched.
    pub fn toggle_tag(&mut self, id: EntryId, category: Category) {
        if let Some(entry) = self.get_mut(id) {
            let now_set = entry.toggle_tag(category);
            debug!("{} {} on {}", if now_set { "Tagged" } else { "Untagged" }, category, entry.name);
        }
    }

    /// Replace an entry's notes verbatim
    pub fn update_notes(&mut self, id: EntryId, notes: String) {
        if let Some(entry) = self.get_mut(id) {
            entry.notes = notes;
        }
    }

    /// Drop an entry and release its handle.
    /// Returns the removed entry, or None if the id is unknown.
    pub fn remove(&mut self, id: EntryId) -> Option<ReferenceEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        let entry = self.entries.remove(index);
        self.handles.release(entry.handle);

        info!("🗑️  Removed {}", entry.name);
        Some(entry)
    }

    /// Teardown: drop every entry and release all outstanding handles.
    /// Returns how many handles were released.
    pub fn release_all(&mut self) -> usize {
        self.entries.clear();
        let released = self.handles.release_all();
        info!("Released {} image handles", released);
        released
    }
}
