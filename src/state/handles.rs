/// Registry of outstanding image handles
///
/// Every accepted file gets one handle at intake. A handle is released
/// exactly once: when its entry is removed, or in bulk at teardown.
/// Ids come from a counter and are never reused.
use iced::widget::image;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(u64);

impl HandleId {
    #[cfg(test)]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

#[derive(Default)]
pub struct HandleRegistry {
    live: HashMap<HandleId, image::Handle>,
    next_id: u64,
}

impl HandleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a renderable handle for the image at `path`
    pub fn allocate(&mut self, path: &Path) -> HandleId {
        self.next_id += 1;
        let id = HandleId(self.next_id);
        self.live.insert(id, image::Handle::from_path(path));
        id
    }

    pub fn get(&self, id: HandleId) -> Option<&image::Handle> {
        self.live.get(&id)
    }

    pub fn contains(&self, id: HandleId) -> bool {
        self.live.contains_key(&id)
    }

    /// Number of handles not yet released
    pub fn outstanding(&self) -> usize {
        self.live.len()
    }

    /// Release one handle. Returns false if it was already released.
    pub fn release(&mut self, id: HandleId) -> bool {
        self.live.remove(&id).is_some()
    }

    /// Release every outstanding handle, returning how many were freed
    pub fn release_all(&mut self) -> usize {
        let count = self.live.len();
        self.live.clear();
        count
    }
}

impl Drop for HandleRegistry {
    fn drop(&mut self) {
        let released = self.release_all();
        if released > 0 {
            debug!("Released {} handles on drop", released);
        }
    }
}

impl std::fmt::Debug for HandleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandleRegistry")
            .field("outstanding", &self.live.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
