/// Shared data structures for the board state
///
/// These structs represent the data model that flows between
/// the store and the UI layer.
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use super::handles::HandleId;

/// Fixed set of labels a reference can be tagged with.
///
/// Declaration order is the canonical tag order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Subject,
    Lighting,
    Color,
    Texture,
    Composition,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Subject,
        Category::Lighting,
        Category::Color,
        Category::Texture,
        Category::Composition,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Subject => "Subject",
            Category::Lighting => "Lighting",
            Category::Color => "Color",
            Category::Texture => "Texture",
            Category::Composition => "Composition",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which entries the grid shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// Every filter value in filter-bar order ("All" first)
    pub fn options() -> impl Iterator<Item = Filter> {
        std::iter::once(Filter::All).chain(Category::ALL.into_iter().map(Filter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(category) => category.label(),
        }
    }
}

/// Process-unique entry identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One image on the board plus the user's metadata for it
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceEntry {
    pub id: EntryId,
    /// Filename only (e.g., "sunset.jpg")
    pub name: String,
    pub size_bytes: u64,
    /// Pixel dimensions, when the header could be read
    pub dimensions: Option<(u32, u32)>,
    /// Key into the handle registry
    pub handle: HandleId,
    pub notes: String,
    /// Sorted, duplicate-free
    tags: Vec<Category>,
    pub created_at: DateTime<Utc>,
}

impl ReferenceEntry {
    /// Create a fresh entry with empty notes and no tags
    pub fn new(
        name: String,
        size_bytes: u64,
        dimensions: Option<(u32, u32)>,
        handle: HandleId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: EntryId::new(),
            name,
            size_bytes,
            dimensions,
            handle,
            notes: String::new(),
            tags: Vec::new(),
            created_at,
        }
    }

    pub fn tags(&self) -> &[Category] {
        &self.tags
    }

    pub fn has_tag(&self, category: Category) -> bool {
        self.tags.binary_search(&category).is_ok()
    }

    /// Add the tag if absent, remove it if present.
    /// Returns whether the tag is set afterwards.
    pub fn toggle_tag(&mut self, category: Category) -> bool {
        match self.tags.binary_search(&category) {
            Ok(index) => {
                self.tags.remove(index);
                false
            }
            Err(index) => {
                self.tags.insert(index, category);
                true
            }
        }
    }
}
