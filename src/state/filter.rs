/// Derived view of the collection for the active filter.
/// Nothing here mutates the entries.
use super::data::{Category, Filter, ReferenceEntry};

/// Entries passing `filter`, in collection order
pub fn apply(entries: &[ReferenceEntry], filter: Filter) -> Vec<&ReferenceEntry> {
    match filter {
        Filter::All => entries.iter().collect(),
        Filter::Only(category) => entries.iter().filter(|e| e.has_tag(category)).collect(),
    }
}

/// How many entries `filter` would show
pub fn count(entries: &[ReferenceEntry], filter: Filter) -> usize {
    match filter {
        Filter::All => entries.len(),
        Filter::Only(category) => tagged_with(entries, category),
    }
}

fn tagged_with(entries: &[ReferenceEntry], category: Category) -> usize {
    entries.iter().filter(|e| e.has_tag(category)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::handles::HandleId;
    use chrono::Utc;

    fn board(tags: &[&[Category]]) -> Vec<ReferenceEntry> {
        tags.iter()
            .enumerate()
            .map(|(i, tags)| {
                let mut entry = ReferenceEntry::new(
                    format!("{}.png", i),
                    1,
                    None,
                    HandleId::from_raw(i as u64),
                    Utc::now(),
                );
                for &tag in *tags {
                    entry.toggle_tag(tag);
                }
                entry
            })
            .collect()
    }

    #[test]
    fn test_all_passes_everything() {
        let entries = board(&[&[], &[Category::Color], &[]]);
        let shown = apply(&entries, Filter::All);
        assert_eq!(shown.len(), 3);
        assert!(shown.iter().zip(&entries).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_category_keeps_order() {
        let entries = board(&[
            &[Category::Texture],
            &[Category::Subject],
            &[Category::Subject, Category::Texture],
            &[],
        ]);

        let names: Vec<_> = apply(&entries, Filter::Only(Category::Texture))
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["0.png", "2.png"]);
    }

    #[test]
    fn test_apply_is_pure() {
        let entries = board(&[&[Category::Lighting], &[]]);
        let snapshot = entries.clone();
        let _ = apply(&entries, Filter::Only(Category::Lighting));
        assert_eq!(entries, snapshot);
    }

    #[test]
    fn test_empty_result() {
        let entries = board(&[&[Category::Color]]);
        assert!(apply(&entries, Filter::Only(Category::Composition)).is_empty());
    }

    #[test]
    fn test_counts() {
        let entries = board(&[&[Category::Color], &[Category::Color, Category::Subject], &[]]);
        assert_eq!(count(&entries, Filter::All), 3);
        assert_eq!(count(&entries, Filter::Only(Category::Color)), 2);
        assert_eq!(count(&entries, Filter::Only(Category::Lighting)), 0);
    }
}
