//! Tag Filter
//!
//! Narrows a list to records whose numeric tag is in the selection.
//! Works purely on the already fetched list.

use std::collections::BTreeSet;

use crate::record::Record;

/// Sorted, duplicate-free tags present in `records` (0 included)
pub fn distinct_tags<R: Record>(records: &[R]) -> Vec<i64> {
    records
        .iter()
        .filter_map(R::tag)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Selected tags; empty means "show everything"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    selection: BTreeSet<i64>,
}

impl TagFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, tag: i64) {
        if !self.selection.remove(&tag) {
            self.selection.insert(tag);
        }
    }

    pub fn select_all(&mut self, tags: &[i64]) {
        self.selection = tags.iter().copied().collect();
    }

    pub fn clear_all(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, tag: i64) -> bool {
        self.selection.contains(&tag)
    }

    pub fn is_active(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selection.len()
    }

    pub fn selection(&self) -> Vec<i64> {
        self.selection.iter().copied().collect()
    }

    /// Drop selected tags that no longer occur in the list
    pub fn retain_known(&mut self, tags: &[i64]) {
        self.selection.retain(|t| tags.contains(t));
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.selection.is_empty() || record.tag().is_some_and(|t| self.selection.contains(&t))
    }

    pub fn visible<R: Record>(&self, records: &[R]) -> Vec<R> {
        records.iter().filter(|r| self.matches(*r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{note, Note};

    fn numbered(tags: &[Option<i64>]) -> Vec<Note> {
        tags.iter()
            .enumerate()
            .map(|(i, t)| note(&i.to_string(), "p", "t", *t))
            .collect()
    }

    #[test]
    fn test_distinct_tags_sorted() {
        let list = numbered(&[Some(3), Some(1), Some(2), Some(1), None]);
        assert_eq!(distinct_tags(&list), vec![1, 2, 3]);
    }

    #[test]
    fn test_zero_is_a_tag() {
        let list = numbered(&[Some(0), None, Some(5)]);
        assert_eq!(distinct_tags(&list), vec![0, 5]);

        let mut filter = TagFilter::new();
        filter.toggle(0);
        let visible = filter.visible(&list);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].rank, Some(0));
    }

    #[test]
    fn test_empty_selection_shows_all() {
        let list = numbered(&[Some(1), None, Some(2)]);
        assert_eq!(TagFilter::new().visible(&list), list);
    }

    #[test]
    fn test_selection_narrows_exactly() {
        let list = numbered(&[Some(3), Some(1), Some(2), Some(1)]);
        let mut filter = TagFilter::new();
        filter.toggle(1);
        filter.toggle(3);

        let visible = filter.visible(&list);
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|n| matches!(n.rank, Some(1) | Some(3))));
    }

    #[test]
    fn test_toggle_select_all_clear() {
        let mut filter = TagFilter::new();
        filter.toggle(2);
        assert!(filter.is_selected(2));
        filter.toggle(2);
        assert!(!filter.is_active());

        filter.select_all(&[1, 2, 3]);
        assert_eq!(filter.selection(), vec![1, 2, 3]);
        filter.clear_all();
        assert_eq!(filter.len(), 0);
    }

    #[test]
    fn test_removing_one_tag_keeps_the_rest() {
        let list = numbered(&[Some(1), Some(2), Some(3)]);
        let mut filter = TagFilter::new();
        filter.select_all(&[1, 2, 3]);

        filter.toggle(2);
        assert!(filter.is_active());
        assert_eq!(filter.selection(), vec![1, 3]);
        assert_eq!(filter.visible(&list).len(), 2);

        filter.toggle(1);
        filter.toggle(3);
        assert!(!filter.is_active());
        assert_eq!(filter.visible(&list), list);
    }

    #[test]
    fn test_retain_known_prunes_selection() {
        let mut filter = TagFilter::new();
        filter.select_all(&[1, 2, 3]);
        filter.retain_known(&[2]);
        assert_eq!(filter.selection(), vec![2]);

        filter.retain_known(&[]);
        assert!(!filter.is_active());
    }
}
