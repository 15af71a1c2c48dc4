//! Selection Tracker
//!
//! Ids picked for batch deletion while delete mode is on.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<u32>,
}

impl SelectionSet {
    /// Flip membership; returns whether the id is now selected
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ascending order
    pub fn ids(&self) -> Vec<u32> {
        self.ids.iter().copied().collect()
    }

    pub fn remove_all(&mut self, ids: &[u32]) {
        for id in ids {
            self.ids.remove(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut selection = SelectionSet::default();
        assert!(selection.toggle(5));
        assert!(selection.toggle(3));
        assert_eq!(selection.ids(), vec![3, 5]);
        assert!(!selection.toggle(5));
        assert_eq!(selection.selected_count(), 1);
        assert!(!selection.contains(5));
    }

    #[test]
    fn test_remove_all() {
        let mut selection = SelectionSet::default();
        selection.toggle(1);
        selection.toggle(2);
        selection.remove_all(&[2, 9]);
        assert_eq!(selection.ids(), vec![1]);
        selection.clear();
        assert!(selection.is_empty());
    }
}
