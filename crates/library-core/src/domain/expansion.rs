//! Expansion Set
//!
//! Which folders are shown expanded. Pure view state, never sent to the backend.

use std::collections::HashSet;

use super::folder::FolderId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet {
    expanded: HashSet<FolderId>,
}

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &FolderId) -> bool {
        self.expanded.contains(id)
    }

    /// Flip a folder's state, returns the new state
    pub fn toggle(&mut self, id: &FolderId) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.clone());
            true
        }
    }

    pub fn remove(&mut self, id: &FolderId) {
        self.expanded.remove(id);
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_collapses() {
        let mut set = ExpansionSet::new();
        let id = FolderId::new("folder-1");
        assert!(set.toggle(&id));
        assert!(set.is_expanded(&id));
        assert!(!set.toggle(&id));
        assert!(set.is_empty());
    }
}
