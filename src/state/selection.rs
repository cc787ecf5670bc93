/// Selection Store
///
/// Session-lifetime set of selected artwork ids, independent of pagination.

use std::collections::HashSet;

use super::data::ArtworkId;

/// The Selection Store owns every identifier the user has marked,
/// across all pages visited during the session.
///
/// It holds identifiers only, never records, and is the single source of
/// truth for what is selected. The per-page view is always derived from it
/// (see `projector`). All operations are total: any id value is accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionStore {
    ids: HashSet<ArtworkId>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile a page-level selection change.
    ///
    /// Every id in `page_ids` is cleared first, then every id in
    /// `newly_selected` is added. Ids belonging to other pages are untouched,
    /// which is what keeps selection alive across pagination.
    pub fn replace_page_selection<P, S>(&mut self, page_ids: P, newly_selected: S)
    where
        P: IntoIterator<Item = ArtworkId>,
        S: IntoIterator<Item = ArtworkId>,
    {
        for id in page_ids {
            self.ids.remove(&id);
        }
        self.ids.extend(newly_selected);
    }

    /// Union the given ids into the selection. Never removes anything.
    pub fn add_ids<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ArtworkId>,
    {
        self.ids.extend(ids);
    }

    /// Total selected count across all pages
    pub fn size(&self) -> usize {
        self.ids.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    /// Iterate the selected ids (unordered)
    #[cfg(test)]
    pub fn ids(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.ids.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(ids: &[ArtworkId]) -> SelectionStore {
        let mut store = SelectionStore::new();
        store.add_ids(ids.iter().copied());
        store
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = SelectionStore::new();
        assert!(store.is_empty());
        assert_eq!(store.size(), 0);
        assert!(!store.contains(1));
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let page = [1, 2, 3];
        let mut store = store_with(&[40, 41]);
        let before = store.clone();

        // Check id 2, then uncheck it again on the same page
        store.replace_page_selection(page, [2]);
        assert!(store.contains(2));
        store.replace_page_selection(page, []);

        assert_eq!(store, before);
    }

    #[test]
    fn test_reconciliation_isolated_to_page() {
        // 1,2,3 selected on page A, 40,41 on some other page
        let mut store = store_with(&[1, 2, 3, 40, 41]);

        // User deselects 2 while on page A
        store.replace_page_selection([1, 2, 3, 4, 5], [1, 3]);

        let mut ids: Vec<_> = store.ids().collect();
        ids.sort();
        assert_eq!(ids, vec![1, 3, 40, 41]);
    }

    #[test]
    fn test_add_ids_is_union() {
        let mut store = store_with(&[1, 2]);
        store.add_ids([2, 3, 3]);

        assert_eq!(store.size(), 3);
        assert!(store.contains(1));
        assert!(store.contains(3));
    }

    #[test]
    fn test_any_id_value_is_accepted() {
        let mut store = SelectionStore::new();
        store.add_ids([i64::MIN, -1, 0, i64::MAX]);
        assert_eq!(store.size(), 4);

        store.replace_page_selection([-1, 999], []);
        assert_eq!(store.size(), 3);
        assert!(!store.contains(-1));
    }
}
