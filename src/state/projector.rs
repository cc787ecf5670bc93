/// Page Projector
///
/// Derives which rows of the displayed batch are selected.

use super::data::{Artwork, Batch};
use super::selection::SelectionStore;

/// Derive the Page Selection View: the records of `batch` whose id is in
/// `store`, in batch order.
///
/// Pure function of its inputs. Call it on every render instead of
/// caching the result; a stale view would desync the checkboxes from the
/// store. Selected ids that are not in the batch are simply absent.
pub fn project<'a>(batch: &'a Batch, store: &SelectionStore) -> Vec<&'a Artwork> {
    batch
        .records
        .iter()
        .filter(|record| store.contains(record.id))
        .collect()
}

/// True when every record of a non-empty batch is selected (header checkbox)
pub fn all_selected(batch: &Batch, store: &SelectionStore) -> bool {
    !batch.is_empty() && batch.ids().all(|id| store.contains(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{batch_of, ArtworkId};

    fn ids(view: &[&Artwork]) -> Vec<ArtworkId> {
        view.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_projection_preserves_batch_order() {
        let batch = batch_of(&[5, 3, 9, 1], 100);
        let mut store = SelectionStore::new();
        store.add_ids([1, 5, 9]);

        assert_eq!(ids(&project(&batch, &store)), vec![5, 9, 1]);
    }

    #[test]
    fn test_projection_is_repeatable() {
        let batch = batch_of(&[10, 20, 30], 100);
        let mut store = SelectionStore::new();
        store.add_ids([30, 10]);

        let first = ids(&project(&batch, &store));
        let second = ids(&project(&batch, &store));
        assert_eq!(first, second);
    }

    #[test]
    fn test_store_change_only_changes_membership() {
        let batch = batch_of(&[10, 20, 30, 40], 100);
        let mut store = SelectionStore::new();
        store.add_ids([10, 30, 40]);
        assert_eq!(ids(&project(&batch, &store)), vec![10, 30, 40]);

        store.add_ids([20]);
        assert_eq!(ids(&project(&batch, &store)), vec![10, 20, 30, 40]);

        store.replace_page_selection(batch.ids(), [40, 10]);
        assert_eq!(ids(&project(&batch, &store)), vec![10, 40]);
    }

    #[test]
    fn test_ids_from_other_pages_are_ignored() {
        let batch = batch_of(&[1, 2], 100);
        let mut store = SelectionStore::new();
        store.add_ids([77, 78]);

        assert!(project(&batch, &store).is_empty());
        assert_eq!(store.size(), 2);
    }

    #[test]
    fn test_all_selected() {
        let batch = batch_of(&[1, 2], 100);
        let mut store = SelectionStore::new();
        assert!(!all_selected(&batch, &store));

        store.add_ids([1, 2, 3]);
        assert!(all_selected(&batch, &store));

        assert!(!all_selected(&Batch::empty(), &store));
    }
}
