/// Bulk selection ("select first N rows")
///
/// The count is interpreted against the currently loaded batch only.
/// Later pages are never fetched to satisfy a large N; the count is
/// clamped to what is on screen instead.

use super::data::Batch;
use super::selection::SelectionStore;

/// Result of a bulk-select submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkOutcome {
    /// `added` ids (the first `added` of the batch) were unioned into the store
    Added { requested: usize, added: usize },
    /// The input was not a positive integer; the store is unchanged
    IgnoredInvalidInput,
}

/// Parse the user's row count.
///
/// Relaxed leading-integer rule, like a web form number field: whitespace
/// is trimmed, an optional sign is allowed, the leading decimal digits are
/// the value and anything after them is ignored ("12abc" is 12, "3.9" is 3).
/// Returns `None` when there are no leading digits or the value is not
/// positive. Huge values saturate to `usize::MAX`.
pub fn parse_count(raw: &str) -> Option<usize> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let leading = digits.bytes().take_while(u8::is_ascii_digit);
    let mut value: usize = 0;
    let mut seen_digit = false;
    for digit in leading {
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(usize::from(digit - b'0'));
    }

    if !seen_digit || negative || value == 0 {
        return None;
    }
    Some(value)
}

/// Add the first N ids of `batch` (in batch order) to `store`.
///
/// Invalid input is a soft failure reported as `IgnoredInvalidInput`,
/// never an error.
pub fn select_first(raw: &str, batch: &Batch, store: &mut SelectionStore) -> BulkOutcome {
    let Some(requested) = parse_count(raw) else {
        return BulkOutcome::IgnoredInvalidInput;
    };

    let added = requested.min(batch.len());
    store.add_ids(batch.ids().take(added));

    BulkOutcome::Added { requested, added }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::batch_of;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("5"), Some(5));
        assert_eq!(parse_count("  7 "), Some(7));
        assert_eq!(parse_count("+3"), Some(3));
        assert_eq!(parse_count("12abc"), Some(12));
        assert_eq!(parse_count("3.9"), Some(3));
        assert_eq!(parse_count("99999999999999999999999999"), Some(usize::MAX));
    }

    #[test]
    fn test_parse_count_rejects() {
        for raw in ["", "   ", "abc", "-5", "0", "-0", "+", "-", "x12"] {
            assert_eq!(parse_count(raw), None, "input {:?}", raw);
        }
    }

    #[test]
    fn test_select_first_n() {
        let batch = batch_of(&[10, 11, 12, 13, 14], 100);
        let mut store = SelectionStore::new();

        let outcome = select_first("3", &batch, &mut store);

        assert_eq!(outcome, BulkOutcome::Added { requested: 3, added: 3 });
        assert!(store.contains(10) && store.contains(11) && store.contains(12));
        assert!(!store.contains(13));
    }

    #[test]
    fn test_select_clamps_to_batch() {
        let ids: Vec<i64> = (1..=10).collect();
        let batch = batch_of(&ids, 100);
        let mut store = SelectionStore::new();

        let outcome = select_first("15", &batch, &mut store);

        assert_eq!(outcome, BulkOutcome::Added { requested: 15, added: 10 });
        assert_eq!(store.size(), 10);
        assert!(ids.iter().all(|&id| store.contains(id)));
    }

    #[test]
    fn test_invalid_input_changes_nothing() {
        let batch = batch_of(&[1, 2, 3], 100);
        let mut store = SelectionStore::new();
        store.add_ids([99]);
        let before = store.clone();

        assert_eq!(select_first("-5", &batch, &mut store), BulkOutcome::IgnoredInvalidInput);
        assert_eq!(select_first("abc", &batch, &mut store), BulkOutcome::IgnoredInvalidInput);
        assert_eq!(store, before);
    }

    #[test]
    fn test_bulk_keeps_existing_selection() {
        let batch = batch_of(&[1, 2, 3], 100);
        let mut store = SelectionStore::new();
        store.add_ids([3, 50]);

        select_first("1", &batch, &mut store);

        let mut ids: Vec<_> = store.ids().collect();
        ids.sort();
        assert_eq!(ids, vec![1, 3, 50]);
    }

    #[test]
    fn test_empty_batch_adds_nothing() {
        let mut store = SelectionStore::new();
        let outcome = select_first("4", &Batch::empty(), &mut store);

        assert_eq!(outcome, BulkOutcome::Added { requested: 4, added: 0 });
        assert!(store.is_empty());
    }
}
