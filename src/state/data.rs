/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the record source and the UI layer.

/// Catalog-wide unique identifier of an artwork
pub type ArtworkId = i64;

/// Total record count assumed when the catalog does not report one
pub const DEFAULT_TOTAL: usize = 100;

/// Represents a single artwork row in the table
///
/// Records are immutable once fetched. Placeholders for missing
/// fields are filled in by the record source, never here.
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    /// Unique across the whole catalog, not just within a page
    pub id: ArtworkId,
    pub title: String,
    pub place_of_origin: String,
    pub artist_display: String,
    pub inscriptions: String,
    /// Start year (0 when unknown)
    pub date_start: i64,
    /// End year (0 when unknown)
    pub date_end: i64,
}

/// One page worth of records plus the catalog's total count
///
/// A batch is replaced wholesale when the page changes; batches are
/// never merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Batch {
    /// Records in display order
    pub records: Vec<Artwork>,
    /// Total number of records in the entire catalog
    pub total: usize,
}

impl Batch {
    /// An empty batch, displayed before the first page arrives
    pub fn empty() -> Self {
        Self::default()
    }

    /// Identifiers of the records in batch order
    pub fn ids(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.records.iter().map(|r| r.id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn artwork(id: ArtworkId) -> Artwork {
    Artwork {
        id,
        title: format!("Artwork {}", id),
        place_of_origin: "Unknown".to_string(),
        artist_display: "Not Available".to_string(),
        inscriptions: "-".to_string(),
        date_start: 0,
        date_end: 0,
    }
}

/// Build a batch from a list of ids (test helper)
#[cfg(test)]
pub(crate) fn batch_of(ids: &[ArtworkId], total: usize) -> Batch {
    Batch {
        records: ids.iter().copied().map(artwork).collect(),
        total,
    }
}
