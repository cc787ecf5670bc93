/// Wire format of the catalog's paginated artworks endpoint
///
/// ```text
/// { "data": [ { "id": 1, "title": "...", ... } ], "pagination": { "total": 123 } }
/// ```
///
/// Missing fields are defaulted the way the table expects them. A field
/// that is present but empty (`""`, `0`, `null`) counts as missing.

use serde::Deserialize;

use crate::error::FetchError;
use crate::state::data::{Artwork, ArtworkId, Batch, DEFAULT_TOTAL};

const UNTITLED: &str = "Untitled";
const UNKNOWN_ORIGIN: &str = "Unknown";
const UNKNOWN_ARTIST: &str = "Not Available";
const NO_INSCRIPTIONS: &str = "-";

#[derive(Debug, Deserialize)]
pub struct ArtworksPage {
    pub data: Vec<RawArtwork>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total: Option<u64>,
}

/// One artwork as sent by the catalog, before defaulting
#[derive(Debug, Deserialize)]
pub struct RawArtwork {
    pub id: ArtworkId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i64>,
    #[serde(default)]
    pub date_end: Option<i64>,
}

fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| placeholder.to_string())
}

impl From<RawArtwork> for Artwork {
    fn from(raw: RawArtwork) -> Self {
        Artwork {
            id: raw.id,
            title: or_placeholder(raw.title, UNTITLED),
            place_of_origin: or_placeholder(raw.place_of_origin, UNKNOWN_ORIGIN),
            artist_display: or_placeholder(raw.artist_display, UNKNOWN_ARTIST),
            inscriptions: or_placeholder(raw.inscriptions, NO_INSCRIPTIONS),
            date_start: raw.date_start.unwrap_or(0),
            date_end: raw.date_end.unwrap_or(0),
        }
    }
}

impl From<ArtworksPage> for Batch {
    fn from(page: ArtworksPage) -> Self {
        let total = page
            .pagination
            .and_then(|p| p.total)
            .filter(|&t| t > 0)
            .and_then(|t| usize::try_from(t).ok())
            .unwrap_or(DEFAULT_TOTAL);

        Batch {
            records: page.data.into_iter().map(Artwork::from).collect(),
            total,
        }
    }
}

/// Decode a response body into a batch
pub fn decode_page(body: &[u8]) -> Result<Batch, FetchError> {
    let page: ArtworksPage = serde_json::from_slice(body)?;
    Ok(page.into())
}
