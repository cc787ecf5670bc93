/// Browsing session
///
/// Ties the Selection Store, the latest batch and page fetch bookkeeping
/// together. Out-of-order responses are resolved here with a generation
/// counter carried by each `FetchTicket`.

use chrono::{DateTime, Local};
use std::fmt::Display;

use super::bulk::{self, BulkOutcome};
use super::data::{Artwork, ArtworkId, Batch};
use super::pagination;
use super::projector;
use super::selection::SelectionStore;

/// Handle for one issued page fetch
///
/// Only the ticket with the latest generation may replace the batch.
/// Responses carrying an older ticket are stale and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub page: u32,
    pub generation: u64,
}

/// What happened to a fetch result handed to `apply_fetch`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The batch for the current page replaced the displayed one
    Applied,
    /// The response belongs to a superseded request; nothing changed
    Discarded,
    /// The current request failed; the prior batch stays on screen
    Failed,
}

/// The browsing session
///
/// Owns the Selection Store, the latest arrived batch and the request
/// bookkeeping. Every mutation happens synchronously inside one UI update,
/// so the store's replace-then-add sequence is never observed half done.
#[derive(Debug)]
pub struct Browser {
    selection: SelectionStore,
    batch: Batch,
    rows_per_page: usize,
    /// Page the user asked for most recently (may still be loading)
    page: u32,
    /// Page the displayed batch belongs to (None before the first success)
    shown_page: Option<u32>,
    /// Generation of the most recently issued fetch
    generation: u64,
    loading: bool,
    loaded_at: Option<DateTime<Local>>,
    /// Raw text of the bulk-select input
    row_count: String,
    bulk_panel_open: bool,
}

impl Browser {
    /// Start a session on page 1. Returns the ticket for the initial fetch.
    pub fn new(rows_per_page: usize) -> (Self, FetchTicket) {
        let browser = Self {
            selection: SelectionStore::new(),
            batch: Batch::empty(),
            rows_per_page: rows_per_page.max(1),
            page: 1,
            shown_page: None,
            generation: 1,
            loading: true,
            loaded_at: None,
            row_count: String::new(),
            bulk_panel_open: false,
        };
        let ticket = browser.current_ticket();
        (browser, ticket)
    }

    fn current_ticket(&self) -> FetchTicket {
        FetchTicket {
            page: self.page,
            generation: self.generation,
        }
    }

    // ========== Pagination ==========

    /// Handle a "page changed" event.
    ///
    /// Returns a ticket when a fetch must be issued, or `None` when the page
    /// is already on screen or already in flight. The displayed batch is left
    /// alone until the matching response arrives.
    pub fn request_page(&mut self, page: u32) -> Option<FetchTicket> {
        let page = page.clamp(1, self.page_count());

        if self.shown_page == Some(page) {
            if self.loading {
                // Back on the page already displayed: whatever is in flight loses
                self.generation += 1;
                self.loading = false;
            }
            self.page = page;
            return None;
        }
        if self.loading && page == self.page {
            return None;
        }

        self.page = page;
        self.generation += 1;
        self.loading = true;
        Some(self.current_ticket())
    }

    /// Handle a "batch arrived" event (success or failure).
    pub fn apply_fetch<E: Display>(
        &mut self,
        ticket: FetchTicket,
        result: Result<Batch, E>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            log::debug!(
                "Discarding stale response for page {} (generation {}, latest {})",
                ticket.page,
                ticket.generation,
                self.generation
            );
            return FetchOutcome::Discarded;
        }

        self.loading = false;
        match result {
            Ok(batch) => {
                log::info!(
                    "📄 Page {} loaded: {} records, {} in catalog",
                    ticket.page,
                    batch.len(),
                    batch.total
                );
                self.batch = batch;
                self.shown_page = Some(ticket.page);
                self.loaded_at = Some(Local::now());
                FetchOutcome::Applied
            }
            Err(e) => {
                log::error!("Error fetching artworks for page {}: {}", ticket.page, e);
                // The paginator follows what is actually on screen
                if let Some(shown) = self.shown_page {
                    self.page = shown;
                }
                FetchOutcome::Failed
            }
        }
    }

    /// Settle `ticket` as failed when there is no record source to ask.
    ///
    /// Without this the loading indicator would never clear.
    pub fn settle_without_source(&mut self, ticket: FetchTicket) -> FetchOutcome {
        self.apply_fetch(ticket, Err::<Batch, _>("no record source available"))
    }

    // ========== Selection ==========

    /// Reconcile the checkbox state of the visible page.
    ///
    /// `newly_selected` is the full set of ids left checked on this page.
    pub fn on_selection_changed<I>(&mut self, newly_selected: I)
    where
        I: IntoIterator<Item = ArtworkId>,
    {
        self.selection
            .replace_page_selection(self.batch.ids(), newly_selected);
    }

    /// A single row checkbox was clicked
    pub fn toggle_row(&mut self, id: ArtworkId, checked: bool) {
        let mut checked_on_page: Vec<ArtworkId> = self
            .page_selection()
            .iter()
            .map(|r| r.id)
            .filter(|&other| other != id)
            .collect();
        if checked && self.batch.ids().any(|other| other == id) {
            checked_on_page.push(id);
        }
        self.on_selection_changed(checked_on_page);
    }

    /// The header checkbox was clicked: select or clear the whole page
    pub fn toggle_page(&mut self, checked: bool) {
        let page_ids: Vec<ArtworkId> = if checked {
            self.batch.ids().collect()
        } else {
            Vec::new()
        };
        self.on_selection_changed(page_ids);
    }

    // ========== Bulk select ==========

    pub fn set_row_count(&mut self, raw: String) {
        self.row_count = raw;
    }

    pub fn toggle_bulk_panel(&mut self) {
        self.bulk_panel_open = !self.bulk_panel_open;
    }

    pub fn dismiss_bulk_panel(&mut self) {
        self.bulk_panel_open = false;
    }

    /// Submit the bulk-select form against the currently loaded batch.
    ///
    /// The input is cleared and the panel closed whatever the outcome.
    pub fn submit_bulk(&mut self) -> BulkOutcome {
        let outcome = bulk::select_first(&self.row_count, &self.batch, &mut self.selection);
        match outcome {
            BulkOutcome::Added { requested, added } => log::info!(
                "✅ Bulk select: requested {}, added first {} rows ({} selected)",
                requested,
                added,
                self.selection.size()
            ),
            BulkOutcome::IgnoredInvalidInput => {
                log::debug!("Ignoring bulk select input {:?}", self.row_count)
            }
        }

        self.row_count.clear();
        self.bulk_panel_open = false;
        outcome
    }

    // ========== Read side ==========

    /// Latest arrived batch
    pub fn batch(&self) -> &Batch {
        &self.batch
    }

    /// Selected records of the displayed batch, recomputed on every call
    pub fn page_selection(&self) -> Vec<&Artwork> {
        projector::project(&self.batch, &self.selection)
    }

    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.selection.contains(id)
    }

    pub fn page_fully_selected(&self) -> bool {
        projector::all_selected(&self.batch, &self.selection)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.size()
    }

    #[cfg(test)]
    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Page the paginator highlights (1-based): the last request, or the
    /// displayed page again once that request has failed
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_count(&self) -> u32 {
        pagination::page_count(self.batch.total, self.rows_per_page)
    }

    /// Page the displayed batch belongs to
    #[cfg(test)]
    pub fn shown_page(&self) -> Option<u32> {
        self.shown_page
    }

    /// Zero-based index of the first row of the displayed batch
    pub fn first_row(&self) -> usize {
        pagination::first_row(self.shown_page.unwrap_or(self.page), self.rows_per_page)
    }

    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }

    pub fn row_count(&self) -> &str {
        &self.row_count
    }

    pub fn bulk_panel_open(&self) -> bool {
        self.bulk_panel_open
    }
}
