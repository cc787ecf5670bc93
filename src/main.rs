use iced::widget::{column, container, row, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use std::sync::Arc;

mod config;
mod error;
mod source;
mod state;
mod ui;

use config::Config;
use error::FetchError;
use source::ArticClient;
use state::browser::{Browser, FetchOutcome, FetchTicket};
use state::data::{ArtworkId, Batch};

/// Main application state
struct ArtworkBrowser {
    /// Selection, current batch and request bookkeeping
    browser: Browser,
    /// Remote catalog (None if the HTTP client could not be built)
    source: Option<ArticClient>,
    config: Config,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Paginator asked for a page (1-based)
    PageRequested(u32),
    /// A page fetch finished, successfully or not
    PageLoaded(FetchTicket, Result<Batch, Arc<FetchError>>),
    /// Row checkbox clicked
    RowToggled(ArtworkId, bool),
    /// Header checkbox clicked
    PageToggled(bool),
    /// Chevron next to the Title header clicked
    BulkPanelToggled,
    /// Click outside the open bulk panel
    BulkPanelDismissed,
    /// Bulk row-count input edited
    RowCountChanged(String),
    /// Bulk form submitted
    BulkSubmitted,
}

impl ArtworkBrowser {
    /// Create a new instance of the application and start loading page 1
    fn new() -> (Self, Task<Message>) {
        let config = Config::load();

        let source = match ArticClient::new(&config) {
            Ok(client) => Some(client),
            Err(e) => {
                log::error!("Could not create HTTP client: {}", e);
                None
            }
        };

        Self::with_source(config, source)
    }

    /// Build the app around an optional record source and issue the first fetch
    fn with_source(config: Config, source: Option<ArticClient>) -> (Self, Task<Message>) {
        let (browser, ticket) = Browser::new(config.rows_per_page);

        let status = match &source {
            Some(client) => format!("Loading from {}...", client.api_url()),
            None => "Catalog unavailable.".to_string(),
        };
        log::info!("🎨 Artwork Browser started ({} rows per page)", config.rows_per_page);

        let mut app = ArtworkBrowser {
            browser,
            source,
            config,
            status,
        };
        let task = app.fetch(ticket);

        (app, task)
    }

    /// Launch the async fetch for `ticket`
    fn fetch(&mut self, ticket: FetchTicket) -> Task<Message> {
        match self.source.clone() {
            Some(client) => Task::perform(
                async move { client.fetch_page(ticket.page).await },
                move |result| Message::PageLoaded(ticket, result.map_err(Arc::new)),
            ),
            None => {
                // Nothing will ever answer, so settle the request right away
                let outcome = self.browser.settle_without_source(ticket);
                if outcome == FetchOutcome::Failed {
                    self.status = "Catalog unavailable.".to_string();
                }
                Task::none()
            }
        }
    }

    /// Update the status line after a fetch settled
    fn report(&mut self, ticket: FetchTicket, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Applied => {
                let at = self
                    .browser
                    .loaded_at()
                    .map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_default();
                self.status = format!("Page {} loaded at {}.", ticket.page, at);
            }
            FetchOutcome::Failed => {
                self.status = format!("Could not load page {}.", ticket.page);
            }
            FetchOutcome::Discarded => {}
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PageRequested(page) => {
                if let Some(ticket) = self.browser.request_page(page) {
                    return self.fetch(ticket);
                }
                Task::none()
            }
            Message::PageLoaded(ticket, result) => {
                let outcome = self.browser.apply_fetch(ticket, result);
                self.report(ticket, outcome);
                Task::none()
            }
            Message::RowToggled(id, checked) => {
                self.browser.toggle_row(id, checked);
                Task::none()
            }
            Message::PageToggled(checked) => {
                self.browser.toggle_page(checked);
                Task::none()
            }
            Message::BulkPanelToggled => {
                self.browser.toggle_bulk_panel();
                Task::none()
            }
            Message::BulkPanelDismissed => {
                self.browser.dismiss_bulk_panel();
                Task::none()
            }
            Message::RowCountChanged(raw) => {
                self.browser.set_row_count(raw);
                Task::none()
            }
            Message::BulkSubmitted => {
                self.browser.submit_bulk();
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut counter = row![
            text("Selected Rows:").size(16),
            text(self.browser.selected_count().to_string()).size(16),
        ]
        .spacing(6)
        .align_y(Alignment::Center);

        if self.browser.is_loading() {
            counter = counter.push(text("Loading...").size(13));
        }

        let content: Column<Message> = column![
            counter,
            ui::table::view(&self.browser),
            ui::paginator::view(&self.browser, self.config.page_links),
            text(&self.status).size(12),
        ]
        .spacing(16)
        .padding(24)
        .max_width(1200.0);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    iced::application(
        "Artwork Browser",
        ArtworkBrowser::update,
        ArtworkBrowser::view,
    )
    .theme(ArtworkBrowser::theme)
    .centered()
    .run_with(ArtworkBrowser::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Artwork;

    fn first_ticket() -> FetchTicket {
        FetchTicket { page: 1, generation: 1 }
    }

    fn online_app() -> ArtworkBrowser {
        let config = Config::default();
        let client = ArticClient::new(&config).unwrap();
        let (app, _task) = ArtworkBrowser::with_source(config, Some(client));
        app
    }

    fn one_artwork_batch() -> Batch {
        Batch {
            records: vec![Artwork {
                id: 27992,
                title: "A Sunday on La Grande Jatte".to_string(),
                place_of_origin: "France".to_string(),
                artist_display: "Georges Seurat".to_string(),
                inscriptions: "-".to_string(),
                date_start: 1884,
                date_end: 1886,
            }],
            total: 1,
        }
    }

    #[test]
    fn test_without_source_first_load_settles() {
        let (app, _task) = ArtworkBrowser::with_source(Config::default(), None);

        assert!(!app.browser.is_loading());
        assert!(app.browser.batch().is_empty());
        assert_eq!(app.status, "Catalog unavailable.");
    }

    #[test]
    fn test_without_source_page_request_settles() {
        let (mut app, _task) = ArtworkBrowser::with_source(Config::default(), None);

        let _ = app.update(Message::PageRequested(1));

        assert!(!app.browser.is_loading());
        assert_eq!(app.status, "Catalog unavailable.");
    }

    #[test]
    fn test_loaded_page_updates_status() {
        let mut app = online_app();
        assert!(app.browser.is_loading());
        assert!(app.status.starts_with("Loading from "));

        let _ = app.update(Message::PageLoaded(first_ticket(), Ok(one_artwork_batch())));

        assert!(!app.browser.is_loading());
        assert!(app.status.starts_with("Page 1 loaded at "), "status {:?}", app.status);
        assert_eq!(app.browser.batch().len(), 1);
    }

    #[test]
    fn test_failed_page_updates_status() {
        let mut app = online_app();

        let error = Arc::new(FetchError::Status(502));
        let _ = app.update(Message::PageLoaded(first_ticket(), Err(error)));

        assert!(!app.browser.is_loading());
        assert_eq!(app.status, "Could not load page 1.");
    }

    #[test]
    fn test_stale_page_leaves_status() {
        let mut app = online_app();
        let _ = app.update(Message::PageLoaded(first_ticket(), Ok(one_artwork_batch())));
        let before = app.status.clone();

        let stale = FetchTicket { page: 1, generation: 0 };
        let _ = app.update(Message::PageLoaded(stale, Err(Arc::new(FetchError::Status(500)))));

        assert_eq!(app.status, before);
        assert_eq!(app.browser.batch().len(), 1);
    }

    #[test]
    fn test_row_toggle_and_bulk_messages() {
        let mut app = online_app();
        let _ = app.update(Message::PageLoaded(first_ticket(), Ok(one_artwork_batch())));

        let _ = app.update(Message::RowToggled(27992, true));
        assert_eq!(app.browser.selected_count(), 1);
        let _ = app.update(Message::RowToggled(27992, false));
        assert_eq!(app.browser.selected_count(), 0);

        let _ = app.update(Message::BulkPanelToggled);
        let _ = app.update(Message::RowCountChanged("5".to_string()));
        let _ = app.update(Message::BulkSubmitted);
        assert_eq!(app.browser.selected_count(), 1);
        assert!(!app.browser.bulk_panel_open());
    }
}
