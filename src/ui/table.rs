/// Artwork table
///
/// Checkbox column, Title (with the bulk-select chevron), Origin, Artist,
/// Inscriptions, Start Year, End Year.

use iced::widget::{checkbox, column, container, horizontal_rule, row, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length};

use crate::state::browser::Browser;
use crate::state::data::Artwork;
use crate::Message;

use super::bulk_form;

/// Width of the checkbox column
const CHECK_WIDTH: f32 = 36.0;

/// Column headers after Title, with their relative widths
const COLUMNS: [(&str, u16); 5] = [
    ("Origin", 2),
    ("Artist", 4),
    ("Inscriptions", 4),
    ("Start Year", 1),
    ("End Year", 1),
];

const TITLE_PORTION: u16 = 4;

/// Render the artwork table for the current batch.
///
/// Checkbox state comes from the browser's Selection Store on every
/// render, so it can never drift from what is actually selected.
pub fn view(browser: &Browser) -> Element<'_, Message> {
    let header = header_row(browser);

    let rows: Vec<Element<Message>> = browser
        .batch()
        .records
        .iter()
        .map(|artwork| record_row(artwork, browser.is_selected(artwork.id)))
        .collect();

    let body: Element<Message> = if rows.is_empty() {
        let message = if browser.is_loading() {
            "Loading artworks..."
        } else {
            "No artworks to show."
        };
        container(text(message).size(14))
            .padding(20)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
    } else {
        scrollable(Column::with_children(rows).spacing(6))
            .height(Length::Fill)
            .into()
    };

    column![header, horizontal_rule(1), body]
        .spacing(8)
        .height(Length::Fill)
        .into()
}

fn header_row(browser: &Browser) -> Row<'_, Message> {
    let select_page = checkbox("", browser.page_fully_selected()).on_toggle(Message::PageToggled);

    let title = row![
        bulk_form::view(browser.row_count(), browser.bulk_panel_open()),
        text("Title").size(14),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let mut header = row![
        container(select_page).width(CHECK_WIDTH),
        container(title).width(Length::FillPortion(TITLE_PORTION)),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    for (label, portion) in COLUMNS {
        header = header.push(container(text(label).size(14)).width(Length::FillPortion(portion)));
    }
    header
}

fn record_row(artwork: &Artwork, selected: bool) -> Element<'_, Message> {
    let id = artwork.id;
    let cells = [
        artwork.place_of_origin.clone(),
        artwork.artist_display.clone(),
        artwork.inscriptions.clone(),
        artwork.date_start.to_string(),
        artwork.date_end.to_string(),
    ];

    let mut line = row![
        container(checkbox("", selected).on_toggle(move |checked| Message::RowToggled(id, checked)))
            .width(CHECK_WIDTH),
        container(text(&artwork.title).size(13)).width(Length::FillPortion(TITLE_PORTION)),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    for (value, (_, portion)) in cells.into_iter().zip(COLUMNS) {
        line = line.push(container(text(value).size(13)).width(Length::FillPortion(portion)));
    }
    line.into()
}
