/// "Select first N rows" drop-down form

use iced::widget::{button, column, container, text, text_input};
use iced::{Element, Length};
use iced_aw::DropDown;

use crate::Message;

/// Width of the floating panel
const PANEL_WIDTH: f32 = 150.0;

/// Chevron next to the Title header that opens the "select first N rows"
/// panel. Pressing Enter in the field or the Submit button both submit.
pub fn view<'a>(row_count: &'a str, expanded: bool) -> Element<'a, Message> {
    let trigger = button(text("▾").size(14))
        .on_press(Message::BulkPanelToggled)
        .padding([0, 4])
        .style(button::text);

    let form = column![
        text_input("Enter rows", row_count)
            .on_input(Message::RowCountChanged)
            .on_submit(Message::BulkSubmitted)
            .padding(6)
            .size(14),
        button(text("Submit").size(13))
            .on_press(Message::BulkSubmitted)
            .padding([4, 10]),
    ]
    .spacing(8)
    .width(PANEL_WIDTH);

    let panel = container(form)
        .padding(6)
        .width(Length::Shrink)
        .style(container::rounded_box);

    DropDown::new(trigger, panel, expanded)
        .on_dismiss(Message::BulkPanelDismissed)
        .into()
}
