/// Page navigation under the table

use iced::widget::{button, horizontal_space, row, text, Row};
use iced::{Alignment, Element};

use crate::state::browser::Browser;
use crate::state::pagination;
use crate::Message;

/// First / previous / numbered links / next / last, plus a
/// "Showing X to Y of Z" summary on the left.
pub fn view(browser: &Browser, link_count: u32) -> Element<'_, Message> {
    let page = browser.page();
    let page_count = browser.page_count();
    let has_prev = page > 1;
    let has_next = page < page_count;

    let nav = |label: &'static str, target: u32, enabled: bool| {
        button(text(label).size(14))
            .on_press_maybe(enabled.then_some(Message::PageRequested(target)))
            .padding([4, 10])
            .style(button::secondary)
    };

    let mut links: Row<Message> = row![
        nav("«", 1, has_prev),
        nav("‹", page.saturating_sub(1), has_prev),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    for target in pagination::page_links(page, page_count, link_count) {
        let style = if target == page {
            button::primary
        } else {
            button::secondary
        };
        links = links.push(
            button(text(target.to_string()).size(14))
                .on_press(Message::PageRequested(target))
                .padding([4, 10])
                .style(style),
        );
    }

    links = links
        .push(nav("›", page + 1, has_next))
        .push(nav("»", page_count, has_next));

    row![text(summary(browser)).size(13), horizontal_space(), links]
        .align_y(Alignment::Center)
        .into()
}

fn summary(browser: &Browser) -> String {
    let shown = browser.batch().len();
    if shown == 0 {
        return format!("Page {} of {}", browser.page(), browser.page_count());
    }
    let first = browser.first_row() + 1;
    format!(
        "Showing {} to {} of {}",
        first,
        first + shown - 1,
        browser.batch().total
    )
}
