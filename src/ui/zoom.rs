// src/ui/zoom.rs

use iced::widget::{column, container, horizontal_space, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::messages::Message;
use crate::ui::styles::{CardStyle, INK, MUTED};
use crate::ui::{join_button, muted, section_header};
use crate::zoom::{ZoomListing, NO_ZOOM_LINKS};

pub fn view(listing: &ZoomListing) -> Element<'_, Message> {
    if listing.is_empty() {
        return column![section_header("Zoom Links"), muted(NO_ZOOM_LINKS)]
            .spacing(20)
            .into();
    }

    let entries = listing
        .entries()
        .iter()
        .map(|entry| {
            container(
                row![
                    column![
                        text(&entry.date).size(12).style(iced::theme::Text::Color(MUTED)),
                        text(&entry.agenda).size(16).style(iced::theme::Text::Color(INK)),
                        text(&entry.decisions).size(13),
                    ]
                    .spacing(4),
                    horizontal_space(),
                    join_button(entry.join_label(), &entry.link.url),
                ]
                .align_items(Alignment::Center),
            )
            .padding(16)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(CardStyle)))
            .into()
        })
        .collect::<Vec<Element<Message>>>();

    column![section_header("Zoom Links"), scrollable(column(entries).spacing(10))]
        .spacing(20)
        .into()
}
