// src/ui/calendar.rs

use chrono::NaiveDate;
use iced::widget::{button, column, container, horizontal_space, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use crate::calendar::{CalendarState, DayCell, DraftField};
use crate::messages::Message;
use crate::ui::styles::{CardStyle, DayCellStyle, INK, MUTED};
use crate::ui::{input_style, join_button, muted, primary_button, section_header};
use crate::utils::meeting_link;

const CELL_SIZE: f32 = 44.0;

pub fn view(state: &CalendarState, today: NaiveDate) -> Element<'_, Message> {
    let grid = state.project(today);

    let nav_button = |label, delta| {
        button(text(label).size(18))
            .on_press(Message::CalendarNavigate(delta))
            .padding([5, 15])
            .style(iced::theme::Button::Text)
    };

    let header = row![
        nav_button("‹", -1),
        text(&grid.month_label)
            .size(20)
            .width(200)
            .horizontal_alignment(iced::alignment::Horizontal::Center)
            .style(iced::theme::Text::Color(INK)),
        nav_button("›", 1),
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    let weekdays = row(grid
        .weekday_headers
        .iter()
        .map(|label| {
            text(*label)
                .size(12)
                .width(CELL_SIZE)
                .horizontal_alignment(iced::alignment::Horizontal::Center)
                .style(iced::theme::Text::Color(MUTED))
                .into()
        })
        .collect::<Vec<Element<Message>>>())
    .spacing(6);

    let mut weeks = column![weekdays].spacing(6);
    for week in grid.weeks() {
        weeks = weeks.push(row(week.iter().map(day_cell).collect::<Vec<Element<Message>>>()).spacing(6));
    }

    let board = container(column![header, weeks].spacing(16).align_items(Alignment::Center))
        .padding(20)
        .style(iced::theme::Container::Custom(Box::new(CardStyle)));

    let mut content = row![board].spacing(20);
    if let Some(date) = state.selected_date() {
        content = content.push(modal(state, date));
    }

    column![section_header("Calendar"), content].spacing(20).into()
}

fn day_cell(cell: &DayCell) -> Element<'static, Message> {
    let (Some(day), Some(date)) = (cell.day, cell.iso_date.clone()) else {
        return container(text(""))
            .width(CELL_SIZE)
            .height(CELL_SIZE)
            .into();
    };

    button(
        text(day.to_string())
            .size(14)
            .width(Length::Fill)
            .horizontal_alignment(iced::alignment::Horizontal::Center),
    )
    .width(CELL_SIZE)
    .height(CELL_SIZE)
    .padding([12, 0])
    .style(iced::theme::Button::Custom(Box::new(DayCellStyle {
        has_meeting: cell.has_meeting,
        is_today: cell.is_today,
    })))
    .on_press(Message::CalendarSelectDate(date))
    .into()
}

fn modal<'a>(state: &'a CalendarState, date: &'a str) -> Element<'a, Message> {
    let meetings = state.modal_meetings();

    let listing: Element<Message> = if meetings.is_empty() {
        muted("No meetings for this date.").into()
    } else {
        column(
            meetings
                .into_iter()
                .map(|meeting| {
                    let mut entry = column![
                        text(format!("Agenda: {}", meeting.agenda)).size(14),
                        text(format!("Decisions: {}", meeting.decisions)).size(14),
                    ]
                    .spacing(4);
                    if let Some(link) = meeting_link(&meeting.zoom) {
                        entry = entry.push(join_button(format!("Join {}", link.platform), &link.url));
                    }
                    container(entry).padding([8, 0]).into()
                })
                .collect::<Vec<Element<Message>>>(),
        )
        .spacing(6)
        .into()
    };

    let draft = state.draft();
    let form = column![
        draft_input("YYYY-MM-DD", &draft.date, DraftField::Date),
        draft_input("Agenda", &draft.agenda, DraftField::Agenda),
        draft_input("Decisions", &draft.decisions, DraftField::Decisions),
        draft_input("Zoom link (optional)", &draft.zoom, DraftField::Zoom),
        primary_button("Add Meeting", Message::CalendarSubmit),
    ]
    .spacing(8);

    let header = row![
        text(format!("Meetings for {}", date)).size(18).style(iced::theme::Text::Color(INK)),
        horizontal_space(),
        button(text("Close").size(13))
            .style(iced::theme::Button::Text)
            .on_press(Message::CalendarCloseModal),
    ]
    .align_items(Alignment::Center);

    container(column![header, scrollable(listing).height(Length::Shrink), form].spacing(16))
        .width(340)
        .padding(20)
        .style(iced::theme::Container::Custom(Box::new(CardStyle)))
        .into()
}

fn draft_input<'a>(placeholder: &str, value: &str, field: DraftField) -> iced::widget::TextInput<'a, Message> {
    text_input(placeholder, value)
        .on_input(move |v| Message::CalendarDraftChanged(field, v))
        .on_submit(Message::CalendarSubmit)
        .padding(8)
        .style(input_style())
}
