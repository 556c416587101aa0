// src/ui/mod.rs

use iced::widget::{button, column, container, text};
use iced::{Element, Length};

use crate::messages::Message;
use crate::notification::Notification;
use crate::ui_state::{UiState, View};

pub mod calendar;
pub mod styles;
pub mod tables;
pub mod zoom;

use styles::{BannerStyle, NavStyle, SidebarStyle, ACCENT, INK, MUTED};

pub fn section_header(label: &str) -> Element<'_, Message> {
    text(label)
        .size(26)
        .style(iced::theme::Text::Color(INK))
        .width(Length::Fill)
        .into()
}

pub fn muted(label: impl ToString) -> iced::widget::Text<'static> {
    text(label).size(14).style(iced::theme::Text::Color(MUTED))
}

pub fn primary_button(label: &str, msg: Message) -> iced::widget::Button<'_, Message> {
    button(text(label).size(14))
        .padding([8, 16])
        .style(iced::theme::Button::Custom(Box::new(styles::PrimaryButtonStyle)))
        .on_press(msg)
}

pub fn destructive_button(label: &str, msg: Message) -> iced::widget::Button<'_, Message> {
    button(text(label).size(13))
        .padding([6, 12])
        .style(iced::theme::Button::Custom(Box::new(styles::DestructiveButtonStyle)))
        .on_press(msg)
}

/// A "Join" button for a meeting URL.
pub fn join_button(label: String, url: &str) -> Element<'static, Message> {
    button(text(label).size(13))
        .padding([6, 12])
        .style(iced::theme::Button::Custom(Box::new(styles::PrimaryButtonStyle)))
        .on_press(Message::JoinMeeting(url.to_string()))
        .into()
}

pub fn input_style() -> iced::theme::TextInput {
    iced::theme::TextInput::Custom(Box::new(styles::InputStyle))
}

pub fn sidebar<'a>(ui_state: &'a UiState, user_id: &'a str) -> Element<'a, Message> {
    let nav: Vec<Element<Message>> = View::ALL
        .iter()
        .map(|view| {
            let active = *view == ui_state.current_view;
            button(text(view.label()).size(14))
                .width(Length::Fill)
                .padding(10)
                .style(iced::theme::Button::Custom(Box::new(NavStyle { active })))
                .on_press(Message::ShowView(*view))
                .into()
        })
        .collect();

    let copy_label = if ui_state.copied { "Copied!" } else { "Copy" };

    container(
        column![
            text("Jamii").size(26).style(iced::theme::Text::Color(ACCENT)),
            column(nav).spacing(4),
            iced::widget::vertical_space(),
            column![
                muted("Your user ID").size(12),
                text(user_id).size(11).style(iced::theme::Text::Color(INK)),
                button(text(copy_label).size(12))
                    .padding([4, 10])
                    .style(iced::theme::Button::Custom(Box::new(NavStyle { active: true })))
                    .on_press(Message::CopyUserId),
                muted(&ui_state.status).size(11),
            ]
            .spacing(6),
        ]
        .spacing(30)
        .padding(20),
    )
    .width(210)
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(SidebarStyle)))
    .into()
}

pub fn banner(notification: &Notification) -> Element<'_, Message> {
    container(text(&notification.message).size(14))
        .width(Length::Fill)
        .padding([10, 14])
        .style(iced::theme::Container::Custom(Box::new(BannerStyle)))
        .into()
}
