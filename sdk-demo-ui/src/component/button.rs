use super::text::text;
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, row};

pub fn primary<'a, T: 'a>(icon: Option<Text<'a>>, t: &'a str) -> Button<'a, T> {
    Button::new(content(
        icon,
        text(t)
            .font(MEDIUM)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(icon: Option<Text<'a>>, t: &'a str) -> Button<'a, T> {
    Button::new(content(
        icon,
        text(t)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::secondary)
}

pub fn alert<'a, T: 'a>(icon: Option<Text<'a>>, t: &'a str) -> Button<'a, T> {
    Button::new(content(icon, text(t))).style(theme::button::destructive)
}

/// Button used for wallet connection actions.
pub fn wallet<'a, T: 'a>(icon: Option<Text<'a>>, t: &'a str) -> Button<'a, T> {
    Button::new(content(
        icon,
        text(t)
            .font(MEDIUM)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::wallet)
}

pub fn transparent_border<'a, T: 'a>(icon: Option<Text<'a>>, t: &'a str) -> Button<'a, T> {
    Button::new(content_left_aligned(
        icon,
        text(t).align_y(iced::Alignment::Center),
    ))
    .style(theme::button::transparent_border)
}

pub fn link<'a, T: 'a>(icon: Option<Text<'a>>, t: &'a str) -> Button<'a, T> {
    Button::new(content_left_aligned(icon, text(t)))
        .padding(0)
        .style(theme::button::link)
}

// Content function for centered buttons (primary, secondary, wallet)
fn content<'a, T: 'a>(icon: Option<Text<'a>>, text: Text<'a>) -> Container<'a, T> {
    match icon {
        None => container(text)
            .align_y(Vertical::Center)
            .align_x(Horizontal::Center)
            .width(iced::Length::Fill)
            .padding(5),
        Some(i) => container(
            row![i, text]
                .spacing(10)
                .align_y(Vertical::Center)
                .width(iced::Length::Shrink),
        )
        .align_x(Horizontal::Center)
        .width(iced::Length::Fill)
        .padding(5),
    }
}

// Content function for left-aligned buttons (transparent_border, link)
fn content_left_aligned<'a, T: 'a>(icon: Option<Text<'a>>, text: Text<'a>) -> Container<'a, T> {
    match icon {
        None => container(text).align_y(Vertical::Center).padding(5),
        Some(i) => container(row![i, text].spacing(10).align_y(Vertical::Center)).padding(5),
    }
}
