use crate::{component::text, theme, widget::*};

use iced::widget::tooltip::Position;

/// Wraps `content` so that `help` is displayed on hover.
pub fn tooltip<'a, T: 'a>(
    help: impl Into<String>,
    content: impl Into<Element<'a, T>>,
    position: Position,
) -> Container<'a, T> {
    Container::new(
        iced::widget::tooltip::Tooltip::new(
            content,
            Container::new(text::p2_regular(help.into())).padding(8),
            position,
        )
        .style(theme::card::simple),
    )
}
