use crate::{component::text, theme, widget::*};
use iced::{widget::row, Alignment, Length};

/// Inline error message, shown above the controls of a panel.
pub fn error<'a, T: 'a>(message: String) -> Container<'a, T> {
    Container::new(
        row![text::p2_regular("❌"), text::p2_regular(message)]
            .spacing(5)
            .align_y(Alignment::Center),
    )
    .padding(10)
    .style(theme::notification::error)
    .width(Length::Fill)
}
