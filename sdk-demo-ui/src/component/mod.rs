pub mod button;
pub mod card;
pub mod notification;
pub mod text;
pub mod tooltip;

pub use tooltip::tooltip;

use iced::Length;

use crate::{theme, widget::*};

/// Full-width banner announcing an active connection.
pub fn connected_banner<'a, T: 'a>(label: String) -> Container<'a, T> {
    Container::new(text::p1_bold(label))
        .padding(10)
        .center_x(Length::Fill)
        .style(theme::banner::connected)
}
