use iced::widget::container::Style;

use super::{container::bordered, Theme};

pub fn simple(theme: &Theme) -> Style {
    bordered(&theme.colors.cards.simple, 12.0)
}

pub fn section(theme: &Theme) -> Style {
    bordered(&theme.colors.cards.section, 12.0)
}
