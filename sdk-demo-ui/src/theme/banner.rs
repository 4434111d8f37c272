use iced::widget::container::Style;

use super::{container::bordered, Theme};

pub fn connected(theme: &Theme) -> Style {
    bordered(&theme.colors.banners.connected, 25.0)
}
