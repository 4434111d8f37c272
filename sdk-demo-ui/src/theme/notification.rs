use iced::widget::container::Style;

use super::{container::bordered, Theme};

pub fn error(theme: &Theme) -> Style {
    bordered(&theme.colors.notifications.error, 25.0)
}
