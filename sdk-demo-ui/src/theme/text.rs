use iced::widget::text::{Catalog, Style, StyleFn};

use iced::Color;

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(default)
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        class(self)
    }
}

pub fn default(_theme: &Theme) -> Style {
    Style { color: None }
}

pub fn secondary(theme: &Theme) -> Style {
    colored(theme.colors.text.secondary)
}

pub fn success(theme: &Theme) -> Style {
    colored(theme.colors.text.success)
}

pub fn warning(theme: &Theme) -> Style {
    colored(theme.colors.text.warning)
}

pub fn error(theme: &Theme) -> Style {
    colored(theme.colors.text.error)
}

fn colored(color: Color) -> Style {
    Style { color: Some(color) }
}
