use iced::widget::container::{transparent, Catalog, Style, StyleFn};
use iced::{Background, Border};

use super::palette::ContainerPalette;
use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(transparent)
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        class(self)
    }
}

pub fn background(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(theme.colors.general.background)),
        ..Default::default()
    }
}

/// Palette-driven container, the border is only drawn if the palette has one.
pub(super) fn bordered(palette: &ContainerPalette, radius: f32) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: palette
            .border
            .map(|color| Border {
                radius: radius.into(),
                width: 1.0,
                color,
            })
            .unwrap_or_default(),
        ..Default::default()
    }
}
