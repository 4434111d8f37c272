use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border, Color};

use super::palette::{Button, ButtonPalette};
use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.primary, status)
}

pub fn secondary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.secondary, status)
}

pub fn destructive(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.destructive, status)
}

pub fn wallet(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.wallet, status)
}

pub fn link(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.link, status)
}

pub fn transparent_border(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.transparent_border, status)
}

fn button(p: &Button, status: Status) -> Style {
    match status {
        Status::Active => style(&p.active),
        Status::Hovered => style(&p.hovered),
        Status::Pressed => style(p.pressed.as_ref().unwrap_or(&p.active)),
        Status::Disabled => {
            let s = style(p.disabled.as_ref().unwrap_or(&p.active));
            Style {
                text_color: Color {
                    a: 0.2,
                    ..s.text_color
                },
                ..s
            }
        }
    }
}

fn style(p: &ButtonPalette) -> Style {
    Style {
        background: Some(Background::Color(p.background)),
        text_color: p.text,
        border: p
            .border
            .map(|color| Border {
                radius: 25.0.into(),
                width: 1.0,
                color,
            })
            .unwrap_or_default(),
        ..Default::default()
    }
}
