use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub banners: Banners,
    pub notifications: Notifications,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub warning: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub scrollable: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub destructive: Button,
    pub wallet: Button,
    pub link: Button,
    pub transparent_border: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub section: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Banners {
    pub connected: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub error: ContainerPalette,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::LIGHT_BLACK,
                scrollable: color::GREY_3,
            },
            text: Text {
                primary: color::WHITE,
                secondary: color::GREY_2,
                warning: color::ORANGE,
                success: color::GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::ORANGE,
                        text: color::WHITE,
                        border: color::ORANGE.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::WHITE,
                        text: color::ORANGE,
                        border: color::ORANGE.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::WHITE,
                        text: color::ORANGE,
                        border: color::ORANGE.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_4,
                        text: color::GREY_2,
                        border: color::GREY_4.into(),
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::GREY_5,
                        text: color::WHITE,
                        border: color::GREY_3.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_4,
                        text: color::WHITE,
                        border: color::GREY_2.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREY_4,
                        text: color::WHITE,
                        border: color::GREY_2.into(),
                    }),
                    disabled: None,
                },
                destructive: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::RED,
                        border: color::RED.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::RED,
                        text: color::WHITE,
                        border: color::RED.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::RED,
                        text: color::WHITE,
                        border: color::RED.into(),
                    }),
                    disabled: None,
                },
                wallet: Button {
                    active: ButtonPalette {
                        background: color::PURPLE,
                        text: color::WHITE,
                        border: color::PURPLE.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::WHITE,
                        text: color::PURPLE,
                        border: color::PURPLE.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::WHITE,
                        text: color::PURPLE,
                        border: color::PURPLE.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_4,
                        text: color::GREY_2,
                        border: color::GREY_4.into(),
                    }),
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::PURPLE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                transparent_border: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_2,
                        border: color::TRANSPARENT.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: color::GREY_3.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: color::GREY_3.into(),
                    }),
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::GREY_5,
                    text: None,
                    border: color::GREY_4.into(),
                },
                section: ContainerPalette {
                    background: color::LIGHT_BLACK,
                    text: None,
                    border: color::GREY_4.into(),
                },
            },
            banners: Banners {
                connected: ContainerPalette {
                    background: color::TRANSPARENT_GREEN,
                    text: color::WHITE.into(),
                    border: color::GREEN.into(),
                },
            },
            notifications: Notifications {
                error: ContainerPalette {
                    background: color::TRANSPARENT_RED,
                    text: color::RED.into(),
                    border: color::RED.into(),
                },
            },
        }
    }
}
