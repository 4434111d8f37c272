use iced::{Alignment, Length};

use sdk_demo_ui::{
    component::{button, notification, text::*},
    theme,
    widget::*,
};

use super::message::{FunctionsMessage, Message};
use crate::app::error::Error;

pub fn functions<'a>(
    initialized: bool,
    loading: bool,
    error: Option<&'a Error>,
) -> Element<'a, Message> {
    let label = |t: &'static str| if loading { "Loading..." } else { t };
    let ready = initialized && !loading;
    Column::new()
        .spacing(15)
        .push(
            Row::new()
                .spacing(5)
                .align_y(Alignment::Center)
                .push(p1_bold("SDK Status:"))
                .push(if initialized {
                    p1_regular("✅ Initialized").style(theme::text::success)
                } else {
                    p1_regular("❌ Not Initialized").style(theme::text::error)
                }),
        )
        .push_maybe(error.map(|e| notification::error(e.to_string())))
        .push(
            Row::new()
                .spacing(10)
                .push(
                    button::primary(None, label("Print \"Hello Rust\""))
                        .on_press_maybe(
                            ready.then_some(Message::Functions(FunctionsMessage::PrintHello)),
                        )
                        .width(Length::Fill),
                )
                .push(
                    button::primary(None, label("Print Custom Message"))
                        .on_press_maybe(
                            ready.then_some(Message::Functions(FunctionsMessage::PrintCustom)),
                        )
                        .width(Length::Fill),
                )
                .push(
                    button::secondary(None, label("Reinitialize SDK"))
                        .on_press_maybe(
                            (!loading).then_some(Message::Functions(FunctionsMessage::Initialize)),
                        )
                        .width(Length::Fill),
                ),
        )
        .into()
}
