use iced::{Alignment, Length};

use sdk_demo_ui::{
    component::{button, text::*},
    theme,
    widget::*,
};

use super::message::Message;
use crate::app::activity::ActivityLog;

pub const NO_ACTIVITY: &str = "No activity yet. Connect a wallet or call a function above!";

pub fn activity<'a>(log: &'a ActivityLog) -> Element<'a, Message> {
    let entries: Element<'a, Message> = if log.is_empty() {
        p2_regular(NO_ACTIVITY).style(theme::text::secondary).into()
    } else {
        log.entries()
            .fold(Column::new().spacing(5), |col, (index, message)| {
                col.push(
                    Row::new()
                        .spacing(10)
                        .push(mono(format!("#{}", index)).style(theme::text::warning))
                        .push(p2_regular(message)),
                )
            })
            .into()
    };
    Column::new()
        .spacing(10)
        .push(
            Row::new()
                .align_y(Alignment::Center)
                .push(Container::new(h4_bold("Activity Log:")).width(Length::Fill))
                .push_maybe((!log.is_empty()).then(|| {
                    button::secondary(None, "Clear Messages")
                        .on_press(Message::ClearActivity)
                        .width(Length::Shrink)
                })),
        )
        .push(entries)
        .into()
}
