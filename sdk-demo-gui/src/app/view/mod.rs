mod message;

pub mod activity;
pub mod binding;
pub mod functions;
pub mod wallet;

pub use message::*;

use iced::{
    widget::{scrollable, Space},
    Alignment, Length,
};

use sdk_demo_ui::{
    component::{card, connected_banner, text::*},
    theme,
    widget::*,
};

use crate::sdk::WalletInfo;

pub const TITLE: &str = "Rust SDK + Wallet Demo";
const DESCRIPTION: &str = "This demo shows how to drive a Rust SDK from a GUI, \
    including wallet connectivity.";

pub fn banner_label(wallet: &WalletInfo) -> String {
    format!("🟢 Connected to {}", wallet.provider)
}

/// Layout of the whole application.
pub fn dashboard<'a>(
    wallet_info: Option<&'a WalletInfo>,
    wallet: Element<'a, Message>,
    functions: Element<'a, Message>,
    binding: Element<'a, Message>,
    activity: Element<'a, Message>,
) -> Element<'a, Message> {
    Container::new(scrollable(
        Column::new()
            .spacing(20)
            .padding(30)
            .max_width(1200)
            .push(h1(TITLE))
            .push(p1_regular(DESCRIPTION).style(theme::text::secondary))
            .push_maybe(wallet_info.map(|w| connected_banner(banner_label(w))))
            .push(
                Row::new()
                    .spacing(20)
                    .push(
                        card::section(
                            Column::new()
                                .spacing(15)
                                .push(h3("Wallet Connection"))
                                .push(wallet),
                        )
                        .width(Length::FillPortion(1)),
                    )
                    .push(
                        card::section(
                            Column::new()
                                .spacing(15)
                                .push(h3("WASM Functions"))
                                .push(functions)
                                .push(Space::with_height(Length::Fixed(10.0)))
                                .push(binding),
                        )
                        .width(Length::FillPortion(1)),
                    ),
            )
            .push(card::section(activity).width(Length::Fill))
            .align_x(Alignment::Center),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .style(theme::container::background)
    .into()
}
