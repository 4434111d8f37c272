use iced::{widget::tooltip::Position, Alignment, Length};

use sdk_demo_ui::{
    component::{button, card, notification, text::*, tooltip},
    theme,
    widget::*,
};

use super::message::{Message, WalletMessage};
use crate::{app::error::Error, sdk::WalletInfo};

pub const INSTALLABLE_WALLETS: [(&str, &str); 2] = [
    ("Phantom Wallet", "https://phantom.app/"),
    ("Solflare Wallet", "https://solflare.com/"),
];

/// Shortens addresses longer than 8 characters to `first4...last4`.
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 8 {
        return address.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

pub fn wallet<'a>(
    wallet: Option<&'a WalletInfo>,
    available: &'a [String],
    connecting: bool,
    can_connect: bool,
    can_refresh: bool,
    error: Option<&'a Error>,
) -> Element<'a, Message> {
    let connection: Element<'a, Message> = match wallet {
        None => button::wallet(
            None,
            if connecting {
                "Connecting..."
            } else {
                "Connect Wallet"
            },
        )
        .on_press_maybe(can_connect.then_some(Message::Wallet(WalletMessage::Connect)))
        .width(Length::Fill)
        .into(),
        Some(w) => connected_wallet(w),
    };
    Column::new()
        .spacing(15)
        .push(
            Row::new()
                .align_y(Alignment::Center)
                .push(Container::new(h4_bold("Solana Wallet")).width(Length::Fill))
                .push(if wallet.is_some() {
                    p1_regular("🟢 Connected").style(theme::text::success)
                } else {
                    p1_regular("🔴 Disconnected").style(theme::text::error)
                }),
        )
        .push_maybe(error.map(|e| notification::error(e.to_string())))
        .push(available_wallets(available))
        .push(connection)
        .push(
            button::secondary(None, "Refresh Wallets")
                .on_press_maybe(can_refresh.then_some(Message::Wallet(WalletMessage::Refresh)))
                .width(Length::Fill),
        )
        .into()
}

fn available_wallets<'a>(available: &'a [String]) -> Element<'a, Message> {
    let list: Element<'a, Message> = if available.is_empty() {
        INSTALLABLE_WALLETS
            .iter()
            .fold(
                Column::new()
                    .spacing(5)
                    .push(p2_regular("No Solana wallets detected. Please install:")),
                |col, (name, url)| {
                    col.push(
                        Row::new()
                            .spacing(5)
                            .align_y(Alignment::Center)
                            .push(p2_regular("•"))
                            .push(
                                button::link(None, name)
                                    .on_press(Message::OpenUrl(url.to_string())),
                            ),
                    )
                },
            )
            .into()
    } else {
        available
            .iter()
            .fold(Column::new().spacing(5), |col, name| {
                col.push(
                    Row::new()
                        .spacing(10)
                        .push(p2_regular("🟢"))
                        .push(p1_regular(name)),
                )
            })
            .into()
    };
    Column::new()
        .spacing(10)
        .push(h5_medium("Available Wallets:"))
        .push(list)
        .into()
}

fn connected_wallet<'a>(wallet: &'a WalletInfo) -> Element<'a, Message> {
    card::simple(
        Column::new()
            .spacing(10)
            .push(
                Row::new()
                    .spacing(10)
                    .push(p1_bold("Provider:"))
                    .push(p1_regular(&wallet.provider)),
            )
            .push(
                Row::new()
                    .spacing(10)
                    .align_y(Alignment::Center)
                    .push(p1_bold("Address:"))
                    .push(tooltip(
                        wallet.address.clone(),
                        mono(truncate_address(&wallet.address)),
                        Position::Bottom,
                    ))
                    .push(
                        button::transparent_border(None, "Copy")
                            .on_press(Message::Clipboard(wallet.address.clone())),
                    ),
            )
            .push(
                button::alert(None, "Disconnect")
                    .on_press(Message::Wallet(WalletMessage::Disconnect))
                    .width(Length::Fill),
            ),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_truncation() {
        assert_eq!(truncate_address(""), "");
        assert_eq!(truncate_address("Ax12"), "Ax12");
        assert_eq!(truncate_address("12345678"), "12345678");
        assert_eq!(truncate_address("123456789"), "1234...6789");
        assert_eq!(truncate_address("Ax1234567890"), "Ax12...7890");
        // Counted in characters, not bytes.
        assert_eq!(truncate_address("ééééééééé"), "éééé...éééé");
        assert_eq!(truncate_address("éééééééé"), "éééééééé");
    }
}
