pub mod activity;
pub mod config;
pub mod message;
pub mod state;
pub mod view;

mod error;

use std::sync::Arc;

use iced::{clipboard, Task};
use tracing::{error, info};

use sdk_demo_ui::widget::Element;

pub use config::Config;
pub use error::Error;
pub use message::Message;

use activity::ActivityLog;
use state::{BindingPanel, FunctionsPanel, State, WalletPanel};

use crate::sdk::{BindingSdk, WalletInfo, WasmSdk};

/// Application shell: composes the panels, owns the activity log and the
/// connection banner. It never calls an SDK itself.
pub struct App {
    binding: BindingPanel,
    functions: FunctionsPanel,
    wallet: WalletPanel,
    activity: ActivityLog,
    wallet_info: Option<WalletInfo>,
}

impl App {
    pub fn new(
        sdk: Arc<dyn WasmSdk + Sync + Send>,
        binding_sdk: Arc<dyn BindingSdk + Sync + Send>,
        config: &Config,
    ) -> (App, Task<Message>) {
        let mut app = Self {
            binding: BindingPanel::new(binding_sdk),
            functions: FunctionsPanel::new(sdk.clone(), config.custom_message())
                .on_message(Message::Activity),
            wallet: WalletPanel::new(sdk)
                .on_connect(Message::WalletConnected)
                .on_disconnect(Message::WalletDisconnected),
            activity: ActivityLog::default(),
            wallet_info: None,
        };
        // Wallet discovery only answers once the SDK is initialized.
        let cmd = Task::batch(vec![
            app.binding.load(),
            app.functions.load().chain(app.wallet.load()),
        ]);
        (app, cmd)
    }

    pub fn title(&self) -> String {
        String::from("SDK Demo")
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn wallet_info(&self) -> Option<&WalletInfo> {
        self.wallet_info.as_ref()
    }

    /// Text of the connection banner, if a wallet is connected.
    pub fn banner(&self) -> Option<String> {
        self.wallet_info.as_ref().map(view::banner_label)
    }

    pub fn append_message(&mut self, message: impl Into<String>) {
        self.activity.append(message);
    }

    pub fn clear_messages(&mut self) {
        self.activity.clear();
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Activity(text) => {
                self.append_message(text);
                Task::none()
            }
            Message::WalletConnected(info) => {
                self.append_message(format!(
                    "Wallet connected: {} - {}",
                    info.provider, info.address
                ));
                self.wallet_info = Some(info);
                Task::none()
            }
            Message::WalletDisconnected => {
                self.wallet_info = None;
                self.append_message("Wallet disconnected");
                Task::none()
            }
            Message::View(view::Message::ClearActivity) => {
                self.clear_messages();
                Task::none()
            }
            Message::View(view::Message::OpenUrl(url)) => {
                info!("Opening {}", url);
                if let Err(e) = open::that_detached(&url) {
                    error!("Error opening '{}': {}", url, e);
                }
                Task::none()
            }
            Message::View(view::Message::Clipboard(text)) => clipboard::write(text),
            Message::Sum(_) => self.binding.update(message),
            Message::View(view::Message::Functions(_))
            | Message::Initialized(..)
            | Message::Printed(..) => self.functions.update(message),
            Message::View(view::Message::Wallet(_))
            | Message::WalletsAvailable(..)
            | Message::Connected(..) => self.wallet.update(message),
        }
    }

    pub fn view(&self) -> Element<Message> {
        view::dashboard(
            self.wallet_info.as_ref(),
            self.wallet.view(),
            self.functions.view(),
            self.binding.view(),
            view::activity::activity(&self.activity),
        )
        .map(Message::View)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        sdk::embedded::{EmbeddedBinding, EmbeddedSdk, SdkConfig},
        utils::mock::Sdk,
    };
    use iced::futures::StreamExt;
    use iced_runtime::{task, Action};
    use serde_json::json;

    /// Drives the app until no task is left.
    async fn run(app: &mut App, cmd: Task<Message>) {
        let mut pending = vec![cmd];
        while let Some(cmd) = pending.pop() {
            if let Some(mut stream) = task::into_stream(cmd) {
                while let Some(action) = stream.next().await {
                    if let Action::Output(msg) = action {
                        pending.push(app.update(msg));
                    }
                }
            }
        }
    }

    async fn update(app: &mut App, message: Message) {
        let cmd = app.update(message);
        run(app, cmd).await;
    }

    #[test]
    fn activity_log_bookkeeping() {
        let sdk = Arc::new(Sdk::new(vec![]));
        let (mut app, _) = App::new(sdk, Arc::new(EmbeddedBinding), &Config::new());
        assert!(app.activity().is_empty());

        let _ = app.update(Message::Activity("one".to_string()));
        let _ = app.update(Message::Activity("one".to_string()));
        let _ = app.update(Message::Activity("two".to_string()));
        assert_eq!(
            app.activity().entries().collect::<Vec<_>>(),
            vec![(1, "one"), (2, "one"), (3, "two")]
        );

        let _ = app.update(Message::View(view::Message::ClearActivity));
        assert!(app.activity().is_empty());
    }

    #[tokio::test]
    async fn phantom_scenario() {
        let sdk = Arc::new(Sdk::new(vec![
            (Some(json!({"method": "init"})), Ok(json!(null))),
            (
                Some(json!({"method": "checkWalletAvailability"})),
                Ok(json!(["Phantom"])),
            ),
            (
                Some(json!({"method": "connectWallet"})),
                Ok(json!({"provider": "Phantom", "address": "Ax1234567890"})),
            ),
            (Some(json!({"method": "disconnectWallet"})), Ok(json!(null))),
        ]));
        let (mut app, cmd) = App::new(sdk, Arc::new(EmbeddedBinding), &Config::new());
        run(&mut app, cmd).await;

        assert_eq!(app.binding.result(), Some(12.0));
        assert!(app.wallet.can_connect());
        assert_eq!(app.banner(), None);

        update(
            &mut app,
            Message::View(view::Message::Wallet(view::WalletMessage::Connect)),
        )
        .await;
        assert_eq!(app.banner(), Some("🟢 Connected to Phantom".to_string()));
        let wallet = app.wallet_info().unwrap();
        assert_eq!(view::wallet::truncate_address(&wallet.address), "Ax12...7890");
        assert_eq!(
            app.activity().entries().collect::<Vec<_>>(),
            vec![(1, "Wallet connected: Phantom - Ax1234567890")]
        );

        update(
            &mut app,
            Message::View(view::Message::Wallet(view::WalletMessage::Disconnect)),
        )
        .await;
        assert_eq!(app.banner(), None);
        assert_eq!(
            app.activity().entries().collect::<Vec<_>>(),
            vec![
                (1, "Wallet connected: Phantom - Ax1234567890"),
                (2, "Wallet disconnected")
            ]
        );
    }

    #[tokio::test]
    async fn embedded_sdk_messages_reach_activity_log() {
        let config = Config {
            custom_message: Some("gm".to_string()),
            ..Config::new()
        };
        let sdk = Arc::new(EmbeddedSdk::new(SdkConfig::default()));
        let (mut app, cmd) = App::new(sdk, Arc::new(EmbeddedBinding), &config);
        run(&mut app, cmd).await;

        update(
            &mut app,
            Message::View(view::Message::Functions(view::FunctionsMessage::PrintHello)),
        )
        .await;
        update(
            &mut app,
            Message::View(view::Message::Functions(
                view::FunctionsMessage::PrintCustom,
            )),
        )
        .await;
        assert_eq!(
            app.activity().entries().collect::<Vec<_>>(),
            vec![(1, "Hello from Rust!"), (2, "Rust says: gm")]
        );
    }

    #[tokio::test]
    async fn failures_stay_in_panels() {
        let config = Config {
            sdk: SdkConfig {
                fail_init: true,
                ..SdkConfig::default()
            },
            ..Config::new()
        };
        let sdk = Arc::new(EmbeddedSdk::new(config.sdk.clone()));
        let (mut app, cmd) = App::new(sdk, Arc::new(EmbeddedBinding), &config);
        run(&mut app, cmd).await;

        assert!(app.functions.error().is_some());
        // Discovery did not run against an uninitialized SDK.
        assert!(app.wallet.available_wallets().is_empty());
        assert!(app.activity().is_empty());
        assert_eq!(app.wallet_info(), None);
    }
}
