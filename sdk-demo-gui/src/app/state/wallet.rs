use std::sync::Arc;

use iced::Task;
use sdk_demo_ui::widget::*;
use tracing::{error, info};

use super::InFlight;
use crate::{
    app::{
        error::Error,
        message::Message,
        state::State,
        view::{self, WalletMessage},
    },
    sdk::{WalletInfo, WasmSdk},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
}

/// Discovers wallet providers and manages the connection to one of them.
pub struct WalletPanel {
    sdk: Arc<dyn WasmSdk + Sync + Send>,
    wallet: Option<WalletInfo>,
    available: Vec<String>,
    connecting: InFlight,
    refreshing: InFlight,
    error: Option<Error>,
    on_connect: Option<fn(WalletInfo) -> Message>,
    on_disconnect: Option<Message>,
}

impl WalletPanel {
    pub fn new(sdk: Arc<dyn WasmSdk + Sync + Send>) -> Self {
        Self {
            sdk,
            wallet: None,
            available: Vec::new(),
            connecting: InFlight::default(),
            refreshing: InFlight::default(),
            error: None,
            on_connect: None,
            on_disconnect: None,
        }
    }

    pub fn on_connect(mut self, handler: fn(WalletInfo) -> Message) -> Self {
        self.on_connect = Some(handler);
        self
    }

    pub fn on_disconnect(mut self, message: Message) -> Self {
        self.on_disconnect = Some(message);
        self
    }

    pub fn status(&self) -> ConnectionStatus {
        if self.wallet.is_some() {
            ConnectionStatus::Connected
        } else if self.connecting.is_pending() {
            ConnectionStatus::Connecting
        } else {
            ConnectionStatus::Disconnected
        }
    }

    pub fn wallet(&self) -> Option<&WalletInfo> {
        self.wallet.as_ref()
    }

    pub fn available_wallets(&self) -> &[String] {
        &self.available
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn can_connect(&self) -> bool {
        self.status() == ConnectionStatus::Disconnected && !self.available.is_empty()
    }

    pub fn can_refresh(&self) -> bool {
        !self.connecting.is_pending() && !self.refreshing.is_pending()
    }

    fn refresh(&mut self) -> Task<Message> {
        if self.connecting.is_pending() {
            return Task::none();
        }
        let id = match self.refreshing.start() {
            Some(id) => id,
            None => return Task::none(),
        };
        self.error = None;
        let sdk = self.sdk.clone();
        Task::perform(
            async move {
                if !sdk.is_initialized() {
                    return Ok(None);
                }
                sdk.check_wallet_availability()
                    .await
                    .map(Some)
                    .map_err(Error::Availability)
            },
            move |res| Message::WalletsAvailable(id, res),
        )
    }

    fn connect(&mut self) -> Task<Message> {
        if !self.can_connect() {
            return Task::none();
        }
        if !self.sdk.is_initialized() {
            self.error = Some(Error::NotInitialized);
            return Task::none();
        }
        let id = match self.connecting.start() {
            Some(id) => id,
            None => return Task::none(),
        };
        self.error = None;
        let sdk = self.sdk.clone();
        Task::perform(
            async move { sdk.connect_wallet().await.map_err(Error::Connect) },
            move |res| Message::Connected(id, res),
        )
    }

    fn disconnect(&mut self) -> Task<Message> {
        if self.wallet.is_none() {
            return Task::none();
        }
        self.error = None;
        if let Err(e) = self.sdk.disconnect_wallet() {
            // Local wallet is kept, the user may retry.
            let e = Error::Disconnect(e);
            error!("{}", e);
            self.error = Some(e);
            return Task::none();
        }
        self.wallet = None;
        info!("Wallet disconnected");
        match &self.on_disconnect {
            Some(message) => Task::done(message.clone()),
            None => Task::none(),
        }
    }
}

impl State for WalletPanel {
    fn view<'a>(&'a self) -> Element<'a, view::Message> {
        view::wallet::wallet(
            self.wallet.as_ref(),
            &self.available,
            self.status() == ConnectionStatus::Connecting,
            self.can_connect(),
            self.can_refresh(),
            self.error.as_ref(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(view::Message::Wallet(msg)) => match msg {
                WalletMessage::Refresh => self.refresh(),
                WalletMessage::Connect => self.connect(),
                WalletMessage::Disconnect => self.disconnect(),
            },
            Message::WalletsAvailable(id, res) => {
                if self.refreshing.finish(id) {
                    match res {
                        Ok(Some(wallets)) => self.available = wallets,
                        Ok(None) => {}
                        // The previous list is kept.
                        Err(e) => {
                            error!("{}", e);
                            self.error = Some(e);
                        }
                    }
                }
                Task::none()
            }
            Message::Connected(id, res) => {
                if !self.connecting.finish(id) {
                    return Task::none();
                }
                match res {
                    Ok(wallet) => {
                        info!("Wallet connected: {}", wallet.provider);
                        self.wallet = Some(wallet.clone());
                        if let Some(handler) = self.on_connect {
                            return Task::done(handler(wallet));
                        }
                    }
                    Err(e) => {
                        error!("{}", e);
                        self.error = Some(e);
                    }
                }
                Task::none()
            }
            _ => Task::none(),
        }
    }

    fn load(&mut self) -> Task<Message> {
        self.refresh()
    }
}
