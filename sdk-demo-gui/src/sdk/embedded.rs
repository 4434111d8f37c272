use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{BindingSdk, SdkError, WalletInfo, WasmSdk};

pub const DEFAULT_GREETING: &str = "Hello from Rust!";

/// Behaviour of the in-process SDK, read from the `[sdk]` section of the gui
/// configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SdkConfig {
    /// Returned by `print_hello`.
    pub greeting: String,
    /// Make `init` fail, to exercise the error paths of the panels.
    pub fail_init: bool,
    /// Wallet providers reported as installed, in detection order.
    pub wallets: Vec<WalletInfo>,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            fail_init: false,
            wallets: vec![WalletInfo {
                provider: "Phantom".to_string(),
                address: "Ax1234567890".to_string(),
            }],
        }
    }
}

#[derive(Debug)]
pub struct EmbeddedSdk {
    config: SdkConfig,
    initialized: AtomicBool,
    connected: Mutex<Option<WalletInfo>>,
}

impl EmbeddedSdk {
    pub fn new(config: SdkConfig) -> Self {
        Self {
            config,
            initialized: AtomicBool::new(false),
            connected: Mutex::new(None),
        }
    }

    fn check_initialized(&self) -> Result<(), SdkError> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(SdkError::NotInitialized)
        }
    }

    fn connection(&self) -> Result<std::sync::MutexGuard<'_, Option<WalletInfo>>, SdkError> {
        self.connected
            .lock()
            .map_err(|e| SdkError::Unexpected(e.to_string()))
    }
}

#[async_trait]
impl WasmSdk for EmbeddedSdk {
    async fn init(&self) -> Result<(), SdkError> {
        if self.config.fail_init {
            return Err(SdkError::Rejected("initialization disabled by config".to_string()));
        }
        if !self.initialized.swap(true, Ordering::SeqCst) {
            info!("Embedded SDK initialized");
        }
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    async fn check_wallet_availability(&self) -> Result<Vec<String>, SdkError> {
        self.check_initialized()?;
        let providers: Vec<String> = self
            .config
            .wallets
            .iter()
            .map(|w| w.provider.clone())
            .collect();
        debug!("Detected wallet providers: {:?}", providers);
        Ok(providers)
    }

    async fn connect_wallet(&self) -> Result<WalletInfo, SdkError> {
        self.check_initialized()?;
        let wallet = self
            .config
            .wallets
            .first()
            .cloned()
            .ok_or(SdkError::NoWalletAvailable)?;
        *self.connection()? = Some(wallet.clone());
        info!("Connected to {}", wallet.provider);
        Ok(wallet)
    }

    fn disconnect_wallet(&self) -> Result<(), SdkError> {
        self.check_initialized()?;
        match self.connection()?.take() {
            Some(wallet) => {
                info!("Disconnected from {}", wallet.provider);
                Ok(())
            }
            None => Err(SdkError::NotConnected),
        }
    }

    async fn print_hello(&self) -> Result<String, SdkError> {
        self.check_initialized()?;
        Ok(self.config.greeting.clone())
    }

    async fn print_custom(&self, message: &str) -> Result<String, SdkError> {
        self.check_initialized()?;
        Ok(format!("Rust says: {}", message))
    }
}

#[derive(Debug, Default)]
pub struct EmbeddedBinding;

#[async_trait]
impl BindingSdk for EmbeddedBinding {
    async fn init(&self) -> Result<(), SdkError> {
        debug!("Embedded binding initialized");
        Ok(())
    }

    fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }
}
