//! Boundary with the two SDKs driven by the demo.
//!
//! The application never depends on a concrete SDK: panels hold trait objects
//! and only reach the SDK through the calls below.
pub mod embedded;

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    /// A call was made before `init` completed.
    NotInitialized,
    /// No wallet provider could be found.
    NoWalletAvailable,
    /// Disconnect was requested without an active connection.
    NotConnected,
    /// The SDK refused the request.
    Rejected(String),
    /// Something unexpected happened.
    Unexpected(String),
}

impl std::fmt::Display for SdkError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "SDK is not initialized"),
            Self::NoWalletAvailable => write!(f, "No wallet provider available"),
            Self::NotConnected => write!(f, "No wallet connected"),
            Self::Rejected(e) => write!(f, "Request rejected: {}", e),
            Self::Unexpected(e) => write!(f, "Unexpected SDK error: {}", e),
        }
    }
}

impl std::error::Error for SdkError {}

/// Identifies the currently connected wallet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WalletInfo {
    pub provider: String,
    pub address: String,
}

/// General SDK: initialization, wallet connectivity and the message printing calls.
#[async_trait]
pub trait WasmSdk: Debug {
    async fn init(&self) -> Result<(), SdkError>;
    fn is_initialized(&self) -> bool;
    /// Names of the detected wallet providers, in detection order.
    async fn check_wallet_availability(&self) -> Result<Vec<String>, SdkError>;
    async fn connect_wallet(&self) -> Result<WalletInfo, SdkError>;
    fn disconnect_wallet(&self) -> Result<(), SdkError>;
    async fn print_hello(&self) -> Result<String, SdkError>;
    async fn print_custom(&self, message: &str) -> Result<String, SdkError>;
}

/// Arithmetic binding SDK.
#[async_trait]
pub trait BindingSdk: Debug {
    async fn init(&self) -> Result<(), SdkError>;
    fn add(&self, a: f64, b: f64) -> f64;
}
