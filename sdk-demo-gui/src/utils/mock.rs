use crate::sdk::{SdkError, WalletInfo, WasmSdk};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

/// Scripted SDK: every call pops the next `(expected request, response)` pair.
///
/// Requests are described as `{"method": <name>, "params": [..]}`; when the
/// expected request is `Some` it must match the actual call.
#[derive(Debug)]
pub struct Sdk {
    initialized: AtomicBool,
    requests: Mutex<VecDeque<(Option<Value>, Result<Value, SdkError>)>>,
}

impl Sdk {
    pub fn new(requests: Vec<(Option<Value>, Result<Value, SdkError>)>) -> Self {
        Self {
            initialized: AtomicBool::new(false),
            requests: Mutex::new(requests.into()),
        }
    }

    /// Starts the mock as if `init` had already completed.
    pub fn initialized(self) -> Self {
        self.initialized.store(true, Ordering::SeqCst);
        self
    }

    fn request<D: DeserializeOwned>(&self, req: Value) -> Result<D, SdkError> {
        let (body, response) = self
            .requests
            .lock()
            .expect("Failed to unlock")
            .pop_front()
            .unwrap_or_else(|| panic!("Mock SDK has no response for {}", req));
        if let Some(body) = body {
            assert_eq!(body, req);
        }
        response.map(|value| serde_json::from_value(value).unwrap())
    }
}

#[async_trait]
impl WasmSdk for Sdk {
    async fn init(&self) -> Result<(), SdkError> {
        self.request::<()>(json!({"method": "init"}))?;
        self.initialized.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    async fn check_wallet_availability(&self) -> Result<Vec<String>, SdkError> {
        self.request(json!({"method": "checkWalletAvailability"}))
    }

    async fn connect_wallet(&self) -> Result<WalletInfo, SdkError> {
        self.request(json!({"method": "connectWallet"}))
    }

    fn disconnect_wallet(&self) -> Result<(), SdkError> {
        self.request(json!({"method": "disconnectWallet"}))
    }

    async fn print_hello(&self) -> Result<String, SdkError> {
        self.request(json!({"method": "printHello"}))
    }

    async fn print_custom(&self, message: &str) -> Result<String, SdkError> {
        self.request(json!({"method": "printCustom", "params": [message]}))
    }
}
