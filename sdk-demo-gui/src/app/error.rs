use crate::sdk::SdkError;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A call was requested before the SDK reported ready.
    NotInitialized,
    Init(SdkError),
    /// Failure of a named SDK call.
    Call(&'static str, SdkError),
    Availability(SdkError),
    Connect(SdkError),
    Disconnect(SdkError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "SDK not initialized"),
            Self::Init(e) => write!(f, "Failed to initialize WASM SDK: {}", e),
            Self::Call(call, e) => write!(f, "Failed to call {}: {}", call, e),
            Self::Availability(e) => write!(f, "Failed to check wallet availability: {}", e),
            Self::Connect(e) => write!(f, "Failed to connect wallet: {}", e),
            Self::Disconnect(e) => write!(f, "Failed to disconnect wallet: {}", e),
        }
    }
}

impl std::error::Error for Error {}
