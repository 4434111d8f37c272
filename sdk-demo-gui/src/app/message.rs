use super::{error::Error, state::RequestId, view};
use crate::sdk::WalletInfo;

#[derive(Debug, Clone)]
pub enum Message {
    View(view::Message),
    /// Result of the binding demo sum.
    Sum(Result<f64, Error>),
    Initialized(RequestId, Result<(), Error>),
    Printed(RequestId, Result<String, Error>),
    /// `None` if the SDK was not initialized when the refresh ran.
    WalletsAvailable(RequestId, Result<Option<Vec<String>>, Error>),
    Connected(RequestId, Result<WalletInfo, Error>),
    /// Text reported by a panel for the activity log.
    Activity(String),
    WalletConnected(WalletInfo),
    WalletDisconnected,
}
