#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Functions(FunctionsMessage),
    Wallet(WalletMessage),
    ClearActivity,
    OpenUrl(String),
    Clipboard(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FunctionsMessage {
    Initialize,
    PrintHello,
    PrintCustom,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WalletMessage {
    Refresh,
    Connect,
    Disconnect,
}
