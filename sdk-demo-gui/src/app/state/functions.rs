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
        view::{self, FunctionsMessage},
    },
    sdk::WasmSdk,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdkStatus {
    Uninitialized,
    Initializing,
    Ready,
}

#[derive(Debug, Clone)]
enum Call {
    Hello,
    Custom(String),
}

/// Initializes the wasm SDK and calls its printing functions, forwarding
/// every returned message to `on_message`.
pub struct FunctionsPanel {
    sdk: Arc<dyn WasmSdk + Sync + Send>,
    custom_message: String,
    status: SdkStatus,
    request: InFlight,
    error: Option<Error>,
    on_message: Option<fn(String) -> Message>,
}

impl FunctionsPanel {
    pub fn new(sdk: Arc<dyn WasmSdk + Sync + Send>, custom_message: impl Into<String>) -> Self {
        Self {
            sdk,
            custom_message: custom_message.into(),
            status: SdkStatus::Uninitialized,
            request: InFlight::default(),
            error: None,
            on_message: None,
        }
    }

    pub fn on_message(mut self, handler: fn(String) -> Message) -> Self {
        self.on_message = Some(handler);
        self
    }

    pub fn status(&self) -> SdkStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.request.is_pending()
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    fn initialize(&mut self) -> Task<Message> {
        let id = match self.request.start() {
            Some(id) => id,
            None => return Task::none(),
        };
        self.error = None;
        self.status = SdkStatus::Initializing;
        let sdk = self.sdk.clone();
        Task::perform(
            async move {
                if !sdk.is_initialized() {
                    sdk.init().await.map_err(Error::Init)?;
                }
                Ok::<(), Error>(())
            },
            move |res| Message::Initialized(id, res),
        )
    }

    fn invoke(&mut self, call: Call) -> Task<Message> {
        if self.status != SdkStatus::Ready {
            self.error = Some(Error::NotInitialized);
            return Task::none();
        }
        let id = match self.request.start() {
            Some(id) => id,
            None => return Task::none(),
        };
        self.error = None;
        let sdk = self.sdk.clone();
        Task::perform(
            async move {
                match call {
                    Call::Hello => sdk
                        .print_hello()
                        .await
                        .map_err(|e| Error::Call("printHello", e)),
                    Call::Custom(text) => sdk
                        .print_custom(&text)
                        .await
                        .map_err(|e| Error::Call("printCustom", e)),
                }
            },
            move |res| Message::Printed(id, res),
        )
    }
}

impl State for FunctionsPanel {
    fn view<'a>(&'a self) -> Element<'a, view::Message> {
        view::functions::functions(
            self.status == SdkStatus::Ready,
            self.is_loading(),
            self.error.as_ref(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(view::Message::Functions(msg)) => match msg {
                FunctionsMessage::Initialize => self.initialize(),
                FunctionsMessage::PrintHello => self.invoke(Call::Hello),
                FunctionsMessage::PrintCustom => {
                    self.invoke(Call::Custom(self.custom_message.clone()))
                }
            },
            Message::Initialized(id, res) => {
                if !self.request.finish(id) {
                    return Task::none();
                }
                match res {
                    Ok(()) => {
                        info!("WASM SDK ready");
                        self.status = SdkStatus::Ready;
                    }
                    Err(e) => {
                        error!("{}", e);
                        self.status = SdkStatus::Uninitialized;
                        self.error = Some(e);
                    }
                }
                Task::none()
            }
            Message::Printed(id, res) => {
                if !self.request.finish(id) {
                    return Task::none();
                }
                match res {
                    Ok(text) => {
                        if let Some(handler) = self.on_message {
                            return Task::done(handler(text));
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
        self.initialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        sdk::SdkError,
        utils::{mock::Sdk, sandbox::Sandbox},
    };
    use serde_json::json;

    fn activity(sandbox: &Sandbox<FunctionsPanel>) -> Vec<String> {
        sandbox
            .emitted()
            .iter()
            .filter_map(|m| match m {
                Message::Activity(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn panel(sdk: Sdk) -> FunctionsPanel {
        FunctionsPanel::new(Arc::new(sdk), "Hello from tests").on_message(Message::Activity)
    }

    #[tokio::test]
    async fn initialize_then_print() {
        let sdk = Sdk::new(vec![
            (Some(json!({"method": "init"})), Ok(json!(null))),
            (
                Some(json!({"method": "printHello"})),
                Ok(json!("Hello from Rust!")),
            ),
            (
                Some(json!({"method": "printCustom", "params": ["Hello from tests"]})),
                Ok(json!("Rust says: Hello from tests")),
            ),
        ]);
        let sandbox = Sandbox::new(panel(sdk));
        assert_eq!(sandbox.state().status(), SdkStatus::Uninitialized);

        let sandbox = sandbox.load().await;
        assert_eq!(sandbox.state().status(), SdkStatus::Ready);
        assert!(!sandbox.state().is_loading());

        let sandbox = sandbox
            .update(Message::View(view::Message::Functions(
                FunctionsMessage::PrintHello,
            )))
            .await
            .update(Message::View(view::Message::Functions(
                FunctionsMessage::PrintCustom,
            )))
            .await;
        assert_eq!(
            activity(&sandbox),
            vec![
                "Hello from Rust!".to_string(),
                "Rust says: Hello from tests".to_string()
            ]
        );
        assert!(sandbox.state().error().is_none());
    }

    #[tokio::test]
    async fn init_skipped_if_sdk_ready() {
        // No init call is expected by the mock.
        let sdk = Sdk::new(vec![]).initialized();
        let sandbox = Sandbox::new(panel(sdk)).load().await;
        assert_eq!(sandbox.state().status(), SdkStatus::Ready);
    }

    #[tokio::test]
    async fn init_failure() {
        let sdk = Sdk::new(vec![(
            Some(json!({"method": "init"})),
            Err(SdkError::Rejected("boom".to_string())),
        )]);
        let sandbox = Sandbox::new(panel(sdk)).load().await;
        assert_eq!(sandbox.state().status(), SdkStatus::Uninitialized);
        assert_eq!(
            sandbox.state().error().map(|e| e.to_string()),
            Some("Failed to initialize WASM SDK: Request rejected: boom".to_string())
        );

        // Calls are refused until the SDK is ready.
        let sandbox = sandbox
            .update(Message::View(view::Message::Functions(
                FunctionsMessage::PrintHello,
            )))
            .await;
        assert_eq!(sandbox.state().error(), Some(&Error::NotInitialized));
        assert!(activity(&sandbox).is_empty());
    }

    #[tokio::test]
    async fn reinitialize_after_failure() {
        let sdk = Sdk::new(vec![
            (
                Some(json!({"method": "init"})),
                Err(SdkError::Rejected("boom".to_string())),
            ),
            (Some(json!({"method": "init"})), Ok(json!(null))),
            (Some(json!({"method": "printHello"})), Ok(json!("hi"))),
        ]);
        let sandbox = Sandbox::new(panel(sdk)).load().await;
        assert_eq!(sandbox.state().status(), SdkStatus::Uninitialized);
        assert!(sandbox.state().error().is_some());

        let sandbox = sandbox
            .update(Message::View(view::Message::Functions(
                FunctionsMessage::Initialize,
            )))
            .await;
        assert_eq!(sandbox.state().status(), SdkStatus::Ready);
        assert!(sandbox.state().error().is_none());

        let sandbox = sandbox
            .update(Message::View(view::Message::Functions(
                FunctionsMessage::PrintHello,
            )))
            .await;
        assert_eq!(activity(&sandbox), vec!["hi".to_string()]);
        assert!(sandbox.state().error().is_none());
    }

    #[tokio::test]
    async fn reinitialize() {
        let sdk = Sdk::new(vec![
            (Some(json!({"method": "init"})), Ok(json!(null))),
        ]);
        let sandbox = Sandbox::new(panel(sdk)).load().await;
        assert_eq!(sandbox.state().status(), SdkStatus::Ready);
        // The SDK already reports ready, init is not called again.
        let sandbox = sandbox
            .update(Message::View(view::Message::Functions(
                FunctionsMessage::Initialize,
            )))
            .await;
        assert_eq!(sandbox.state().status(), SdkStatus::Ready);
    }

    #[tokio::test]
    async fn failed_call_is_not_logged() {
        let sdk = Sdk::new(vec![(
            Some(json!({"method": "printHello"})),
            Err(SdkError::Unexpected("trap".to_string())),
        )])
        .initialized();
        let sandbox = Sandbox::new(panel(sdk))
            .load()
            .await
            .update(Message::View(view::Message::Functions(
                FunctionsMessage::PrintHello,
            )))
            .await;
        assert!(activity(&sandbox).is_empty());
        assert_eq!(
            sandbox.state().error().map(|e| e.to_string()),
            Some("Failed to call printHello: Unexpected SDK error: trap".to_string())
        );
    }

    #[test]
    fn second_request_while_loading_is_dropped() {
        let sdk = Sdk::new(vec![]).initialized();
        let mut panel = panel(sdk);
        // Ready without running the task.
        let _ = panel.update(Message::Initialized(1, Ok(())));
        assert_eq!(panel.status(), SdkStatus::Uninitialized);

        let _ = panel.load();
        assert_eq!(panel.status(), SdkStatus::Initializing);
        assert!(panel.is_loading());
        // The pending initialization is request 1.
        let _ = panel.update(Message::Initialized(1, Ok(())));
        assert_eq!(panel.status(), SdkStatus::Ready);

        let _ = panel.update(Message::View(view::Message::Functions(
            FunctionsMessage::PrintHello,
        )));
        assert!(panel.is_loading());
        // Request 3 would be the duplicate: it is never started.
        let _ = panel.update(Message::View(view::Message::Functions(
            FunctionsMessage::PrintHello,
        )));
        let task = panel.update(Message::Printed(3, Ok("dup".to_string())));
        assert!(iced_runtime::task::into_stream(task).is_none());
        assert!(panel.is_loading());

        let task = panel.update(Message::Printed(2, Ok("Hello".to_string())));
        assert!(iced_runtime::task::into_stream(task).is_some());
        assert!(!panel.is_loading());
    }
}
