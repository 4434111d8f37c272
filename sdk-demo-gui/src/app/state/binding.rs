use std::sync::Arc;

use iced::Task;
use sdk_demo_ui::widget::*;
use tracing::warn;

use crate::{
    app::{error::Error, message::Message, state::State, view},
    sdk::BindingSdk,
};

pub const OPERANDS: (f64, f64) = (5.0, 7.0);

/// Initializes the binding SDK once and displays the sum of two fixed operands.
///
/// A failure is only logged: the panel keeps its placeholder.
pub struct BindingPanel {
    sdk: Arc<dyn BindingSdk + Sync + Send>,
    operands: (f64, f64),
    result: Option<f64>,
}

impl BindingPanel {
    pub fn new(sdk: Arc<dyn BindingSdk + Sync + Send>) -> Self {
        Self {
            sdk,
            operands: OPERANDS,
            result: None,
        }
    }

    pub fn result(&self) -> Option<f64> {
        self.result
    }
}

impl State for BindingPanel {
    fn view<'a>(&'a self) -> Element<'a, view::Message> {
        view::binding::binding(self.operands, self.result)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::Sum(res) = message {
            match res {
                Ok(sum) => self.result = Some(sum),
                Err(e) => warn!("Binding demo failed: {}", e),
            }
        }
        Task::none()
    }

    fn load(&mut self) -> Task<Message> {
        let sdk = self.sdk.clone();
        let (a, b) = self.operands;
        Task::perform(
            async move {
                sdk.init()
                    .await
                    .map(|()| sdk.add(a, b))
                    .map_err(Error::Init)
            },
            Message::Sum,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        sdk::{embedded::EmbeddedBinding, SdkError},
        utils::sandbox::Sandbox,
    };
    use async_trait::async_trait;

    #[derive(Debug)]
    struct BrokenBinding;

    #[async_trait]
    impl BindingSdk for BrokenBinding {
        async fn init(&self) -> Result<(), SdkError> {
            Err(SdkError::Rejected("no module".to_string()))
        }
        fn add(&self, _a: f64, _b: f64) -> f64 {
            unreachable!("add must not be called before init succeeded")
        }
    }

    #[tokio::test]
    async fn displays_sum() {
        let sandbox = Sandbox::new(BindingPanel::new(Arc::new(EmbeddedBinding)));
        assert_eq!(sandbox.state().result(), None);
        let sandbox = sandbox.load().await;
        assert_eq!(sandbox.state().result(), Some(12.0));
        assert_eq!(view::binding::sum_label((5.0, 7.0), Some(12.0)), "5 + 7 = 12");
    }

    #[tokio::test]
    async fn failure_keeps_placeholder() {
        let sandbox = Sandbox::new(BindingPanel::new(Arc::new(BrokenBinding)));
        let sandbox = sandbox.load().await;
        assert_eq!(sandbox.state().result(), None);
        assert_eq!(view::binding::sum_label((5.0, 7.0), None), "5 + 7 = ...");
    }
}
