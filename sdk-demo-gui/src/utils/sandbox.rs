use iced::{futures::StreamExt, Task};
use iced_runtime::{task, Action};

use crate::app::{message::Message, state::State};

/// Runs the tasks returned by a panel to completion, feeding every produced
/// message back to the panel.
pub struct Sandbox<S: State> {
    state: S,
    emitted: Vec<Message>,
}

impl<S: State + Send + 'static> Sandbox<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            emitted: Vec::new(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Every message produced by the panel tasks so far, in order.
    pub fn emitted(&self) -> &[Message] {
        &self.emitted
    }

    pub async fn update(mut self, message: Message) -> Self {
        let cmd = self.state.update(message);
        self.run(cmd).await;
        self
    }

    pub async fn load(mut self) -> Self {
        let cmd = self.state.load();
        self.run(cmd).await;
        self
    }

    async fn run(&mut self, cmd: Task<Message>) {
        let mut pending = vec![cmd];
        while let Some(cmd) = pending.pop() {
            if let Some(mut stream) = task::into_stream(cmd) {
                while let Some(action) = stream.next().await {
                    if let Action::Output(msg) = action {
                        self.emitted.push(msg.clone());
                        pending.push(self.state.update(msg));
                    }
                }
            }
        }
    }
}
