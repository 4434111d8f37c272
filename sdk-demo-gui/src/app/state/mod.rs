mod binding;
mod functions;
mod wallet;

use iced::Task;
use sdk_demo_ui::widget::*;

use super::{message::Message, view};

pub use binding::BindingPanel;
pub use functions::{FunctionsPanel, SdkStatus};
pub use wallet::{ConnectionStatus, WalletPanel};

pub trait State {
    fn view<'a>(&'a self) -> Element<'a, view::Message>;
    fn update(&mut self, _message: Message) -> Task<Message> {
        Task::none()
    }
    /// Task to run when the panel is first displayed.
    fn load(&mut self) -> Task<Message> {
        Task::none()
    }
}

pub type RequestId = u64;

/// Single slot tracking the request a panel is waiting for.
///
/// A new request can only start once the pending one is finished, and a
/// result is only accepted for the id that is pending.
#[derive(Debug, Default)]
pub struct InFlight {
    last: RequestId,
    pending: Option<RequestId>,
}

impl InFlight {
    /// Returns the id of the new request, or `None` if one is already pending.
    pub fn start(&mut self) -> Option<RequestId> {
        if self.pending.is_some() {
            return None;
        }
        self.last += 1;
        self.pending = Some(self.last);
        self.pending
    }

    /// Returns `true` if `id` was the pending request, which frees the slot.
    pub fn finish(&mut self, id: RequestId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
