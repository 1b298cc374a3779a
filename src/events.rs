//! Backend event processing (fired continuations).

use tracing::{debug, warn};

use crate::protocol::GuiEvent;
use crate::state::{ConversationState, Effect};

/// Apply one backend event to the conversation, returning follow-up effects.
pub fn process_single_event(state: &mut ConversationState, event: GuiEvent) -> Vec<Effect> {
    match event {
        GuiEvent::ReplyReady { task, text } => {
            debug!(?task, "reply ready");
            state.receive_reply(task, text);
            Vec::new()
        }
        GuiEvent::ResetElapsed => state.finish_reset(),
        GuiEvent::Error(msg) => {
            warn!(error = %msg, "backend error");
            Vec::new()
        }
    }
}
