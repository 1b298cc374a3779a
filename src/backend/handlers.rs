//! Routing of UI actions onto the scheduler.

use std::ops::ControlFlow;

use tracing::debug;

use super::scheduler::Scheduler;
use crate::protocol::BackendAction;

/// Handle one action. `Break` means the backend should stop.
pub fn handle_backend_action(action: BackendAction, scheduler: &mut Scheduler) -> ControlFlow<()> {
    match action {
        BackendAction::ScheduleReply(request) => scheduler.schedule_reply(request),
        BackendAction::CancelReply(task) => {
            if !scheduler.cancel_reply(task) {
                debug!(?task, "nothing to cancel");
            }
        }
        BackendAction::ScheduleReset => scheduler.schedule_reset(),
        BackendAction::Shutdown => {
            scheduler.abort_all();
            return ControlFlow::Break(());
        }
    }
    ControlFlow::Continue(())
}
