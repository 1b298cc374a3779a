use crate::replies::ReplyRequest;

/// Identifies one scheduled reply continuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Plan a reply and deliver it once its delay elapses
    ScheduleReply(ReplyRequest),
    /// Abort a pending reply; no-op if it already fired
    CancelReply(TaskId),
    /// Start the reset timer
    ScheduleReset,
    /// Abort everything and stop the backend loop
    Shutdown,
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A reply continuation fired
    ReplyReady { task: TaskId, text: String },
    /// The reset delay elapsed
    ResetElapsed,
    /// Backend failure (runtime could not start)
    Error(String),
}
