//! Timer bookkeeping for scheduled continuations.

use std::collections::HashMap;
use std::time::Duration;

use crossbeam_channel::Sender;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::config::Timings;
use crate::protocol::{GuiEvent, TaskId};
use crate::replies::{ReplyGenerator, ReplyRequest};

/// Owns every outstanding continuation. Must be used inside a Tokio runtime.
pub struct Scheduler {
    event_tx: Sender<GuiEvent>,
    generator: Box<dyn ReplyGenerator>,
    reset_delay: Duration,
    replies: HashMap<TaskId, JoinHandle<()>>,
    resets: Vec<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(
        event_tx: Sender<GuiEvent>,
        generator: Box<dyn ReplyGenerator>,
        timings: Timings,
    ) -> Self {
        Self {
            event_tx,
            generator,
            reset_delay: Duration::from_millis(timings.reset_delay_ms),
            replies: HashMap::new(),
            resets: Vec::new(),
        }
    }

    pub fn schedule_reply(&mut self, request: ReplyRequest) {
        let planned = self.generator.plan(&request);
        let task = request.task;
        debug!(?task, delay_ms = planned.delay.as_millis() as u64, "scheduling reply");

        let event_tx = self.event_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(planned.delay).await;
            let _ = event_tx.send(GuiEvent::ReplyReady {
                task,
                text: planned.text,
            });
        });
        if let Some(previous) = self.replies.insert(task, handle) {
            previous.abort();
        }
    }

    /// Abort a reply timer. Returns false if it was unknown or already done.
    pub fn cancel_reply(&mut self, task: TaskId) -> bool {
        match self.replies.remove(&task) {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                debug!(?task, "reply cancelled");
                true
            }
            _ => false,
        }
    }

    pub fn schedule_reset(&mut self) {
        let event_tx = self.event_tx.clone();
        let delay = self.reset_delay;
        self.resets.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = event_tx.send(GuiEvent::ResetElapsed);
        }));
    }

    pub fn pending_replies(&self) -> usize {
        self.replies.len()
    }

    /// Forget handles whose timers already fired.
    pub fn prune_finished(&mut self) {
        self.replies.retain(|task, handle| {
            let done = handle.is_finished();
            if done {
                trace!(?task, "reply delivered");
            }
            !done
        });
        self.resets.retain(|handle| !handle.is_finished());
    }

    pub fn abort_all(&mut self) {
        for (_, handle) in self.replies.drain() {
            handle.abort();
        }
        for handle in self.resets.drain(..) {
            handle.abort();
        }
    }
}
