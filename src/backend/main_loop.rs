//! Backend event loop: drains UI actions and drives the scheduler.

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{error, info};

use super::handlers;
use super::scheduler::Scheduler;
use crate::config::Timings;
use crate::protocol::{BackendAction, GuiEvent};
use crate::replies::ReplyGenerator;

/// How often the loop checks for new actions
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Run the backend event loop on a tokio runtime. Blocks until the UI sends
/// `Shutdown` or drops its end of the action channel.
pub fn run_backend(
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<GuiEvent>,
    generator: Box<dyn ReplyGenerator>,
    timings: Timings,
) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to create tokio runtime");
            let _ = event_tx.send(GuiEvent::Error(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    rt.block_on(async move {
        let mut scheduler = Scheduler::new(event_tx, generator, timings);
        info!("reply scheduler started");

        loop {
            // Check for actions from the UI (non-blocking)
            loop {
                match action_rx.try_recv() {
                    Ok(action) => {
                        if handlers::handle_backend_action(action, &mut scheduler).is_break() {
                            info!("reply scheduler stopped");
                            return;
                        }
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        scheduler.abort_all();
                        info!("ui gone, reply scheduler stopped");
                        return;
                    }
                }
            }

            scheduler.prune_finished();
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    });
}

