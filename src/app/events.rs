//! Event processing from backend

use super::ChatWidgetApp;
use crate::events;

impl ChatWidgetApp {
    /// Drain every pending backend event. Returns how many were applied.
    pub fn process_events(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            let effects = events::process_single_event(&mut self.state, event);
            self.run_effects(effects);
            processed += 1;
        }
        processed
    }
}
