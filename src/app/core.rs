//! Core ChatWidgetApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::{info, warn};

use crate::backend::run_backend;
use crate::config::WidgetConfig;
use crate::protocol::{BackendAction, GuiEvent};
use crate::replies::{CannedReplies, ReplyGenerator};
use crate::state::{ConversationState, Effect, WidgetAction};
use crate::ui;

pub struct ChatWidgetApp {
    // Conversation (view, messages, composer, flags)
    pub state: ConversationState,

    // Read-only display constants and timings
    pub config: WidgetConfig,
    pub theme: ui::WidgetTheme,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    backend: Option<JoinHandle<()>>,
}

impl ChatWidgetApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: WidgetConfig) -> Self {
        let app = Self::with_config(config);
        ui::apply_widget_style(&cc.egui_ctx, &app.theme);
        app
    }

    /// Build the app with the stock canned-reply generator, without a window.
    pub fn with_config(config: WidgetConfig) -> Self {
        let generator = Box::new(CannedReplies::new(config.replies.clone(), config.timings));
        Self::with_generator(config, generator)
    }

    /// Build the app around any reply generator and spawn the backend thread.
    pub fn with_generator(config: WidgetConfig, generator: Box<dyn ReplyGenerator>) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        let timings = config.timings;
        let backend = thread::spawn(move || {
            run_backend(action_rx, event_tx, generator, timings);
        });
        info!(brand = %config.brand_name, "chat widget ready");

        Self {
            state: ConversationState::new(&config),
            theme: ui::WidgetTheme::from_palette(&config.palette),
            config,
            action_tx,
            event_rx,
            backend: Some(backend),
        }
    }

    /// Run a user action through the state and forward its effects.
    pub fn dispatch(&mut self, action: WidgetAction) {
        let effects = self.state.apply(action);
        self.run_effects(effects);
    }

    pub(super) fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            if self.action_tx.send(effect.into()).is_err() {
                warn!("reply scheduler is gone, dropping effect");
            }
        }
    }
}

impl Drop for ChatWidgetApp {
    fn drop(&mut self) {
        let _ = self.action_tx.send(BackendAction::Shutdown);
        if let Some(handle) = self.backend.take() {
            if handle.join().is_err() {
                warn!("reply scheduler thread panicked");
            }
        }
    }
}
