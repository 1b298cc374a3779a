//! Geolume - a floating assistant chat widget built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI and owns the conversation state
//! - Backend thread: runs a Tokio runtime that owns the reply and reset timers
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;

use geolume_chat::app::ChatWidgetApp;
use geolume_chat::{config, logging};

fn main() -> eframe::Result<()> {
    logging::init();
    let config = config::load_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([420.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Geolume",
        options,
        Box::new(|cc| Ok(Box::new(ChatWidgetApp::new(cc, config)))),
    )
}
