//! The expanded panel: a fixed-size card hosting one screen at a time.

use eframe::egui::{self, Stroke};

use crate::config::WidgetConfig;
use crate::state::{ConversationState, View, WidgetAction};
use crate::ui::theme::WidgetTheme;
use crate::ui::{capabilities, chat, welcome};

pub const PANEL_WIDTH: f32 = 320.0;
pub const PANEL_HEIGHT: f32 = 540.0;

pub fn render_panel(
    ui: &mut egui::Ui,
    state: &ConversationState,
    config: &WidgetConfig,
    theme: &WidgetTheme,
    actions: &mut Vec<WidgetAction>,
) {
    egui::Frame::new()
        .fill(theme.panel)
        .corner_radius(16.0)
        .shadow(ui.style().visuals.window_shadow)
        .show(ui, |ui| {
            ui.set_width(PANEL_WIDTH);
            ui.set_height(PANEL_HEIGHT);
            match state.view() {
                View::Welcome => welcome::render_welcome(ui, config, theme, actions),
                View::Capabilities => {
                    capabilities::render_capabilities(ui, state, config, theme, actions)
                }
                View::Chat => chat::render_chat(ui, state, config, theme, actions),
            }
        });
}

/// Frame shared by screen headers
pub(crate) fn header_frame(theme: &WidgetTheme) -> egui::Frame {
    egui::Frame::new()
        .fill(theme.panel)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .stroke(Stroke::new(1.0, theme.border))
}

/// Frame shared by the composer footers
pub(crate) fn footer_frame(theme: &WidgetTheme) -> egui::Frame {
    egui::Frame::new()
        .fill(theme.panel)
        .inner_margin(egui::Margin::same(14))
        .stroke(Stroke::new(1.0, theme.border))
}

pub(crate) fn body_frame(theme: &WidgetTheme) -> egui::Frame {
    egui::Frame::new()
        .fill(theme.panel)
        .inner_margin(egui::Margin::same(16))
}
