//! Main update loop

use eframe::egui::{self, RichText};
use std::time::Duration;

use super::ChatWidgetApp;
use crate::state::WidgetAction;
use crate::ui;

/// Gap between the widget and the window corner
const WIDGET_MARGIN: f32 = 24.0;

impl eframe::App for ChatWidgetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Fired continuations
        self.process_events();

        // Esc closes the panel
        if self.state.is_panel_open() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.dispatch(WidgetAction::ClosePanel);
        }

        self.render_host_page(ctx);

        let mut actions = Vec::new();
        egui::Area::new(egui::Id::new("chat_widget"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-WIDGET_MARGIN, -WIDGET_MARGIN])
            .show(ctx, |ui| {
                if self.state.is_panel_open() {
                    ui::render_panel(ui, &self.state, &self.config, &self.theme, &mut actions);
                } else if let Some(action) =
                    ui::render_launcher(ui, &self.theme, self.config.notification_dot)
                {
                    actions.push(action);
                }
            });

        for action in actions {
            self.dispatch(action);
        }

        // Keep polling for continuations while idle
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

impl ChatWidgetApp {
    /// Stand-in for the page the widget is embedded in
    fn render_host_page(&self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(self.theme.page)
                    .inner_margin(egui::Margin::same(32)),
            )
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("Olimpíada Brasileira de Geografia")
                        .size(28.0)
                        .strong()
                        .color(self.theme.text_primary),
                );
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!(
                        "Converse com {} pelo botão no canto da tela.",
                        self.config.brand_name
                    ))
                    .color(self.theme.text_secondary),
                );
            });
    }
}
