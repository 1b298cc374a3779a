//! Floating launcher button shown while the panel is closed.

use eframe::egui::{self, Color32, FontId, Sense, Stroke};

use crate::state::WidgetAction;
use crate::ui::theme::WidgetTheme;

pub const LAUNCHER_SIZE: f32 = 56.0;

/// Paint the round launcher. Returns `TogglePanel` when clicked.
pub fn render_launcher(
    ui: &mut egui::Ui,
    theme: &WidgetTheme,
    notification_dot: bool,
) -> Option<WidgetAction> {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(LAUNCHER_SIZE, LAUNCHER_SIZE), Sense::click());
    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
    let painter = ui.painter();
    let time = ui.input(|i| i.time);
    let radius = if response.hovered() {
        LAUNCHER_SIZE / 2.0 * 1.06
    } else {
        LAUNCHER_SIZE / 2.0
    };

    // ping ring
    let ping = (time % 1.5 / 1.5) as f32;
    painter.circle_stroke(
        rect.center(),
        radius + ping * 10.0,
        Stroke::new(2.0, theme.brand_soft.gamma_multiply(0.35 * (1.0 - ping))),
    );

    painter.circle_filled(rect.center() + egui::vec2(0.0, 2.0), radius, Color32::from_black_alpha(35));
    painter.circle_filled(rect.center(), radius, theme.brand);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "💬",
        FontId::proportional(22.0),
        theme.text_on_brand,
    );

    if notification_dot {
        let pulse = 0.75 + 0.25 * (time * 3.0).sin().abs() as f32;
        let dot = rect.right_top() + egui::vec2(-6.0, 6.0);
        painter.circle_filled(dot, 8.0, theme.notification.gamma_multiply(pulse));
        painter.circle_filled(dot, 4.0, Color32::WHITE);
    }

    ui.ctx().request_repaint();

    response.clicked().then_some(WidgetAction::TogglePanel)
}
