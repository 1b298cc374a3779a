//! Small painted widgets shared by the screens.

use eframe::egui::{self, Color32, FontId, RichText, Sense, Stroke};

use crate::message::Message;
use crate::ui::theme::WidgetTheme;

/// Widest a chat bubble may grow
pub const BUBBLE_MAX_WIDTH: f32 = 230.0;

/// Filled circle with a centred glyph (brand badge, avatars).
pub fn glyph_badge(ui: &mut egui::Ui, glyph: &str, size: f32, fill: Color32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(
        rect.center() + egui::vec2(0.0, 1.5),
        size / 2.0,
        Color32::from_black_alpha(25),
    );
    painter.circle_filled(rect.center(), size / 2.0, fill);
    painter.circle_filled(
        rect.center(),
        size / 3.0,
        Color32::from_white_alpha(45),
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        glyph,
        FontId::proportional(size * 0.38),
        Color32::WHITE,
    );
    response
}

/// Round, frameless header button (close, back, reset).
pub fn icon_button(ui: &mut egui::Ui, glyph: &str, theme: &WidgetTheme) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(glyph).size(16.0).color(theme.text_muted))
            .fill(Color32::TRANSPARENT)
            .corner_radius(16.0)
            .min_size(egui::vec2(32.0, 32.0)),
    )
}

/// Full-width call-to-action in the brand color.
pub fn primary_button(ui: &mut egui::Ui, label: &str, theme: &WidgetTheme) -> egui::Response {
    ui.add_sized(
        [ui.available_width(), 44.0],
        egui::Button::new(
            RichText::new(label)
                .size(15.0)
                .strong()
                .color(theme.text_on_brand),
        )
        .fill(theme.brand)
        .corner_radius(16.0),
    )
}

/// Clickable muted card with a title and a caption.
pub fn card(
    ui: &mut egui::Ui,
    title: &str,
    caption: &str,
    theme: &WidgetTheme,
    clickable: bool,
) -> egui::Response {
    let frame = egui::Frame::new()
        .fill(theme.surface_muted)
        .stroke(Stroke::new(1.0, theme.border))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(12));

    let inner = frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(title).size(14.0).strong().color(theme.text_secondary));
        ui.label(RichText::new(caption).small().color(theme.text_muted));
    });

    if clickable {
        inner
            .response
            .interact(Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand)
    } else {
        inner.response
    }
}

/// One chat bubble: text plus its clock label.
pub fn message_bubble(ui: &mut egui::Ui, msg: &Message, theme: &WidgetTheme) {
    let from_user = msg.is_from_user();
    let text_color = theme.bubble_text(from_user);

    egui::Frame::new()
        .fill(theme.bubble_fill(from_user))
        .corner_radius(16.0)
        .inner_margin(egui::Margin::symmetric(14, 10))
        .show(ui, |ui| {
            ui.set_max_width(BUBBLE_MAX_WIDTH);
            ui.vertical(|ui| {
                ui.add(egui::Label::new(RichText::new(&msg.text).color(text_color)).wrap());
                ui.label(
                    RichText::new(msg.time_label())
                        .small()
                        .color(text_color.gamma_multiply(0.7)),
                );
            });
        });
}

/// Three bouncing dots and "digitando..." while a reply is pending.
pub fn typing_indicator(ui: &mut egui::Ui, theme: &WidgetTheme) {
    egui::Frame::new()
        .fill(theme.surface_hover)
        .corner_radius(16.0)
        .inner_margin(egui::Margin::symmetric(14, 10))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(36.0, 14.0), Sense::hover());
                let time = ui.input(|i| i.time);
                for dot in 0..3 {
                    let phase = time * 6.0 - dot as f64 * 0.6;
                    let lift = (phase.sin().max(0.0) * 4.0) as f32;
                    let center = egui::pos2(
                        rect.left() + 6.0 + dot as f32 * 12.0,
                        rect.center().y + 2.0 - lift,
                    );
                    ui.painter().circle_filled(center, 4.0, theme.text_muted.gamma_multiply(0.6));
                }
                ui.label(RichText::new("digitando...").small().color(theme.text_muted));
            });
        });
    ui.ctx().request_repaint();
}
