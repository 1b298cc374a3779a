//! Single-line message composer with a send button.

use eframe::egui::{self, RichText, Stroke};

use crate::state::{ConversationState, WidgetAction};
use crate::ui::theme::WidgetTheme;

/// Render the composer pill. Edits and sends are pushed to `actions`; the
/// send button is disabled while the draft is blank.
pub fn render_composer(
    ui: &mut egui::Ui,
    state: &ConversationState,
    theme: &WidgetTheme,
    hint: &str,
    actions: &mut Vec<WidgetAction>,
) {
    let mut draft = state.composer_text().to_owned();

    egui::Frame::new()
        .fill(theme.surface_muted)
        .stroke(Stroke::new(1.0, theme.border))
        .corner_radius(22.0)
        .inner_margin(egui::Margin::symmetric(14, 6))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let send_width = 32.0;
                let response = ui.add(
                    egui::TextEdit::singleline(&mut draft)
                        .hint_text(hint)
                        .frame(false)
                        .desired_width(ui.available_width() - send_width - 8.0),
                );

                if draft != state.composer_text() {
                    actions.push(WidgetAction::EditComposer(draft.clone()));
                }

                // Singleline edits drop focus on Enter
                let enter_pressed =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                let can_send = crate::validation::is_sendable(&draft);
                let send = ui.add_enabled(
                    can_send,
                    egui::Button::new(RichText::new("➤").color(theme.text_on_brand))
                        .fill(theme.brand)
                        .corner_radius(16.0)
                        .min_size(egui::vec2(send_width, send_width)),
                );

                if (enter_pressed || send.clicked()) && can_send {
                    actions.push(WidgetAction::SubmitComposer);
                    response.request_focus();
                }
            });
        });
}
