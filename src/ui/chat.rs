//! Chat screen: message list, typing indicator and composer.

use eframe::egui::{self, RichText};

use crate::config::WidgetConfig;
use crate::state::{ConversationState, View, WidgetAction};
use crate::ui::composer::render_composer;
use crate::ui::panel::{body_frame, footer_frame, header_frame};
use crate::ui::theme::WidgetTheme;
use crate::ui::widgets::{icon_button, message_bubble, typing_indicator};

pub fn render_chat(
    ui: &mut egui::Ui,
    state: &ConversationState,
    config: &WidgetConfig,
    theme: &WidgetTheme,
    actions: &mut Vec<WidgetAction>,
) {
    egui::TopBottomPanel::top("chat_header")
        .frame(header_frame(theme))
        .show_inside(ui, |ui| {
            ui.horizontal(|ui| {
                if icon_button(ui, "⬅", theme).clicked() {
                    actions.push(WidgetAction::Navigate(View::Welcome));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if state.is_resetting() {
                        ui.add_sized([32.0, 32.0], egui::Spinner::new().size(16.0));
                    } else if icon_button(ui, "⟳", theme)
                        .on_hover_text("Nova conversa")
                        .clicked()
                    {
                        actions.push(WidgetAction::Reset);
                    }
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(format!("Olá, {}", config.user_name))
                                .strong()
                                .color(theme.text_primary),
                        );
                        ui.label(
                            RichText::new("Como posso ajudar?")
                                .small()
                                .color(theme.text_muted),
                        );
                    });
                });
            });
        });

    egui::TopBottomPanel::bottom("chat_composer")
        .frame(footer_frame(theme))
        .show_inside(ui, |ui| {
            render_composer(ui, state, theme, "Digite sua mensagem...", actions);
        });

    egui::CentralPanel::default()
        .frame(body_frame(theme))
        .show_inside(ui, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for msg in state.messages() {
                        let layout = if msg.is_from_user() {
                            egui::Layout::right_to_left(egui::Align::TOP)
                        } else {
                            egui::Layout::left_to_right(egui::Align::TOP)
                        };
                        ui.with_layout(layout, |ui| message_bubble(ui, msg, theme));
                        ui.add_space(10.0);
                    }

                    if state.is_assistant_typing() {
                        ui.with_layout(egui::Layout::left_to_right(egui::Align::TOP), |ui| {
                            typing_indicator(ui, theme);
                        });
                    }
                });
        });
}
