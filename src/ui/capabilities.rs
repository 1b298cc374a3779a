//! Capabilities screen: what the assistant can do, quick topics and a
//! composer that jumps into the chat.

use eframe::egui::{self, RichText};

use crate::config::WidgetConfig;
use crate::state::{ConversationState, View, WidgetAction};
use crate::ui::composer::render_composer;
use crate::ui::panel::{body_frame, footer_frame, header_frame};
use crate::ui::theme::WidgetTheme;
use crate::ui::widgets::{card, glyph_badge, icon_button};

const SKILLS: [(&str, &str); 2] = [
    (
        "📚 Ajudar com a Olimpíada de Geografia",
        "Dicas, estratégias e conteúdos para você se preparar",
    ),
    (
        "📋 Ajuda com regulamento e cronograma",
        "Tire suas dúvidas sobre regras e prazos da olimpíada",
    ),
];

pub fn render_capabilities(
    ui: &mut egui::Ui,
    state: &ConversationState,
    config: &WidgetConfig,
    theme: &WidgetTheme,
    actions: &mut Vec<WidgetAction>,
) {
    egui::TopBottomPanel::top("capabilities_header")
        .frame(header_frame(theme))
        .show_inside(ui, |ui| {
            ui.horizontal(|ui| {
                if icon_button(ui, "⬅", theme).clicked() {
                    actions.push(WidgetAction::Navigate(View::Welcome));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if icon_button(ui, "✕", theme).clicked() {
                        actions.push(WidgetAction::ClosePanel);
                    }
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            RichText::new(&config.brand_name)
                                .strong()
                                .color(theme.text_primary),
                        );
                    });
                });
            });
        });

    egui::TopBottomPanel::bottom("capabilities_composer")
        .frame(footer_frame(theme))
        .show_inside(ui, |ui| {
            render_composer(ui, state, theme, "Pergunte qualquer coisa...", actions);
        });

    egui::CentralPanel::default()
        .frame(body_frame(theme))
        .show_inside(ui, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        glyph_badge(ui, &config.bot_avatar, 64.0, theme.brand);
                        ui.add_space(12.0);
                        ui.label(
                            RichText::new("Minhas Habilidades")
                                .size(16.0)
                                .strong()
                                .color(theme.text_primary),
                        );
                    });
                    ui.add_space(16.0);

                    for (title, caption) in SKILLS {
                        card(ui, title, caption, theme, false);
                        ui.add_space(8.0);
                    }

                    ui.add_space(8.0);
                    ui.label(RichText::new("Sugestões:").small().color(theme.text_muted));
                    for topic in &config.replies.quick_topics {
                        let button = egui::Button::new(
                            RichText::new(topic).size(13.0).color(theme.accent),
                        )
                        .fill(theme.surface_muted)
                        .corner_radius(12.0);
                        if ui.add_sized([ui.available_width(), 30.0], button).clicked() {
                            actions.push(WidgetAction::SendQuickTopic(topic.clone()));
                        }
                    }

                    ui.add_space(16.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("Estou aqui para te ajudar com a Olimpíada de Geografia!")
                                .small()
                                .color(theme.text_muted),
                        );
                    });
                });
        });
}
