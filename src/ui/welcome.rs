//! Welcome screen: brand header, greeting and entry points.

use eframe::egui::{self, RichText};

use crate::config::WidgetConfig;
use crate::state::{View, WidgetAction};
use crate::ui::panel::{body_frame, header_frame};
use crate::ui::theme::WidgetTheme;
use crate::ui::widgets::{card, glyph_badge, icon_button, primary_button};

pub fn render_welcome(
    ui: &mut egui::Ui,
    config: &WidgetConfig,
    theme: &WidgetTheme,
    actions: &mut Vec<WidgetAction>,
) {
    egui::TopBottomPanel::top("welcome_header")
        .frame(header_frame(theme))
        .show_inside(ui, |ui| {
            ui.horizontal(|ui| {
                glyph_badge(ui, "✨", 32.0, theme.brand);
                ui.label(
                    RichText::new(&config.brand_name)
                        .strong()
                        .color(theme.text_primary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if icon_button(ui, "✕", theme).clicked() {
                        actions.push(WidgetAction::ClosePanel);
                    }
                });
            });
        });

    egui::CentralPanel::default()
        .frame(body_frame(theme))
        .show_inside(ui, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        let bounce = ((ui.input(|i| i.time) * 3.0).sin().abs() * 6.0) as f32;
                        ui.add_space(16.0 - bounce);
                        glyph_badge(ui, &config.bot_avatar, 96.0, theme.brand);
                        ui.add_space(18.0 + bounce);
                        ui.ctx().request_repaint();

                        ui.label(RichText::new("Sou o").heading().strong().color(theme.text_primary));
                        ui.label(
                            RichText::new(format!("{} {}", config.brand_name, config.welcome_emoji))
                                .size(24.0)
                                .strong()
                                .color(theme.brand),
                        );
                        ui.add_space(4.0);
                        ui.label(RichText::new("Sua assistente na Olimpíada").color(theme.text_secondary));
                        ui.label(RichText::new("Brasileira de Geografia!").color(theme.text_secondary));
                        ui.add_space(24.0);

                        if primary_button(ui, "Iniciar Conversa", theme).clicked() {
                            actions.push(WidgetAction::StartConversation);
                        }

                        ui.add_space(20.0);
                        ui.label(RichText::new("Como posso te ajudar:").small().color(theme.text_muted));
                        ui.add_space(4.0);
                        if card(
                            ui,
                            "✨ Ver Todas as Habilidades",
                            "Veja tudo que posso fazer por você",
                            theme,
                            true,
                        )
                        .clicked()
                        {
                            actions.push(WidgetAction::Navigate(View::Capabilities));
                        }
                    });
                });
        });
}
