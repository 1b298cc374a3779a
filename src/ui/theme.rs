//! Colors and text styles for the chat widget.
//!
//! # Overview
//!
//! The widget is a light surface floating over the host window. Brand colors
//! come from the configured [`Palette`]; everything else is a fixed neutral
//! scale tuned for a white panel:
//!
//! - `panel`: panel background
//! - `surface_muted`: cards, composer pill, assistant bubbles
//! - `surface_hover`: hovered cards and icon buttons
//! - `border`: header/footer separators
//!
//! Text has three levels: `text_primary` for content, `text_secondary` for
//! supporting copy and `text_muted` for timestamps and hints.
//!
//! Call [`apply_widget_style`] once at startup; render code then asks for a
//! `WidgetTheme` built from the loaded config.

use eframe::egui::{self, Color32, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

use crate::config::{parse_hex_color, Palette};

#[derive(Clone, Debug)]
pub struct WidgetTheme {
    /// Launcher, user bubbles, primary buttons
    pub brand: Color32,
    /// Secondary brand tone (badge rings, hover of primary buttons)
    pub brand_soft: Color32,
    pub accent: Color32,
    pub notification: Color32,
    pub page: Color32,
    pub panel: Color32,
    pub surface_muted: Color32,
    pub surface_hover: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub text_on_brand: Color32,
}

fn token_color(token: &str, fallback: Color32) -> Color32 {
    parse_hex_color(token)
        .map(|[r, g, b]| Color32::from_rgb(r, g, b))
        .unwrap_or(fallback)
}

impl WidgetTheme {
    pub fn from_palette(palette: &Palette) -> Self {
        let blue_600 = Color32::from_rgb(37, 99, 235);
        let blue_500 = Color32::from_rgb(59, 130, 246);
        Self {
            brand: token_color(&palette.brand_start, blue_600),
            brand_soft: token_color(&palette.brand_end, blue_500),
            accent: token_color(&palette.accent, blue_600),
            notification: token_color(&palette.notification, Color32::from_rgb(236, 72, 153)),
            page: Color32::from_rgb(241, 245, 249),
            panel: Color32::WHITE,
            surface_muted: Color32::from_rgb(249, 250, 251),
            surface_hover: Color32::from_rgb(243, 244, 246),
            border: Color32::from_rgb(243, 244, 246),
            text_primary: Color32::from_rgb(17, 24, 39),
            text_secondary: Color32::from_rgb(75, 85, 99),
            text_muted: Color32::from_rgb(107, 114, 128),
            text_on_brand: Color32::WHITE,
        }
    }

    /// Bubble fill for a message
    pub fn bubble_fill(&self, from_user: bool) -> Color32 {
        if from_user {
            self.brand
        } else {
            self.surface_hover
        }
    }

    pub fn bubble_text(&self, from_user: bool) -> Color32 {
        if from_user {
            self.text_on_brand
        } else {
            self.text_primary
        }
    }
}

/// Text hierarchy used by the widget (proportional only):
///
/// - **Small**: 11px - timestamps, card captions
/// - **Body**: 14px - message text, labels
/// - **Button**: 14px
/// - **Heading**: 20px - welcome headline
/// - **title**: 15px - panel header titles
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(11.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(14.0, Proportional)),
        (TextStyle::Heading, FontId::new(20.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, Monospace)),
        (TextStyle::Name("title".into()), FontId::new(15.0, Proportional)),
    ]
    .into()
}

/// Apply light visuals, the text hierarchy and rounded widgets.
pub fn apply_widget_style(ctx: &egui::Context, theme: &WidgetTheme) {
    ctx.set_visuals(egui::Visuals::light());
    let mut style = (*ctx.style()).clone();

    style.text_styles = configure_text_styles();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);

    style.visuals.widgets.inactive.weak_bg_fill = theme.surface_muted;
    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::NONE;
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(12);

    style.visuals.widgets.hovered.weak_bg_fill = theme.surface_hover;
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::NONE;
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(12);

    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(12);
    style.visuals.selection.bg_fill = theme.brand_soft.linear_multiply(0.35);
    style.visuals.extreme_bg_color = theme.surface_muted;

    ctx.set_style(style);
}
