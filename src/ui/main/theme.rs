use crate::settings::{Settings, Theme};
use egui::Color32;

pub fn apply_theme(ctx: &egui::Context, settings: &Settings) {
    let mut visuals = match settings.theme {
        Theme::Dark => {
            let mut visuals = egui::Visuals::dark();
            visuals.panel_fill = Color32::from_rgb(18, 14, 16);
            visuals.window_fill = Color32::from_rgb(28, 22, 25);
            visuals
        }
        Theme::Light => egui::Visuals::light(),
        Theme::Oled => {
            let mut visuals = egui::Visuals::dark();
            visuals.panel_fill = Color32::BLACK;
            visuals.window_fill = Color32::BLACK;
            visuals.extreme_bg_color = Color32::BLACK;
            visuals
        }
    };

    visuals.widgets.active.bg_fill = settings.accent_color.to_color();
    visuals.selection.bg_fill = settings.accent_color.to_color().linear_multiply(0.5);
    visuals.hyperlink_color = settings.accent_color.to_color();

    ctx.set_visuals(visuals);
}

/// Card background for the current theme.
pub fn card_fill(settings: &Settings) -> Color32 {
    match settings.theme {
        Theme::Dark => Color32::from_rgb(34, 26, 30),
        Theme::Light => Color32::from_rgb(250, 244, 244),
        Theme::Oled => Color32::from_rgb(14, 10, 12),
    }
}

pub fn text_color(settings: &Settings) -> Color32 {
    match settings.theme {
        Theme::Light => Color32::from_rgb(30, 24, 26),
        Theme::Dark | Theme::Oled => Color32::from_rgb(240, 232, 234),
    }
}

pub fn weak_text_color(settings: &Settings) -> Color32 {
    match settings.theme {
        Theme::Light => Color32::from_rgb(110, 100, 104),
        Theme::Dark | Theme::Oled => Color32::from_rgb(160, 150, 154),
    }
}
