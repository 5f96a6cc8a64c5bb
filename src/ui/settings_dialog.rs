use crate::app::FlagshipApp;
use crate::settings::{AccentColor, Theme};
use egui::{self, RichText};

impl FlagshipApp {
    pub(crate) fn render_settings_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_settings_dialog {
            return;
        }

        let mut open = self.show_settings_dialog;
        let mut timing_changed = false;

        egui::Window::new("Settings")
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.label(RichText::new("Appearance").small().weak());
                ui.horizontal(|ui| {
                    ui.radio_value(&mut self.settings.theme, Theme::Dark, "🌙 Dark");
                    ui.radio_value(&mut self.settings.theme, Theme::Light, "☀ Light");
                    ui.radio_value(&mut self.settings.theme, Theme::Oled, "OLED");
                });
                egui::ComboBox::from_label("Accent")
                    .selected_text(self.settings.accent_color.name())
                    .show_ui(ui, |ui| {
                        for accent in AccentColor::all() {
                            ui.selectable_value(
                                &mut self.settings.accent_color,
                                *accent,
                                accent.name(),
                            );
                        }
                    });

                ui.separator();
                ui.label(RichText::new("Carousel").small().weak());
                timing_changed |= ui
                    .add(
                        egui::Slider::new(&mut self.settings.auto_advance_secs, 0.0..=30.0)
                            .text("Auto-advance (s, 0 = off)"),
                    )
                    .changed();
                timing_changed |= ui
                    .add(
                        egui::Slider::new(&mut self.settings.transition_secs, 0.05..=2.0)
                            .text("Slide duration (s)"),
                    )
                    .changed();
                timing_changed |= ui
                    .checkbox(&mut self.settings.pause_on_hover, "Pause while hovering")
                    .changed();

                ui.separator();
                ui.label(RichText::new("Panels").small().weak());
                ui.checkbox(&mut self.settings.show_details, "Event details (I)");
                ui.checkbox(&mut self.settings.show_statusbar, "Status bar");
            });

        self.show_settings_dialog = open;
        if timing_changed {
            self.apply_settings();
        }
    }
}
