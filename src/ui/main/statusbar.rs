use crate::app::FlagshipApp;
use egui::{self, Color32, Margin, RichText};

impl FlagshipApp {
    pub(crate) fn render_statusbar(&mut self, ctx: &egui::Context) {
        let accent = self.settings.accent_color.to_color();
        let weak = crate::ui::main::theme::weak_text_color(&self.settings);

        egui::TopBottomPanel::bottom("statusbar")
            .frame(
                egui::Frame::NONE
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .button(RichText::new("◀").size(14.0))
                        .on_hover_text("Previous (←)")
                        .clicked()
                    {
                        self.pending_navigate_prev = true;
                    }

                    let (play_icon, play_hint) = if self.carousel.is_paused() {
                        ("▶", "Resume auto-advance (Space)")
                    } else {
                        ("⏸", "Pause auto-advance (Space)")
                    };
                    if ui
                        .button(RichText::new(play_icon).size(14.0))
                        .on_hover_text(play_hint)
                        .clicked()
                    {
                        self.toggle_pause();
                    }

                    if ui
                        .button(RichText::new("▶▶").size(14.0))
                        .on_hover_text("Next (→)")
                        .clicked()
                    {
                        self.pending_navigate_next = true;
                    }

                    ui.separator();

                    let position = format!(
                        "{} / {}",
                        self.carousel.active_index() + 1,
                        self.catalog.len()
                    );
                    ui.label(RichText::new(position).size(12.0));

                    if let Some(event) = self.active_event() {
                        ui.label(RichText::new(&event.name).color(weak).size(12.0));
                    }

                    ui.separator();

                    if self.carousel.is_paused() {
                        ui.label(RichText::new("Paused").color(accent).size(11.0));
                    } else if self.carousel.is_hovered() {
                        ui.label(RichText::new("Hovering").color(weak).size(11.0));
                    } else if let Some(progress) = self.carousel.auto_progress() {
                        ui.add(
                            egui::ProgressBar::new(progress)
                                .desired_width(80.0)
                                .desired_height(6.0)
                                .fill(accent),
                        );
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button(RichText::new("⚙").size(14.0))
                            .on_hover_text("Settings")
                            .clicked()
                        {
                            self.show_settings_dialog = !self.show_settings_dialog;
                        }

                        if let Some((msg, _)) = &self.status_message {
                            ui.label(
                                RichText::new(msg)
                                    .color(Color32::from_rgb(255, 200, 100))
                                    .size(11.0),
                            );
                        } else if let Some(source) = self.events_source() {
                            ui.label(
                                RichText::new(source.display().to_string())
                                    .color(weak)
                                    .size(11.0),
                            );
                        }
                    });
                });
            });
    }
}
