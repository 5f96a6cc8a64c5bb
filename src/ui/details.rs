use crate::app::FlagshipApp;
use egui::{self, Margin, RichText};

impl FlagshipApp {
    /// Side panel with the active event's rules and contacts.
    pub(crate) fn render_details_panel(&mut self, ctx: &egui::Context) {
        let accent = self.settings.accent_color.to_color();
        let weak = crate::ui::main::theme::weak_text_color(&self.settings);

        egui::SidePanel::right("details")
            .default_width(300.0)
            .min_width(220.0)
            .frame(
                egui::Frame::NONE
                    .fill(ctx.style().visuals.window_fill)
                    .inner_margin(Margin::same(14)),
            )
            .show(ctx, |ui| {
                let Some(event) = self.active_event() else {
                    return;
                };

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.label(RichText::new(&event.name).size(18.0).strong());
                        ui.label(RichText::new(&event.category).color(accent).size(12.0));
                        ui.add_space(8.0);

                        for line in event.highlights() {
                            ui.label(RichText::new(line).size(12.0));
                        }

                        if let Some(description) = &event.description {
                            ui.add_space(10.0);
                            ui.label(RichText::new("Overview").strong());
                            ui.label(RichText::new(&description.overview).color(weak));

                            let rules = description.rule_lines();
                            if !rules.is_empty() {
                                ui.add_space(10.0);
                                ui.label(RichText::new("Rules").strong());
                                for (heading, text) in rules {
                                    ui.add_space(4.0);
                                    ui.label(RichText::new(heading).size(12.0).color(accent));
                                    ui.label(RichText::new(text).size(12.0));
                                }
                            }
                        }

                        if !event.contact.is_empty() {
                            ui.add_space(10.0);
                            ui.label(RichText::new("Contact").strong());
                            for contact in &event.contact {
                                ui.add_space(4.0);
                                ui.label(&contact.name);
                                ui.label(RichText::new(&contact.phone).color(weak).size(12.0));
                                ui.hyperlink_to(
                                    RichText::new(&contact.email).size(12.0),
                                    format!("mailto:{}", contact.email),
                                );
                            }
                        }
                    });
            });
    }
}
