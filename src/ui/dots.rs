use crate::app::FlagshipApp;
use egui::{self, Rect, Sense, Vec2};

const DOT_SIZE: f32 = 8.0;
const DOT_GAP: f32 = 4.0;

impl FlagshipApp {
    /// One dot per event, centred in `row`. Clicking a dot queues a jump.
    pub(crate) fn render_dots(&mut self, ui: &mut egui::Ui, row: Rect) {
        let count = self.catalog.len();
        let active = self.carousel.active_index();
        let active_color = self.settings.accent_color.to_color();
        let idle_color = self.settings.accent_color.muted();

        let total_width = count as f32 * DOT_SIZE + count.saturating_sub(1) as f32 * DOT_GAP;
        let start_x = row.center().x - total_width / 2.0 + DOT_SIZE / 2.0;

        for index in 0..count {
            let center = egui::pos2(start_x + index as f32 * (DOT_SIZE + DOT_GAP), row.center().y);
            let dot_rect = Rect::from_center_size(center, Vec2::splat(DOT_SIZE));

            let response = ui.interact(
                dot_rect.expand(DOT_GAP / 2.0),
                ui.id().with(("carousel_dot", index)),
                Sense::click(),
            );

            let color = if index == active {
                active_color
            } else if response.hovered() {
                active_color.gamma_multiply(0.6)
            } else {
                idle_color
            };
            ui.painter().circle_filled(center, DOT_SIZE / 2.0, color);

            if response.clicked() {
                self.pending_jump = Some(index);
            }
            if let Some(event) = self.catalog.get(index) {
                response.on_hover_text(event.name.as_str());
            }
        }
    }
}
