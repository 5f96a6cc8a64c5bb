use super::card::{paint_event_card, CardImage, CardStyle};
use crate::app::FlagshipApp;
use crate::ui::main::theme;
use egui::{self, Margin, Rect, RichText, Sense, Vec2};

/// Widest the carousel grows on large windows.
const MAX_CAROUSEL_WIDTH: f32 = 1216.0;
const DOTS_HEIGHT: f32 = 24.0;
const CARD_GUTTER: f32 = 8.0;

impl FlagshipApp {
    pub(crate) fn render_carousel_view(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(Margin::symmetric(24, 16)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Flagship Events")
                            .size(28.0)
                            .strong()
                            .color(self.settings.accent_color.to_color()),
                    );
                });
                ui.add_space(16.0);

                let available = ui.available_size();
                let track_height = (available.y - DOTS_HEIGHT - 8.0).max(160.0);
                let (row, _) =
                    ui.allocate_exact_size(Vec2::new(available.x, track_height), Sense::hover());
                let track_rect = Rect::from_center_size(
                    row.center(),
                    Vec2::new(available.x.min(MAX_CAROUSEL_WIDTH), track_height),
                );
                self.paint_track(ui, track_rect);

                ui.add_space(8.0);
                let (dots_row, _) =
                    ui.allocate_exact_size(Vec2::new(available.x, DOTS_HEIGHT), Sense::hover());
                self.render_dots(ui, dots_row);

                // The whole widget, dots included, counts as hovering the carousel
                let container = Rect::from_x_y_ranges(
                    track_rect.x_range(),
                    track_rect.top()..=dots_row.bottom(),
                );
                self.set_pointer_over_carousel(ui.rect_contains_pointer(container));
            });
    }

    /// Paint the slots of the tripled track that intersect `track_rect`.
    fn paint_track(&self, ui: &egui::Ui, track_rect: Rect) {
        let painter = ui.painter_at(track_rect);
        let width = track_rect.width();
        let offset = self.carousel.offset();

        let style = CardStyle {
            fill: theme::card_fill(&self.settings),
            text: theme::text_color(&self.settings),
            weak_text: theme::weak_text_color(&self.settings),
            accent: self.settings.accent_color.to_color(),
        };

        let first = offset.floor().max(0.0) as usize;
        let last = (first + 1).min(self.carousel.track_len() - 1);

        for slot in first..=last {
            let x = track_rect.left() + (slot as f32 - offset) * width;
            let slot_rect = Rect::from_min_size(egui::pos2(x, track_rect.top()), track_rect.size());
            if !slot_rect.intersects(track_rect) {
                continue;
            }

            let index = self.carousel.event_at(slot);
            let Some(event) = self.catalog.get(index) else {
                continue;
            };

            let image = match self.textures.get(&index) {
                Some(texture) => CardImage::Loaded(texture),
                None if self.is_image_loading(index) => CardImage::Loading,
                None => CardImage::Missing,
            };

            paint_event_card(
                &painter,
                slot_rect.shrink2(Vec2::new(CARD_GUTTER, 0.0)),
                event,
                image,
                &style,
                self.carousel.is_active_slot(slot),
            );
        }
    }
}
