use crate::events::FlagshipEvent;
use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Stroke, StrokeKind, Vec2};

const CARD_RADIUS: u8 = 14;
const INACTIVE_OPACITY: f32 = 0.45;

/// Colours a card is painted with.
pub struct CardStyle {
    pub fill: Color32,
    pub text: Color32,
    pub weak_text: Color32,
    pub accent: Color32,
}

/// Artwork state for a card.
#[derive(Clone, Copy)]
pub enum CardImage<'a> {
    Loaded(&'a egui::TextureHandle),
    Loading,
    Missing,
}

/// Placeholder tint derived from the category name, stable across runs.
pub fn category_color(category: &str) -> Color32 {
    const PALETTE: [Color32; 6] = [
        Color32::from_rgb(185, 28, 28),
        Color32::from_rgb(194, 65, 12),
        Color32::from_rgb(126, 34, 206),
        Color32::from_rgb(29, 78, 216),
        Color32::from_rgb(21, 128, 61),
        Color32::from_rgb(190, 24, 93),
    ];
    let hash = category
        .to_lowercase()
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    PALETTE[hash % PALETTE.len()]
}

/// Paint one event card into `rect`. Inactive cards are dimmed.
pub fn paint_event_card(
    painter: &Painter,
    rect: Rect,
    event: &FlagshipEvent,
    image: CardImage<'_>,
    style: &CardStyle,
    is_active: bool,
) {
    let painter = painter.with_clip_rect(rect);
    let opacity = if is_active { 1.0 } else { INACTIVE_OPACITY };
    let dim = |c: Color32| c.gamma_multiply(opacity);

    painter.rect_filled(rect, CornerRadius::same(CARD_RADIUS), dim(style.fill));
    if is_active {
        painter.rect_stroke(
            rect,
            CornerRadius::same(CARD_RADIUS),
            Stroke::new(1.5, style.accent.gamma_multiply(0.6)),
            StrokeKind::Inside,
        );
    }

    let inner = rect.shrink(20.0);
    let (image_rect, text_rect) = if inner.width() > 640.0 {
        let split = inner.left() + inner.width() * 0.45;
        (
            Rect::from_min_max(inner.min, Pos2::new(split - 12.0, inner.bottom())),
            Rect::from_min_max(Pos2::new(split + 12.0, inner.top()), inner.max),
        )
    } else {
        let split = inner.top() + inner.height() * 0.4;
        (
            Rect::from_min_max(inner.min, Pos2::new(inner.right(), split - 8.0)),
            Rect::from_min_max(Pos2::new(inner.left(), split + 8.0), inner.max),
        )
    };

    paint_artwork(&painter, image_rect, event, image, opacity);
    paint_text(&painter, text_rect, event, style, &dim);
}

fn paint_artwork(
    painter: &Painter,
    rect: Rect,
    event: &FlagshipEvent,
    image: CardImage<'_>,
    opacity: f32,
) {
    let radius = CornerRadius::same(CARD_RADIUS / 2);

    match image {
        CardImage::Loaded(texture) => {
            let tex_size = texture.size_vec2();
            let scale = (rect.width() / tex_size.x).min(rect.height() / tex_size.y);
            let image_rect = Rect::from_center_size(rect.center(), tex_size * scale);
            painter.image(
                texture.id(),
                image_rect,
                Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
                Color32::WHITE.gamma_multiply(opacity),
            );
        }
        CardImage::Loading | CardImage::Missing => {
            let tint = category_color(&event.category);
            painter.rect_filled(rect, radius, tint.gamma_multiply(0.35 * opacity));

            let initial: String = event.name.chars().take(1).collect();
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                initial,
                FontId::proportional(rect.height().min(rect.width()) * 0.4),
                tint.gamma_multiply(opacity),
            );

            if matches!(image, CardImage::Loading) {
                painter.text(
                    rect.center_bottom() - Vec2::new(0.0, 12.0),
                    Align2::CENTER_BOTTOM,
                    "Loading artwork…",
                    FontId::proportional(12.0),
                    Color32::GRAY.gamma_multiply(opacity),
                );
            }
        }
    }
}

fn paint_text(
    painter: &Painter,
    rect: Rect,
    event: &FlagshipEvent,
    style: &CardStyle,
    dim: &dyn Fn(Color32) -> Color32,
) {
    let width = rect.width();
    let mut cursor = rect.min;

    // Category chip
    let chip = painter.layout_no_wrap(
        event.category.to_uppercase(),
        FontId::proportional(11.0),
        dim(style.accent),
    );
    let chip_rect = Rect::from_min_size(cursor, chip.size() + Vec2::new(16.0, 8.0));
    painter.rect_filled(chip_rect, CornerRadius::same(10), dim(style.accent.gamma_multiply(0.15)));
    painter.galley(cursor + Vec2::new(8.0, 4.0), chip, style.accent);
    cursor.y += chip_rect.height() + 12.0;

    let mut block = |text: String, font: FontId, color: Color32, gap: f32| {
        if cursor.y >= rect.bottom() {
            return;
        }
        let galley = painter.layout(text, font, color, width);
        let height = galley.size().y;
        painter.galley(cursor, galley, color);
        cursor.y += height + gap;
    };

    block(event.name.clone(), FontId::proportional(30.0), dim(style.text), 10.0);
    block(event.about.clone(), FontId::proportional(15.0), dim(style.text), 12.0);

    let highlights = event.highlights();
    if !highlights.is_empty() {
        block(highlights.join("   ·   "), FontId::proportional(13.0), dim(style.accent), 12.0);
    }

    if let Some(description) = &event.description {
        block(
            description.overview.clone(),
            FontId::proportional(13.0),
            dim(style.weak_text),
            0.0,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_colors_are_stable_and_case_insensitive() {
        assert_eq!(category_color("Technical"), category_color("technical"));
        assert_eq!(category_color("Cultural"), category_color("Cultural"));
    }
}
