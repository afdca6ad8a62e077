use eframe::egui::{self, FontId, Pos2, StrokeKind};

use crate::content::Portfolio;
use crate::render::text;
use crate::theme::Theme;

const COLS: usize = 2;

/// Project showcase: a centered two-column grid of cards. Clicking a card
/// opens the preview; hit-testing happens in the app against `card_rects`.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    portfolio: &Portfolio,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    hover_card: Option<usize>,
    scale: f32,
) {
    let center_x = rect.center().x;
    text::draw_line_centered(
        ui,
        "Projects",
        center_x,
        rect.top() + 96.0 * scale,
        FontId::proportional(theme.h2_size * scale),
        Theme::with_opacity(theme.heading_color, opacity),
    );

    let cards = card_rects(rect, portfolio.projects.len(), scale);
    for (i, (project, card)) in portfolio.projects.iter().zip(&cards).enumerate() {
        let hovered = hover_card == Some(i);
        // Hovered cards grow slightly, like the page they came from.
        let card = if hovered { card.expand(4.0 * scale) } else { *card };
        let rounding = 10.0 * scale;

        ui.painter().rect_filled(
            card,
            rounding,
            Theme::with_opacity(theme.card_background, opacity),
        );
        let border = if hovered {
            theme.accent
        } else {
            theme.card_border
        };
        ui.painter().rect_stroke(
            card,
            rounding,
            egui::Stroke::new(1.5 * scale, Theme::with_opacity(border, opacity)),
            StrokeKind::Inside,
        );

        let padding = 20.0 * scale;
        let inner_width = card.width() - padding * 2.0;
        let mut y = card.top() + padding;
        y += text::draw_wrapped(
            ui,
            &project.title,
            Pos2::new(card.left() + padding, y),
            FontId::proportional(theme.h3_size * scale),
            Theme::with_opacity(theme.heading_color, opacity),
            inner_width,
        );
        y += 8.0 * scale;
        text::draw_wrapped(
            ui,
            &project.description,
            Pos2::new(card.left() + padding, y),
            FontId::proportional(theme.body_size * 0.85 * scale),
            Theme::with_opacity(theme.muted, opacity),
            inner_width,
        );

        text::draw_line(
            ui,
            "Live demo \u{2197}",
            Pos2::new(
                card.left() + padding,
                card.bottom() - padding - theme.small_size * scale,
            ),
            FontId::proportional(theme.small_size * scale),
            Theme::with_opacity(theme.accent, opacity),
        );
    }
}

/// Grid geometry for `count` cards inside a section rect. The last row is
/// centered when it has fewer cards than columns.
pub fn card_rects(rect: egui::Rect, count: usize, scale: f32) -> Vec<egui::Rect> {
    if count == 0 {
        return Vec::new();
    }

    let gap = 24.0 * scale;
    let block_width = (rect.width() - 160.0 * scale).min(900.0 * scale);
    let card_width = (block_width - gap * (COLS as f32 - 1.0)) / COLS as f32;
    let card_height = 170.0 * scale;
    let rows = count.div_ceil(COLS);

    let grid_top = rect.top() + 170.0 * scale;

    (0..count)
        .map(|i| {
            let col = i % COLS;
            let row = i / COLS;
            let cards_in_row = if row == rows - 1 {
                count - row * COLS
            } else {
                COLS
            };
            let row_width =
                cards_in_row as f32 * card_width + (cards_in_row as f32 - 1.0) * gap;
            let row_left = rect.center().x - row_width / 2.0;

            egui::Rect::from_min_size(
                Pos2::new(
                    row_left + col as f32 * (card_width + gap),
                    grid_top + row as f32 * (card_height + gap),
                ),
                egui::vec2(card_width, card_height),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1280.0, 720.0))
    }

    #[test]
    fn cards_do_not_overlap() {
        let rects = card_rects(section(), 5, 1.0);
        assert_eq!(rects.len(), 5);
        for (i, a) in rects.iter().enumerate() {
            for b in rects.iter().skip(i + 1) {
                assert!(!a.intersects(*b), "cards {a:?} and {b:?} overlap");
            }
        }
    }

    #[test]
    fn odd_last_row_is_centered() {
        let rects = card_rects(section(), 5, 1.0);
        let last = rects[4];
        assert!((last.center().x - 640.0).abs() < 0.5);
    }

    #[test]
    fn empty_catalog_renders_no_cards() {
        assert!(card_rects(section(), 0, 1.0).is_empty());
    }
}
