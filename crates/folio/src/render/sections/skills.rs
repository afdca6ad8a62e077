use eframe::egui::{self, FontId, Pos2};

use crate::content::Portfolio;
use crate::render::text;
use crate::theme::Theme;

pub fn render(
    ui: &egui::Ui,
    portfolio: &Portfolio,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let center_x = rect.center().x;
    text::draw_line_centered(
        ui,
        "Skills",
        center_x,
        rect.top() + rect.height() * 0.26,
        FontId::proportional(theme.h2_size * scale),
        Theme::with_opacity(theme.heading_color, opacity),
    );

    let font = FontId::proportional(theme.body_size * 0.9 * scale);
    let chip_height = 38.0 * scale;
    let pad_x = 18.0 * scale;
    let gap = 14.0 * scale;
    let max_row_width = (rect.width() - 200.0 * scale).min(620.0 * scale);

    // Flow the chips into centered rows.
    let widths: Vec<f32> = portfolio
        .skills
        .iter()
        .map(|s| text::measure(ui, s, font.clone()).x + pad_x * 2.0)
        .collect();

    let mut rows: Vec<Vec<usize>> = vec![Vec::new()];
    let mut row_width = 0.0;
    for (i, w) in widths.iter().enumerate() {
        let needed = if rows.last().is_some_and(|r| r.is_empty()) {
            *w
        } else {
            row_width + gap + w
        };
        if needed > max_row_width && !rows.last().is_some_and(|r| r.is_empty()) {
            rows.push(vec![i]);
            row_width = *w;
        } else {
            rows.last_mut().expect("at least one row").push(i);
            row_width = needed;
        }
    }

    let mut y = rect.top() + rect.height() * 0.26 + theme.h2_size * scale + 40.0 * scale;
    for row in rows {
        if row.is_empty() {
            continue;
        }
        let total: f32 =
            row.iter().map(|&i| widths[i]).sum::<f32>() + gap * (row.len() as f32 - 1.0);
        let mut x = center_x - total / 2.0;
        for &i in &row {
            let chip = egui::Rect::from_min_size(
                Pos2::new(x, y),
                egui::vec2(widths[i], chip_height),
            );
            ui.painter().rect_filled(
                chip,
                chip_height / 2.0,
                Theme::with_opacity(theme.chip_background, opacity),
            );
            let label_color = Theme::with_opacity(theme.accent, opacity);
            let galley =
                ui.painter()
                    .layout_no_wrap(portfolio.skills[i].clone(), font.clone(), label_color);
            let pos = chip.center() - galley.rect.size() / 2.0;
            ui.painter().galley(pos, galley, label_color);
            x += widths[i] + gap;
        }
        y += chip_height + gap;
    }
}
