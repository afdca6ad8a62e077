use eframe::egui::{self, FontId, Pos2};

use crate::content::Portfolio;
use crate::render::sections::{ButtonFace, draw_button};
use crate::render::text;
use crate::theme::Theme;

#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    portfolio: &Portfolio,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    hover_link: Option<usize>,
    scale: f32,
) {
    let center_x = rect.center().x;
    text::draw_line_centered(
        ui,
        "Get in Touch",
        center_x,
        rect.top() + rect.height() * 0.24,
        FontId::proportional(theme.h2_size * scale),
        Theme::with_opacity(theme.heading_color, opacity),
    );

    for (i, (link, button)) in portfolio
        .contact
        .iter()
        .zip(link_rects(rect, portfolio.contact.len(), scale))
        .enumerate()
    {
        draw_button(
            ui,
            button,
            &link.label,
            theme,
            ButtonFace::Outline,
            hover_link == Some(i),
            opacity,
            scale,
        );
    }

    if let Some(footer) = &portfolio.footer {
        text::draw_line_centered(
            ui,
            footer,
            center_x,
            rect.bottom() - 48.0 * scale,
            FontId::proportional(theme.small_size * scale),
            Theme::with_opacity(theme.muted, opacity),
        );
    }
}

pub fn link_rects(rect: egui::Rect, count: usize, scale: f32) -> Vec<egui::Rect> {
    let size = egui::vec2(220.0 * scale, 48.0 * scale);
    let gap = 16.0 * scale;
    let top = rect.top() + rect.height() * 0.24 + 90.0 * scale;
    (0..count)
        .map(|i| {
            egui::Rect::from_min_size(
                Pos2::new(
                    rect.center().x - size.x / 2.0,
                    top + i as f32 * (size.y + gap),
                ),
                size,
            )
        })
        .collect()
}
