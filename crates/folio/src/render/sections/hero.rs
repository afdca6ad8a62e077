use eframe::egui::{self, FontId, Pos2};

use crate::content::Portfolio;
use crate::render::image_cache::{self, ImageCache};
use crate::render::sections::{ButtonFace, draw_button};
use crate::render::text;
use crate::theme::Theme;

/// Landing section: avatar, name, tagline, "Learn More" button. The animated
/// name lives in the navigation header; here it is set in full.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    portfolio: &Portfolio,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    hover_button: bool,
    image_cache: &ImageCache,
    scale: f32,
) {
    let center_x = rect.center().x;

    if let Some(avatar) = &portfolio.avatar {
        if let Some(texture) = image_cache.get(ui.ctx(), avatar) {
            let side = 120.0 * scale;
            let area = egui::Rect::from_center_size(
                Pos2::new(center_x, rect.top() + rect.height() * 0.24),
                egui::vec2(side, side),
            );
            let size = texture.size_vec2();
            let image_rect = image_cache::fit_rect(area, size.x / size.y);
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            let tint = Theme::with_opacity(egui::Color32::WHITE, opacity);
            ui.painter().image(texture.id(), image_rect, uv, tint);
        }
    }

    let name_top = rect.center().y - 90.0 * scale;
    text::draw_line_centered(
        ui,
        &portfolio.name,
        center_x,
        name_top,
        FontId::proportional(theme.display_size * scale),
        Theme::with_opacity(theme.heading_color, opacity),
    );

    let tagline_top = name_top + theme.display_size * scale + 24.0 * scale;
    text::draw_line_centered(
        ui,
        &portfolio.tagline,
        center_x,
        tagline_top,
        FontId::proportional(theme.h3_size * 0.9 * scale),
        Theme::with_opacity(theme.muted, opacity),
    );

    draw_button(
        ui,
        learn_more_rect(rect, scale),
        "Learn More \u{2193}",
        theme,
        ButtonFace::Filled,
        hover_button,
        opacity,
        scale,
    );

    // Scroll hint at the very bottom edge.
    text::draw_line_centered(
        ui,
        "\u{25BC}",
        center_x,
        rect.bottom() - 48.0 * scale,
        FontId::proportional(theme.small_size * scale),
        Theme::with_opacity(theme.muted, opacity * 0.6),
    );
}

pub fn learn_more_rect(rect: egui::Rect, scale: f32) -> egui::Rect {
    egui::Rect::from_center_size(
        Pos2::new(rect.center().x, rect.center().y + 90.0 * scale),
        egui::vec2(200.0 * scale, 52.0 * scale),
    )
}
