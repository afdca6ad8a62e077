use eframe::egui::{self, FontId, Pos2};

use crate::content::Portfolio;
use crate::render::sections::{ButtonFace, draw_button};
use crate::render::text;
use crate::theme::Theme;

pub fn render(
    ui: &egui::Ui,
    portfolio: &Portfolio,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    hover_button: bool,
    scale: f32,
) {
    let center_x = rect.center().x;
    let mut y = rect.top() + rect.height() * 0.28;

    y += text::draw_line_centered(
        ui,
        "About Me",
        center_x,
        y,
        FontId::proportional(theme.h2_size * scale),
        Theme::with_opacity(theme.heading_color, opacity),
    );
    y += 28.0 * scale;

    let max_width = (rect.width() - 160.0 * scale).min(640.0 * scale);
    text::draw_wrapped_centered(
        ui,
        &portfolio.about,
        center_x,
        y,
        FontId::proportional(theme.body_size * scale),
        Theme::with_opacity(theme.foreground, opacity),
        max_width,
    );

    draw_button(
        ui,
        view_work_rect(rect, scale),
        "View My Work",
        theme,
        ButtonFace::Filled,
        hover_button,
        opacity,
        scale,
    );
}

pub fn view_work_rect(rect: egui::Rect, scale: f32) -> egui::Rect {
    egui::Rect::from_center_size(
        Pos2::new(rect.center().x, rect.bottom() - rect.height() * 0.24),
        egui::vec2(200.0 * scale, 52.0 * scale),
    )
}
