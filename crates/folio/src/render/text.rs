use eframe::egui::{self, Color32, FontId, Pos2};

/// Paint a single line, returning its size.
pub fn draw_line(ui: &egui::Ui, text: &str, pos: Pos2, font: FontId, color: Color32) -> egui::Vec2 {
    let galley = ui.painter().layout_no_wrap(text.to_string(), font, color);
    let size = galley.rect.size();
    ui.painter().galley(pos, galley, color);
    size
}

/// Paint a single line centered on `center_x`, returning its height.
pub fn draw_line_centered(
    ui: &egui::Ui,
    text: &str,
    center_x: f32,
    top: f32,
    font: FontId,
    color: Color32,
) -> f32 {
    let galley = ui.painter().layout_no_wrap(text.to_string(), font, color);
    let pos = Pos2::new(center_x - galley.rect.width() / 2.0, top);
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Paint wrapped text, returning its height.
pub fn draw_wrapped(
    ui: &egui::Ui,
    text: &str,
    pos: Pos2,
    font: FontId,
    color: Color32,
    max_width: f32,
) -> f32 {
    let galley = ui
        .painter()
        .layout(text.to_string(), font, color, max_width);
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Paint wrapped text with each line centered on `center_x`, returning its height.
pub fn draw_wrapped_centered(
    ui: &egui::Ui,
    text: &str,
    center_x: f32,
    top: f32,
    font: FontId,
    color: Color32,
    max_width: f32,
) -> f32 {
    let galley = ui
        .painter()
        .layout(text.to_string(), font, color, max_width);
    // Galley rows are left-aligned; centering the whole block is close enough
    // for the short copy this page carries.
    let pos = Pos2::new(center_x - galley.rect.width() / 2.0, top);
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Width and height of `text` at `font` without painting it.
pub fn measure(ui: &egui::Ui, text: &str, font: FontId) -> egui::Vec2 {
    ui.painter()
        .layout_no_wrap(text.to_string(), font, Color32::WHITE)
        .rect
        .size()
}
