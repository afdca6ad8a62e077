pub mod about;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod skills;

use eframe::egui::{self, FontId, StrokeKind};

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonFace {
    Filled,
    Outline,
}

/// Draw a rounded button and its centered label.
pub fn draw_button(
    ui: &egui::Ui,
    rect: egui::Rect,
    label: &str,
    theme: &Theme,
    face: ButtonFace,
    hovered: bool,
    opacity: f32,
    scale: f32,
) {
    let rounding = 8.0 * scale;
    match face {
        ButtonFace::Filled => {
            let fill_opacity = if hovered { 0.85 } else { 1.0 };
            let fill = Theme::with_opacity(theme.accent, opacity * fill_opacity);
            ui.painter().rect_filled(rect, rounding, fill);
        }
        ButtonFace::Outline => {
            if hovered {
                let fill = Theme::with_opacity(theme.accent, opacity * 0.12);
                ui.painter().rect_filled(rect, rounding, fill);
            }
            ui.painter().rect_stroke(
                rect,
                rounding,
                egui::Stroke::new(
                    1.5 * scale,
                    Theme::with_opacity(theme.card_border, opacity),
                ),
                StrokeKind::Inside,
            );
        }
    }

    let text_color = match face {
        ButtonFace::Filled => Theme::with_opacity(egui::Color32::WHITE, opacity),
        ButtonFace::Outline => Theme::with_opacity(theme.foreground, opacity),
    };
    let galley = ui.painter().layout_no_wrap(
        label.to_string(),
        FontId::proportional(theme.body_size * 0.9 * scale),
        text_color,
    );
    let pos = rect.center() - galley.rect.size() / 2.0;
    ui.painter().galley(pos, galley, text_color);
}
