//! The preview overlay: a modal card (or the whole viewport, in fullscreen)
//! framing the embedded demo surface.

use eframe::egui::{self, Color32, FontId, Pos2, StrokeKind};

use crate::content::Project;
use crate::embed::{DemoFrame, FrameStatus};
use crate::render::text;
use crate::theme::Theme;

const TITLE_BAR_HEIGHT: f32 = 56.0;

#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    project: &Project,
    frame: &DemoFrame,
    fullscreen: bool,
    theme: &Theme,
    screen: egui::Rect,
    hover_fullscreen: bool,
    hover_close: bool,
    scale: f32,
) {
    if !fullscreen {
        ui.painter()
            .rect_filled(screen, 0.0, Color32::from_black_alpha(140));
    }

    let panel = panel_rect(screen, fullscreen, scale);
    let rounding = if fullscreen { 0.0 } else { 12.0 * scale };
    ui.painter().rect_filled(panel, rounding, theme.background);
    if !fullscreen {
        ui.painter().rect_stroke(
            panel,
            rounding,
            egui::Stroke::new(1.0 * scale, theme.card_border),
            StrokeKind::Inside,
        );
    }

    // Title bar.
    let bar_height = TITLE_BAR_HEIGHT * scale;
    let padding = 20.0 * scale;
    text::draw_line(
        ui,
        &project.title,
        Pos2::new(panel.left() + padding, panel.top() + 16.0 * scale),
        FontId::proportional(theme.h3_size * scale),
        theme.heading_color,
    );

    draw_icon_button(
        ui,
        fullscreen_button_rect(panel, scale),
        if fullscreen { "\u{2921}" } else { "\u{2922}" },
        theme,
        hover_fullscreen,
        scale,
    );
    draw_icon_button(
        ui,
        close_button_rect(panel, scale),
        "\u{2715}",
        theme,
        hover_close,
        scale,
    );

    // URL bar.
    let url_bar = egui::Rect::from_min_size(
        Pos2::new(panel.left() + padding, panel.top() + bar_height),
        egui::vec2(panel.width() - padding * 2.0, 36.0 * scale),
    );
    ui.painter()
        .rect_filled(url_bar, 6.0 * scale, theme.surface);
    if let Some(url) = frame.url() {
        text::draw_line(
            ui,
            url,
            Pos2::new(url_bar.left() + 12.0 * scale, url_bar.top() + 9.0 * scale),
            FontId::monospace(theme.small_size * scale),
            theme.muted,
        );
    }

    // Demo viewport.
    let viewport = egui::Rect::from_min_max(
        Pos2::new(panel.left() + padding, url_bar.bottom() + 12.0 * scale),
        Pos2::new(panel.right() - padding, panel.bottom() - padding),
    );
    ui.painter().rect_filled(viewport, 6.0 * scale, theme.surface);
    ui.painter().rect_stroke(
        viewport,
        6.0 * scale,
        egui::Stroke::new(1.0 * scale, theme.card_border),
        StrokeKind::Inside,
    );

    let center_x = viewport.center().x;
    match frame.status() {
        FrameStatus::Idle => {}
        FrameStatus::Loading => {
            text::draw_line_centered(
                ui,
                "Loading live demo\u{2026}",
                center_x,
                viewport.center().y - theme.body_size * scale / 2.0,
                FontId::proportional(theme.body_size * scale),
                theme.muted,
            );
        }
        FrameStatus::Ready {
            http_status,
            page_title,
        } => {
            let title = page_title.as_deref().unwrap_or(&project.title);
            let mut y = viewport.center().y - 30.0 * scale;
            y += text::draw_line_centered(
                ui,
                title,
                center_x,
                y,
                FontId::proportional(theme.h3_size * scale),
                theme.heading_color,
            );
            y += 12.0 * scale;
            text::draw_line_centered(
                ui,
                &format!("live \u{00B7} HTTP {http_status}"),
                center_x,
                y,
                FontId::monospace(theme.small_size * scale),
                theme.accent,
            );
        }
        FrameStatus::Unreachable { reason } => {
            let mut y = viewport.center().y - 30.0 * scale;
            y += text::draw_line_centered(
                ui,
                "Demo unreachable",
                center_x,
                y,
                FontId::proportional(theme.body_size * scale),
                theme.foreground,
            );
            y += 10.0 * scale;
            text::draw_wrapped_centered(
                ui,
                reason,
                center_x,
                y,
                FontId::proportional(theme.small_size * scale),
                theme.muted,
                viewport.width() - 80.0 * scale,
            );
        }
    }
}

fn draw_icon_button(
    ui: &egui::Ui,
    rect: egui::Rect,
    icon: &str,
    theme: &Theme,
    hovered: bool,
    scale: f32,
) {
    if hovered {
        ui.painter()
            .rect_filled(rect, 6.0 * scale, Theme::with_opacity(theme.accent, 0.15));
    }
    let color = if hovered { theme.accent } else { theme.muted };
    let galley = ui.painter().layout_no_wrap(
        icon.to_string(),
        FontId::proportional(20.0 * scale),
        color,
    );
    let pos = rect.center() - galley.rect.size() / 2.0;
    ui.painter().galley(pos, galley, color);
}

pub fn panel_rect(screen: egui::Rect, fullscreen: bool, scale: f32) -> egui::Rect {
    if fullscreen {
        screen
    } else {
        let size = egui::vec2(
            (screen.width() * 0.78).min(1000.0 * scale),
            screen.height() * 0.82,
        );
        egui::Rect::from_center_size(screen.center(), size)
    }
}

pub fn fullscreen_button_rect(panel: egui::Rect, scale: f32) -> egui::Rect {
    let side = 32.0 * scale;
    egui::Rect::from_min_size(
        Pos2::new(
            panel.right() - side * 2.0 - 28.0 * scale,
            panel.top() + 12.0 * scale,
        ),
        egui::vec2(side, side),
    )
}

pub fn close_button_rect(panel: egui::Rect, scale: f32) -> egui::Rect {
    let side = 32.0 * scale;
    egui::Rect::from_min_size(
        Pos2::new(panel.right() - side - 16.0 * scale, panel.top() + 12.0 * scale),
        egui::vec2(side, side),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1280.0, 720.0))
    }

    #[test]
    fn fullscreen_panel_covers_the_viewport() {
        assert_eq!(panel_rect(screen(), true, 1.0), screen());
    }

    #[test]
    fn windowed_panel_is_contained_and_centered() {
        let panel = panel_rect(screen(), false, 1.0);
        assert!(screen().contains_rect(panel));
        assert_eq!(panel.center(), screen().center());
    }

    #[test]
    fn title_bar_buttons_sit_inside_the_panel() {
        let panel = panel_rect(screen(), false, 1.0);
        assert!(panel.contains_rect(fullscreen_button_rect(panel, 1.0)));
        assert!(panel.contains_rect(close_button_rect(panel, 1.0)));
        assert!(!fullscreen_button_rect(panel, 1.0).intersects(close_button_rect(panel, 1.0)));
    }
}
