pub mod image_cache;
pub mod preview;
pub mod sections;
pub mod text;

use eframe::egui;

/// The page's sections, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

pub const SECTION_COUNT: usize = 5;

impl Section {
    pub const ALL: [Section; SECTION_COUNT] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    pub fn from_name(name: &str) -> Option<Section> {
        Section::ALL.iter().copied().find(|s| s.name() == name)
    }

    pub fn index(self) -> usize {
        Section::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }
}

/// Rect of section `index` given the viewport and the current scroll offset.
/// Every section is exactly one viewport tall.
pub fn section_rect(index: usize, viewport: egui::Rect, scroll_offset: f32) -> egui::Rect {
    let h = viewport.height();
    egui::Rect::from_min_size(
        egui::pos2(viewport.left(), viewport.top() + index as f32 * h - scroll_offset),
        egui::vec2(viewport.width(), h),
    )
}

pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_lookup_by_name() {
        assert_eq!(Section::from_name("projects"), Some(Section::Projects));
        assert_eq!(Section::from_name("blog"), None);
        for section in Section::ALL {
            assert_eq!(Section::from_name(section.name()), Some(section));
        }
    }

    #[test]
    fn section_indices_match_scroll_order() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn ease_endpoints() {
        assert!(ease_in_out(0.0).abs() < f32::EPSILON);
        assert!((ease_in_out(1.0) - 1.0).abs() < f32::EPSILON);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn section_rects_tile_the_scroll_space() {
        let viewport = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1280.0, 720.0));
        let first = section_rect(0, viewport, 0.0);
        assert_eq!(first, viewport);
        let second = section_rect(1, viewport, 0.0);
        assert!((second.top() - first.bottom()).abs() < f32::EPSILON);
        // Scrolling one viewport brings the second section fully into view.
        let scrolled = section_rect(1, viewport, viewport.height());
        assert_eq!(scrolled, viewport);
    }
}
