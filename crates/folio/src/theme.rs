use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub surface: Color32,
    pub foreground: Color32,
    pub muted: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
    pub chip_background: Color32,
    pub display_size: f32,
    pub h2_size: f32,
    pub h3_size: f32,
    pub body_size: f32,
    pub small_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x11, 0x18, 0x27),
            surface: Color32::from_rgb(0x1F, 0x29, 0x37),
            foreground: Color32::from_rgb(0xF3, 0xF4, 0xF6),
            muted: Color32::from_rgb(0x9C, 0xA3, 0xAF),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0x60, 0xA5, 0xFA),
            card_background: Color32::from_rgb(0x1F, 0x29, 0x37),
            card_border: Color32::from_rgb(0x37, 0x41, 0x51),
            chip_background: Color32::from_rgb(0x1E, 0x3A, 0x5F),
            display_size: 72.0,
            h2_size: 36.0,
            h3_size: 24.0,
            body_size: 18.0,
            small_size: 14.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::WHITE,
            surface: Color32::from_rgb(0xF9, 0xFA, 0xFB),
            foreground: Color32::from_rgb(0x11, 0x18, 0x27),
            muted: Color32::from_rgb(0x6B, 0x72, 0x80),
            heading_color: Color32::from_rgb(0x03, 0x07, 0x12),
            accent: Color32::from_rgb(0x25, 0x63, 0xEB),
            card_background: Color32::WHITE,
            card_border: Color32::from_rgb(0xE5, 0xE7, 0xEB),
            chip_background: Color32::from_rgb(0xDB, 0xEA, 0xFE),
            display_size: 72.0,
            h2_size: 36.0,
            h3_size: 24.0,
            body_size: 18.0,
            small_size: 14.0,
        }
    }

    pub fn for_dark(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_dark_matches_names() {
        assert_eq!(Theme::for_dark(true).name, "dark");
        assert_eq!(Theme::for_dark(false).name, "light");
    }

    #[test]
    fn from_name_defaults_to_light() {
        assert_eq!(Theme::from_name("dark").name, "dark");
        assert_eq!(Theme::from_name("anything-else").name, "light");
    }
}
