use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use eframe::egui;

/// Lazily loaded textures for manifest images (the avatar, mostly).
///
/// Failed loads are cached as `None` so a missing file is logged once and
/// never retried every frame.
pub struct ImageCache {
    base_path: PathBuf,
    cache: RefCell<HashMap<String, Option<egui::TextureHandle>>>,
}

impl ImageCache {
    pub fn new(base_path: PathBuf) -> Self {
        Self {
            base_path,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn get(&self, ctx: &egui::Context, path: &str) -> Option<egui::TextureHandle> {
        if let Some(entry) = self.cache.borrow().get(path) {
            return entry.clone();
        }
        let loaded = self.load(ctx, path);
        self.cache
            .borrow_mut()
            .insert(path.to_string(), loaded.clone());
        loaded
    }

    fn load(&self, ctx: &egui::Context, path: &str) -> Option<egui::TextureHandle> {
        let full_path = self.base_path.join(path);
        let image = match image::open(&full_path) {
            Ok(image) => image.into_rgba8(),
            Err(e) => {
                eprintln!("folio: could not load {}: {e}", full_path.display());
                return None;
            }
        };
        let size = [image.width() as usize, image.height() as usize];
        let pixels = image.into_raw();
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);
        Some(ctx.load_texture(path, color_image, egui::TextureOptions::LINEAR))
    }
}

/// Largest rect with `aspect` (w/h) that fits inside `area`, centered.
pub fn fit_rect(area: egui::Rect, aspect: f32) -> egui::Rect {
    let mut w = area.width();
    let mut h = w / aspect;
    if h > area.height() {
        h = area.height();
        w = h * aspect;
    }
    egui::Rect::from_center_size(area.center(), egui::vec2(w, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_rect_is_contained_and_keeps_aspect() {
        let area = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(200.0, 100.0));
        let fitted = fit_rect(area, 1.0);
        assert!(area.contains_rect(fitted));
        assert!((fitted.width() - fitted.height()).abs() < 0.01);
        assert!((fitted.height() - 100.0).abs() < 0.01);

        let wide = fit_rect(area, 4.0);
        assert!((wide.width() - 200.0).abs() < 0.01);
        assert!((wide.height() - 50.0).abs() < 0.01);
    }
}
