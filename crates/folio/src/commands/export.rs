use std::path::{Path, PathBuf};

use eframe::egui;

use crate::content::Portfolio;
use crate::render::Section;
use crate::render::image_cache::ImageCache;
use crate::render::sections::{about, contact, hero, projects, skills};
use crate::theme::Theme;

struct ExportApp {
    portfolio: Portfolio,
    theme: Theme,
    image_cache: ImageCache,
    output_dir: PathBuf,
    current_section: usize,
    screenshot_requested: bool,
    done: bool,
}

impl ExportApp {
    fn new(portfolio: Portfolio, base_path: &Path, output_dir: PathBuf, theme: Theme) -> Self {
        Self {
            portfolio,
            theme,
            image_cache: ImageCache::new(base_path.to_path_buf()),
            output_dir,
            current_section: 0,
            screenshot_requested: false,
            done: false,
        }
    }
}

impl eframe::App for ExportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.done {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Check for screenshot result from previous frame
        let mut got_screenshot = false;
        ctx.input(|i| {
            for event in &i.events {
                if let egui::Event::Screenshot { image, .. } = event {
                    let section = Section::ALL[self.current_section];
                    let filename =
                        format!("{:02}-{}.png", self.current_section + 1, section.name());
                    let path = self.output_dir.join(&filename);
                    save_color_image(image, &path);
                    eprintln!("  Saved {filename}");
                    got_screenshot = true;
                }
            }
        });

        if got_screenshot {
            self.screenshot_requested = false;
            self.current_section += 1;
            if self.current_section >= Section::ALL.len() {
                self.done = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
        }

        let bg = self.theme.background;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);

                let scale = {
                    let ref_w = 1280.0;
                    let ref_h = 720.0;
                    (rect.width() / ref_w).min(rect.height() / ref_h)
                };

                match Section::ALL[self.current_section] {
                    Section::Home => hero::render(
                        ui,
                        &self.portfolio,
                        &self.theme,
                        rect,
                        1.0,
                        false,
                        &self.image_cache,
                        scale,
                    ),
                    Section::About => {
                        about::render(ui, &self.portfolio, &self.theme, rect, 1.0, false, scale);
                    }
                    Section::Projects => {
                        projects::render(ui, &self.portfolio, &self.theme, rect, 1.0, None, scale);
                    }
                    Section::Skills => {
                        skills::render(ui, &self.portfolio, &self.theme, rect, 1.0, scale);
                    }
                    Section::Contact => {
                        contact::render(ui, &self.portfolio, &self.theme, rect, 1.0, None, scale);
                    }
                }
            });

        // Request screenshot after rendering (will arrive next frame)
        if !self.screenshot_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            self.screenshot_requested = true;
        }

        ctx.request_repaint();
    }
}

fn save_color_image(image: &egui::ColorImage, path: &Path) {
    let width = image.width() as u32;
    let height = image.height() as u32;
    let pixels: Vec<u8> = image
        .pixels
        .iter()
        .flat_map(|c| [c.r(), c.g(), c.b(), c.a()])
        .collect();

    image::save_buffer(path, &pixels, width, height, image::ColorType::Rgba8)
        .unwrap_or_else(|e| eprintln!("Failed to save {}: {e}", path.display()));
}

pub fn run(
    file: Option<PathBuf>,
    output_dir: PathBuf,
    width: u32,
    height: u32,
    theme_name: &str,
) -> anyhow::Result<()> {
    let (portfolio, base_path) = match &file {
        Some(path) => (
            Portfolio::load(path)?,
            path.parent().unwrap_or(Path::new(".")).to_path_buf(),
        ),
        None => (Portfolio::builtin(), PathBuf::from(".")),
    };

    std::fs::create_dir_all(&output_dir)?;

    eprintln!(
        "Exporting {} sections to {} ({}x{})",
        Section::ALL.len(),
        output_dir.display(),
        width,
        height,
    );

    let theme = Theme::from_name(theme_name);
    let title = format!("{} \u{2014} folio export", portfolio.name);

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([width as f32, height as f32])
        .with_title(&title)
        .with_decorations(false);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let output_dir_clone = output_dir.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ExportApp::new(
                portfolio,
                &base_path,
                output_dir_clone,
                theme,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    eprintln!("Export complete.");
    Ok(())
}
