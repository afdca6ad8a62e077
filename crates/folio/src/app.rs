use std::path::PathBuf;
use std::time::Instant;

use eframe::egui;

use crate::config::Config;
use crate::content::Portfolio;
use crate::embed::{DemoFrame, FrameStatus};
use crate::render::image_cache::ImageCache;
use crate::render::sections::{about, contact, hero, projects, skills};
use crate::render::{SECTION_COUNT, Section, ease_in_out, preview, section_rect, text};
use crate::state::PreviewController;
use crate::storage::{FileStore, ThemePreference};
use crate::theme::Theme;
use crate::watcher::ManifestWatcher;

const HEADER_HEIGHT: f32 = 64.0;
const PROGRESS_BAR_HEIGHT: f32 = 4.0;
const SCROLL_STEP: f32 = 160.0;
const REVEAL_DELAY: f32 = 0.2;
const REVEAL_DURATION: f32 = 0.5;
const REVEAL_RISE: f32 = 50.0;
const TYPE_CHARS_PER_SEC: f32 = 12.0;

/// Sections reachable from the navigation header (Home is the brand).
const NAV_SECTIONS: [Section; 4] = [
    Section::About,
    Section::Projects,
    Section::Skills,
    Section::Contact,
];

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        let duration = 1.5;
        let fade_start = 1.0;
        if elapsed < fade_start {
            1.0
        } else if elapsed < duration {
            1.0 - (elapsed - fade_start) / (duration - fade_start)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= 1.5
    }
}

/// What the pointer is currently over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hover {
    None,
    NavTheme,
    NavSection(usize),
    HeroButton,
    AboutButton,
    Card(usize),
    ContactLink(usize),
    PreviewFullscreen,
    PreviewClose,
    PreviewBackdrop,
}

struct PortfolioApp {
    portfolio: Portfolio,
    manifest_path: Option<PathBuf>,
    watcher: Option<ManifestWatcher>,
    store: FileStore,
    theme_pref: ThemePreference,
    theme: Theme,
    preview: PreviewController,
    demo_frame: DemoFrame,
    image_cache: ImageCache,
    scroll_offset: f32,
    scroll_target: f32,
    /// When each section first scrolled into view (drives the entrance fade).
    reveal: [Option<Instant>; SECTION_COUNT],
    launched: Instant,
    start_section: Option<Section>,
    hover: Hover,
    toast: Option<Toast>,
    last_esc: Option<Instant>,
    show_hud: bool,
    page_height: f32,
}

impl PortfolioApp {
    fn new(
        portfolio: Portfolio,
        manifest_path: Option<PathBuf>,
        store: FileStore,
        theme_pref: ThemePreference,
        start_section: Option<Section>,
    ) -> Self {
        let watcher = manifest_path.as_deref().and_then(|path| {
            ManifestWatcher::watch(path)
                .map_err(|e| eprintln!("folio: {e}"))
                .ok()
        });
        let base_path = manifest_path
            .as_deref()
            .and_then(|p| p.parent())
            .unwrap_or(std::path::Path::new("."))
            .to_path_buf();
        let theme = Theme::for_dark(theme_pref.is_dark());

        Self {
            portfolio,
            manifest_path,
            watcher,
            store,
            theme_pref,
            theme,
            preview: PreviewController::new(),
            demo_frame: DemoFrame::new(),
            image_cache: ImageCache::new(base_path),
            scroll_offset: 0.0,
            scroll_target: 0.0,
            reveal: [None; SECTION_COUNT],
            launched: Instant::now(),
            start_section,
            hover: Hover::None,
            toast: None,
            last_esc: None,
            show_hud: false,
            page_height: 720.0,
        }
    }

    fn max_scroll(&self) -> f32 {
        (Section::ALL.len() as f32 - 1.0) * self.page_height
    }

    fn compute_scale(rect: egui::Rect) -> f32 {
        let ref_w = 1280.0;
        let ref_h = 720.0;
        (rect.width() / ref_w).min(rect.height() / ref_h).max(0.5)
    }

    fn toggle_theme(&mut self) {
        let dark = self.theme_pref.toggle(&mut self.store);
        self.theme = Theme::for_dark(dark);
        self.toast = Some(Toast::new(format!("Theme: {}", self.theme.name)));
    }

    fn scroll_to(&mut self, section: Section) {
        self.scroll_target = section.index() as f32 * self.page_height;
    }

    fn reload_manifest(&mut self) {
        let Some(path) = self.manifest_path.clone() else {
            return;
        };
        match Portfolio::load(&path) {
            Ok(portfolio) => {
                // Catalog indices may have shifted; an open preview would
                // point at the wrong entry.
                self.preview.close(&mut self.demo_frame);
                self.portfolio = portfolio;
                self.toast = Some(Toast::new("Manifest reloaded".to_string()));
            }
            Err(e) => {
                self.toast = Some(Toast::new(format!("Reload failed: {e:#}")));
            }
        }
    }

    /// How far along a section's entrance animation is, 0 to 1.
    fn reveal_progress(&self, index: usize) -> f32 {
        match self.reveal[index] {
            None => 0.0,
            Some(since) => {
                let t = (since.elapsed().as_secs_f32() - REVEAL_DELAY) / REVEAL_DURATION;
                ease_in_out(t.clamp(0.0, 1.0))
            }
        }
    }

    fn brand_text(&self) -> String {
        let brand = self.portfolio.name.to_uppercase();
        let total = brand.chars().count();
        let typed = (self.launched.elapsed().as_secs_f32() * TYPE_CHARS_PER_SEC) as usize;
        if typed >= total {
            brand
        } else {
            let mut text: String = brand.chars().take(typed).collect();
            text.push('\u{258F}');
            text
        }
    }

    fn brand_is_typing(&self) -> bool {
        let total = self.portfolio.name.chars().count();
        ((self.launched.elapsed().as_secs_f32() * TYPE_CHARS_PER_SEC) as usize) < total
    }

    fn header_rect(&self, screen: egui::Rect, scale: f32) -> egui::Rect {
        egui::Rect::from_min_size(
            screen.min,
            egui::vec2(screen.width(), HEADER_HEIGHT * scale),
        )
    }

    fn nav_theme_rect(&self, screen: egui::Rect, scale: f32) -> egui::Rect {
        let item_width = 84.0 * scale;
        let height = 36.0 * scale;
        let side = 36.0 * scale;
        let right = screen.right() - 24.0 * scale - NAV_SECTIONS.len() as f32 * item_width;
        egui::Rect::from_min_size(
            egui::pos2(
                right - side,
                screen.top() + (HEADER_HEIGHT * scale - height) / 2.0,
            ),
            egui::vec2(side, height),
        )
    }

    fn nav_item_rect(&self, index: usize, screen: egui::Rect, scale: f32) -> egui::Rect {
        let item_width = 84.0 * scale;
        let height = 36.0 * scale;
        let left = screen.right() - 24.0 * scale
            - (NAV_SECTIONS.len() - index) as f32 * item_width;
        egui::Rect::from_min_size(
            egui::pos2(
                left,
                screen.top() + (HEADER_HEIGHT * scale - height) / 2.0,
            ),
            egui::vec2(item_width, height),
        )
    }

    fn pointer_hover(&self, screen: egui::Rect, pos: egui::Pos2, scale: f32) -> Hover {
        // An open preview swallows all pointer input.
        if self.preview.is_open() {
            let fullscreen = self.preview.state().is_fullscreen();
            let panel = preview::panel_rect(screen, fullscreen, scale);
            if preview::fullscreen_button_rect(panel, scale).contains(pos) {
                return Hover::PreviewFullscreen;
            }
            if preview::close_button_rect(panel, scale).contains(pos) {
                return Hover::PreviewClose;
            }
            if !panel.contains(pos) {
                return Hover::PreviewBackdrop;
            }
            return Hover::None;
        }

        if self.header_rect(screen, scale).contains(pos) {
            if self.nav_theme_rect(screen, scale).contains(pos) {
                return Hover::NavTheme;
            }
            for i in 0..NAV_SECTIONS.len() {
                if self.nav_item_rect(i, screen, scale).contains(pos) {
                    return Hover::NavSection(i);
                }
            }
            return Hover::None;
        }

        let home = section_rect(Section::Home.index(), screen, self.scroll_offset);
        if hero::learn_more_rect(home, scale).contains(pos) {
            return Hover::HeroButton;
        }

        let about_rect = section_rect(Section::About.index(), screen, self.scroll_offset);
        if about::view_work_rect(about_rect, scale).contains(pos) {
            return Hover::AboutButton;
        }

        let projects_rect = section_rect(Section::Projects.index(), screen, self.scroll_offset);
        for (i, card) in projects::card_rects(projects_rect, self.portfolio.projects.len(), scale)
            .iter()
            .enumerate()
        {
            if card.contains(pos) {
                return Hover::Card(i);
            }
        }

        let contact_rect = section_rect(Section::Contact.index(), screen, self.scroll_offset);
        for (i, link) in contact::link_rects(contact_rect, self.portfolio.contact.len(), scale)
            .iter()
            .enumerate()
        {
            if link.contains(pos) {
                return Hover::ContactLink(i);
            }
        }

        Hover::None
    }

    fn activate(&mut self, hover: Hover, ctx: &egui::Context) {
        match hover {
            Hover::None => {}
            Hover::NavTheme => self.toggle_theme(),
            Hover::NavSection(i) => self.scroll_to(NAV_SECTIONS[i]),
            Hover::HeroButton => self.scroll_to(Section::About),
            Hover::AboutButton => self.scroll_to(Section::Projects),
            Hover::Card(i) => {
                self.preview.open(i, &self.portfolio, &mut self.demo_frame);
            }
            Hover::ContactLink(i) => {
                let link = &self.portfolio.contact[i];
                ctx.copy_text(link.url.clone());
                self.toast = Some(Toast::new(format!("{} link copied", link.label)));
            }
            Hover::PreviewFullscreen => self.preview.toggle_fullscreen(),
            Hover::PreviewClose | Hover::PreviewBackdrop => {
                self.preview.close(&mut self.demo_frame);
            }
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.watcher.as_ref().is_some_and(|w| w.file_changed()) {
            self.reload_manifest();
        }

        self.demo_frame.poll();
        if *self.demo_frame.status() == FrameStatus::Loading {
            ctx.request_repaint_after(std::time::Duration::from_millis(120));
        }

        let screen = ctx.screen_rect();
        self.page_height = screen.height();
        let scale = Self::compute_scale(screen);

        if let Some(section) = self.start_section.take() {
            let offset = section.index() as f32 * self.page_height;
            self.scroll_offset = offset;
            self.scroll_target = offset;
        }

        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }

            // ESC: close the preview first, then double-tap to quit
            if i.key_pressed(egui::Key::Escape) {
                if self.preview.is_open() {
                    self.preview.close(&mut self.demo_frame);
                    self.last_esc = None;
                    return;
                }
                if let Some(last) = self.last_esc {
                    if last.elapsed().as_secs_f32() < 1.0 {
                        viewport_cmds.push(egui::ViewportCommand::Close);
                        return;
                    }
                }
                self.last_esc = Some(Instant::now());
                self.toast = Some(Toast::new("Press Esc again to exit".to_string()));
                return;
            }

            // Theme toggle: D
            if i.key_pressed(egui::Key::D) {
                self.toggle_theme();
                return;
            }

            // Fullscreen: F drives the preview when one is open, the window
            // otherwise
            if i.key_pressed(egui::Key::F) {
                if self.preview.is_open() {
                    self.preview.toggle_fullscreen();
                } else {
                    viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                        !i.viewport().fullscreen.unwrap_or(false),
                    ));
                }
                return;
            }

            // Toggle HUD: H
            if i.key_pressed(egui::Key::H) {
                self.show_hud = !self.show_hud;
            }

            // The page does not scroll behind an open preview.
            if !self.preview.is_open() {
                if i.key_pressed(egui::Key::Home) {
                    self.scroll_target = 0.0;
                }
                if i.key_pressed(egui::Key::End) {
                    self.scroll_target = f32::MAX;
                }
                if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::PageDown) {
                    self.scroll_target += SCROLL_STEP;
                }
                if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::PageUp) {
                    self.scroll_target -= SCROLL_STEP;
                }
                let wheel = i.smooth_scroll_delta;
                if wheel.y != 0.0 {
                    self.scroll_target -= wheel.y;
                }
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        // Pointer: hover feedback and click dispatch.
        let (hover_pos, clicked) = ctx.input(|i| {
            (
                i.pointer.hover_pos(),
                i.pointer.button_pressed(egui::PointerButton::Primary),
            )
        });
        self.hover = hover_pos
            .map(|pos| self.pointer_hover(screen, pos, scale))
            .unwrap_or(Hover::None);
        if !matches!(self.hover, Hover::None | Hover::PreviewBackdrop) {
            ctx.output_mut(|o| o.cursor_icon = egui::CursorIcon::PointingHand);
        }
        if clicked {
            self.activate(self.hover, ctx);
        }

        // Animate scroll toward the target.
        self.scroll_target = self.scroll_target.clamp(0.0, self.max_scroll());
        let diff = self.scroll_target - self.scroll_offset;
        if diff.abs() < 0.5 {
            self.scroll_offset = self.scroll_target;
        } else {
            // Smooth ease: move 15% of remaining distance each frame
            self.scroll_offset += diff * 0.15;
            ctx.request_repaint();
        }

        // Start the entrance animation for sections scrolled into view.
        let now = Instant::now();
        for i in 0..Section::ALL.len() {
            let rect = section_rect(i, screen, self.scroll_offset);
            if self.reveal[i].is_none() && rect.intersects(screen) {
                self.reveal[i] = Some(now);
            }
        }
        if (0..Section::ALL.len()).any(|i| {
            self.reveal[i].is_some() && self.reveal_progress(i) < 1.0
        }) || self.brand_is_typing()
        {
            ctx.request_repaint();
        }

        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let bg = self.theme.background;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                ui.painter().rect_filled(screen, 0.0, bg);

                self.draw_sections(ui, screen, scale);
                self.draw_header(ui, screen, scale);

                if let Some(index) = self.preview.selected() {
                    preview::render(
                        ui,
                        &self.portfolio.projects[index],
                        &self.demo_frame,
                        self.preview.state().is_fullscreen(),
                        &self.theme,
                        screen,
                        self.hover == Hover::PreviewFullscreen,
                        self.hover == Hover::PreviewClose,
                        scale,
                    );
                }

                if let Some(toast) = &self.toast {
                    let opacity = toast.opacity();
                    if opacity > 0.0 {
                        draw_toast(ui, &toast.message, &self.theme, screen, opacity, scale);
                        ctx.request_repaint();
                    }
                }

                if self.show_hud {
                    draw_hud(ui, &self.theme, screen, scale);
                }
            });
    }
}

impl PortfolioApp {
    fn draw_sections(&self, ui: &egui::Ui, screen: egui::Rect, scale: f32) {
        for (i, section) in Section::ALL.iter().enumerate() {
            let rect = section_rect(i, screen, self.scroll_offset);
            if !rect.intersects(screen) {
                continue;
            }
            let progress = self.reveal_progress(i);
            if progress <= 0.0 {
                continue;
            }
            // Sections rise into place as they fade in.
            let rect = rect.translate(egui::vec2(0.0, (1.0 - progress) * REVEAL_RISE * scale));
            let opacity = progress;

            match section {
                Section::Home => hero::render(
                    ui,
                    &self.portfolio,
                    &self.theme,
                    rect,
                    opacity,
                    self.hover == Hover::HeroButton,
                    &self.image_cache,
                    scale,
                ),
                Section::About => about::render(
                    ui,
                    &self.portfolio,
                    &self.theme,
                    rect,
                    opacity,
                    self.hover == Hover::AboutButton,
                    scale,
                ),
                Section::Projects => {
                    let hover_card = match self.hover {
                        Hover::Card(card) => Some(card),
                        _ => None,
                    };
                    projects::render(
                        ui,
                        &self.portfolio,
                        &self.theme,
                        rect,
                        opacity,
                        hover_card,
                        scale,
                    );
                }
                Section::Skills => {
                    skills::render(ui, &self.portfolio, &self.theme, rect, opacity, scale);
                }
                Section::Contact => {
                    let hover_link = match self.hover {
                        Hover::ContactLink(link) => Some(link),
                        _ => None,
                    };
                    contact::render(
                        ui,
                        &self.portfolio,
                        &self.theme,
                        rect,
                        opacity,
                        hover_link,
                        scale,
                    );
                }
            }
        }
    }

    fn draw_header(&self, ui: &egui::Ui, screen: egui::Rect, scale: f32) {
        let header = self.header_rect(screen, scale);
        ui.painter().rect_filled(
            header,
            0.0,
            Theme::with_opacity(self.theme.surface, 0.92),
        );

        // Brand, typing itself out on launch.
        text::draw_line(
            ui,
            &self.brand_text(),
            egui::pos2(header.left() + 24.0 * scale, header.center().y - 10.0 * scale),
            egui::FontId::proportional(self.theme.body_size * scale),
            self.theme.accent,
        );

        // Theme toggle.
        let theme_rect = self.nav_theme_rect(screen, scale);
        let icon = if self.theme.name == "dark" {
            "\u{2600}"
        } else {
            "\u{263D}"
        };
        let icon_color = if self.hover == Hover::NavTheme {
            self.theme.accent
        } else {
            self.theme.foreground
        };
        let galley = ui.painter().layout_no_wrap(
            icon.to_string(),
            egui::FontId::proportional(18.0 * scale),
            icon_color,
        );
        let pos = theme_rect.center() - galley.rect.size() / 2.0;
        ui.painter().galley(pos, galley, icon_color);

        // Section links.
        for (i, section) in NAV_SECTIONS.iter().enumerate() {
            let rect = self.nav_item_rect(i, screen, scale);
            let color = if self.hover == Hover::NavSection(i) {
                self.theme.accent
            } else {
                self.theme.foreground
            };
            let galley = ui.painter().layout_no_wrap(
                section.title().to_string(),
                egui::FontId::proportional(self.theme.small_size * scale),
                color,
            );
            let pos = rect.center() - galley.rect.size() / 2.0;
            ui.painter().galley(pos, galley, color);
        }

        // Scroll progress, pinned to the very top edge.
        let max_scroll = self.max_scroll();
        if max_scroll > 0.0 {
            let progress = self.scroll_offset / max_scroll;
            let bar = egui::Rect::from_min_size(
                screen.min,
                egui::vec2(screen.width() * progress, PROGRESS_BAR_HEIGHT * scale),
            );
            ui.painter().rect_filled(bar, 0.0, self.theme.accent);
        }
    }
}

fn draw_toast(
    ui: &egui::Ui,
    message: &str,
    theme: &Theme,
    screen: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let toast_color = Theme::with_opacity(theme.foreground, opacity * 0.9);
    let toast_bg = Theme::with_opacity(theme.surface, opacity * 0.9);
    let galley = ui.painter().layout_no_wrap(
        message.to_string(),
        egui::FontId::proportional(16.0 * scale),
        toast_color,
    );
    let padding = 14.0 * scale;
    let toast_rect = egui::Rect::from_min_size(
        egui::pos2(
            screen.center().x - galley.rect.width() / 2.0 - padding,
            screen.bottom() - 70.0 * scale,
        ),
        egui::vec2(
            galley.rect.width() + padding * 2.0,
            galley.rect.height() + padding * 2.0,
        ),
    );
    ui.painter().rect_filled(toast_rect, 8.0 * scale, toast_bg);
    let text_pos = egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding);
    ui.painter().galley(text_pos, galley, toast_color);
}

fn draw_hud(ui: &egui::Ui, theme: &Theme, screen: egui::Rect, scale: f32) {
    let shortcuts = [
        ("\u{2191} / \u{2193} / Wheel", "Scroll the page"),
        ("Home / End", "First / last section"),
        ("Click a card", "Open the live demo"),
        ("F", "Fullscreen preview / window"),
        ("Esc", "Close preview / \u{00d7}2 exit"),
        ("D", "Toggle theme"),
        ("H", "Toggle this HUD"),
        ("Q", "Quit"),
    ];

    let bg = Theme::with_opacity(theme.surface, 0.95);
    let text_color = Theme::with_opacity(theme.foreground, 0.9);
    let key_color = Theme::with_opacity(theme.accent, 0.9);

    let padding = 24.0 * scale;
    let line_height = 30.0 * scale;
    let hud_height = shortcuts.len() as f32 * line_height + padding * 2.0 + 40.0 * scale;
    let hud_width = 360.0 * scale;

    let hud_rect =
        egui::Rect::from_center_size(screen.center(), egui::vec2(hud_width, hud_height));
    ui.painter().rect_filled(hud_rect, 12.0 * scale, bg);

    let title_galley = ui.painter().layout_no_wrap(
        "Keyboard Shortcuts".to_string(),
        egui::FontId::proportional(20.0 * scale),
        Theme::with_opacity(theme.heading_color, 0.9),
    );
    let title_pos = egui::pos2(hud_rect.left() + padding, hud_rect.top() + padding);
    ui.painter().galley(title_pos, title_galley, text_color);

    let mut y = hud_rect.top() + padding + 40.0 * scale;
    for (key, desc) in &shortcuts {
        let key_galley = ui.painter().layout_no_wrap(
            key.to_string(),
            egui::FontId::monospace(14.0 * scale),
            key_color,
        );
        ui.painter().galley(
            egui::pos2(hud_rect.left() + padding, y),
            key_galley,
            key_color,
        );

        let desc_galley = ui.painter().layout_no_wrap(
            desc.to_string(),
            egui::FontId::proportional(14.0 * scale),
            text_color,
        );
        ui.painter().galley(
            egui::pos2(hud_rect.left() + padding + 160.0 * scale, y),
            desc_galley,
            text_color,
        );

        y += line_height;
    }
}

pub fn run(
    file: Option<PathBuf>,
    windowed: bool,
    section: Option<String>,
    theme_override: Option<String>,
) -> anyhow::Result<()> {
    let (portfolio, manifest_path) = match file {
        Some(path) => (Portfolio::load(&path)?, Some(path)),
        None => (Portfolio::builtin(), None),
    };

    let config = Config::load_or_default();
    let defaults = config.defaults.unwrap_or_default();

    let section_name = section.or(defaults.section);
    let start_section = match section_name.as_deref() {
        Some(name) => Some(
            Section::from_name(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown section: {name}"))?,
        ),
        None => None,
    };

    let windowed = windowed || defaults.windowed.unwrap_or(false);

    // The persisted preference is read before the window exists, so the very
    // first paint already carries the right palette.
    let store = FileStore::open_default();
    let theme_pref = match theme_override.as_deref() {
        Some(name) => ThemePreference::with_dark(name == "dark"),
        None => ThemePreference::load(&store),
    };

    let title = format!("{} \u{2014} folio", portfolio.name);
    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(PortfolioApp::new(
                portfolio,
                manifest_path,
                store,
                theme_pref,
                start_section,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
