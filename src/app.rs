use eframe::egui;
use tracing::{debug, info, warn};

use crate::catalog::{FontCatalog, FontList, PreviewFaces};
use crate::theme::Theme;
use crate::{fonts, ui};

pub const MIN_FONT_SIZE: u32 = 1;
pub const MAX_FONT_SIZE: u32 = 36;
pub const DEFAULT_FONT_SIZE: u32 = 12;
pub const DEFAULT_SAMPLE_TEXT: &str = "This is a sample text";

/// Application state. Widgets bind straight to the fields they edit; any
/// effect beyond the edited field itself goes through the named handler
/// methods below.
pub struct FontPreviewApp {
    catalog: FontCatalog,
    pub(crate) list: FontList,
    pub(crate) query: String,
    pub(crate) selected_font: Option<String>,
    pub(crate) sample_text: String,
    pub(crate) font_size: u32,
    pub(crate) theme: Theme,
    pub(crate) total_fonts: usize,
    theme_dirty: bool,
    pending_faces: Option<PreviewFaces>,
}

impl FontPreviewApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        fonts::register_preview_families(&cc.egui_ctx);
        Self::with_catalog(FontCatalog::load_system(), Theme::detect())
    }

    fn with_catalog(catalog: FontCatalog, theme: Theme) -> Self {
        let mut app = Self {
            catalog,
            list: FontList::new(Vec::new()),
            query: String::new(),
            selected_font: None,
            sample_text: DEFAULT_SAMPLE_TEXT.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            theme,
            total_fonts: 0,
            theme_dirty: true,
            pending_faces: None,
        };
        app.populate_font_list();
        info!("enumerated {} font families", app.total_fonts);
        app
    }

    /// Re-enumerate the catalog and fill the displayed list with it,
    /// dropping whatever was shown before. Runs at startup and whenever the
    /// search field becomes empty.
    pub fn populate_font_list(&mut self) {
        let names = self.catalog.family_names();
        self.total_fonts = names.len();
        self.list.reset(names);
    }

    /// Theme-selector commit. The visuals are applied at the start of the
    /// next frame.
    pub fn on_theme_selected(&mut self) {
        self.theme_dirty = true;
        debug!("theme changed to {}", self.theme.name());
    }

    /// Search-field edit. An empty query restores the full catalog;
    /// anything else narrows the currently displayed list.
    pub fn on_search_changed(&mut self) {
        if self.query.is_empty() {
            self.populate_font_list();
        } else {
            self.list.apply_query(&self.query);
        }
    }

    /// List-row click. An empty name means no row was focused; ignore it.
    /// Otherwise commit the selection and resolve its preview faces.
    pub fn on_font_selected(&mut self, name: &str) {
        if name.is_empty() {
            return;
        }
        self.selected_font = Some(name.to_string());
        debug!("selected font {:?}", name);
        match self.catalog.preview_faces(name) {
            Ok(faces) => self.pending_faces = Some(faces),
            Err(err) => {
                // Previews keep their current faces; only the label changes.
                warn!("could not resolve preview faces for {:?}: {:#}", name, err);
            }
        }
    }

    /// Slider commit; the size never leaves [MIN_FONT_SIZE, MAX_FONT_SIZE],
    /// whoever the caller is.
    pub fn on_size_changed(&mut self) {
        self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }
}

impl eframe::App for FontPreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.theme_dirty {
            ctx.set_visuals(self.theme.visuals());
            self.theme_dirty = false;
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| ui::header(ui, self));
        egui::TopBottomPanel::bottom("statusbar").show(ctx, |ui| ui::status_bar(ui, self));
        egui::SidePanel::left("font_list")
            .default_width(300.0)
            .show(ctx, |ui| ui::font_list(ui, self));
        egui::CentralPanel::default().show(ctx, |ui| ui::preview(ui, self));

        // Deferred font install, after the panels have drawn.
        if let Some(faces) = self.pending_faces.take() {
            fonts::install_preview_faces(ctx, faces);
        }
    }
}
