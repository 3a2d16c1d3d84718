use eframe::egui;
use egui::{FontFamily, FontId, RichText};

use crate::app::{FontPreviewApp, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::fonts;
use crate::theme::Theme;

pub(crate) fn header(ui: &mut egui::Ui, app: &mut FontPreviewApp) {
    ui.add_space(2.0);
    ui.horizontal(|ui| {
        ui.heading("Fonts Preview");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let prev = app.theme;
            egui::ComboBox::from_id_salt("theme_combo")
                .selected_text(format!("🎨 {}", app.theme.name()))
                .show_ui(ui, |ui| {
                    for theme in Theme::ALL {
                        ui.selectable_value(&mut app.theme, theme, theme.name());
                    }
                });
            ui.label("Change theme:");
            if app.theme != prev {
                app.on_theme_selected();
            }
        });
    });
    ui.add_space(2.0);
}

pub(crate) fn font_list(ui: &mut egui::Ui, app: &mut FontPreviewApp) {
    ui.add_space(4.0);
    ui.label(RichText::new("Fonts").strong());
    ui.separator();

    // Leave room under the list for the search box.
    let list_height = (ui.available_height() - 56.0).max(0.0);
    let row_height = ui.spacing().interact_size.y;

    let mut clicked: Option<String> = None;
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .max_height(list_height)
        .show_rows(ui, row_height, app.list.len(), |ui, rows| {
            for name in &app.list.visible()[rows] {
                let selected = app.selected_font.as_deref() == Some(name.as_str());
                if ui.selectable_label(selected, name.as_str()).clicked() {
                    clicked = Some(name.clone());
                }
            }
        });
    if let Some(name) = clicked {
        app.on_font_selected(&name);
    }

    ui.separator();
    let response = ui.add(
        egui::TextEdit::singleline(&mut app.query)
            .hint_text("Search fonts…")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        app.on_search_changed();
    }
    if app.list.is_empty() && !app.query.is_empty() {
        ui.label(RichText::new("No matching fonts.").weak());
    }
}

pub(crate) fn preview(ui: &mut egui::Ui, app: &mut FontPreviewApp) {
    ui.add_space(4.0);
    ui.label(RichText::new("Font Name:").strong());
    match &app.selected_font {
        Some(name) => ui.label(RichText::new(name.as_str()).size(16.0)),
        None => ui.label(RichText::new("(none selected)").size(16.0).weak()),
    };

    ui.add_space(8.0);
    ui.label(RichText::new("Sample Text:").strong());
    ui.add(egui::TextEdit::singleline(&mut app.sample_text).desired_width(f32::INFINITY));

    ui.add_space(8.0);
    ui.label(RichText::new("Font Size:").strong());
    ui.scope(|ui| {
        ui.spacing_mut().slider_width = (ui.available_width() - 80.0).max(96.0);
        let response =
            ui.add(egui::Slider::new(&mut app.font_size, MIN_FONT_SIZE..=MAX_FONT_SIZE));
        if response.changed() {
            app.on_size_changed();
        }
    });

    ui.add_space(12.0);
    ui.separator();
    ui.add_space(8.0);

    // Both previews render the same committed font, text and size.
    let size = app.font_size as f32;
    ui.label(
        RichText::new(app.sample_text.as_str())
            .font(FontId::new(size, FontFamily::Name(fonts::BOLD_FAMILY.into()))),
    );
    ui.add_space(8.0);
    ui.label(
        RichText::new(app.sample_text.as_str())
            .font(FontId::new(size, FontFamily::Name(fonts::ITALIC_FAMILY.into()))),
    );
}

pub(crate) fn status_bar(ui: &mut egui::Ui, app: &mut FontPreviewApp) {
    ui.horizontal(|ui| {
        if app.query.is_empty() {
            ui.label(format!("{} fonts", app.total_fonts));
        } else {
            ui.label(format!("Showing {} of {} fonts", app.list.len(), app.total_fonts));
        }
        if let Some(name) = &app.selected_font {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.monospace(name.as_str());
            });
        }
    });
}
