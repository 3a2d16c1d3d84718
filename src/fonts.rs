use std::sync::Arc;

use eframe::egui;
use egui::{FontData, FontDefinitions, FontFamily};
use tracing::debug;

use crate::catalog::PreviewFaces;

/// Reserved family names the two preview labels render with.
pub const BOLD_FAMILY: &str = "preview-bold";
pub const ITALIC_FAMILY: &str = "preview-italic";

/// Register the preview families against the default font stack so the
/// preview labels can always resolve them, selection or not.
pub fn register_preview_families(ctx: &egui::Context) {
    let mut defs = FontDefinitions::default();
    let default_stack = default_stack(&defs);
    defs.families
        .insert(FontFamily::Name(BOLD_FAMILY.into()), default_stack.clone());
    defs.families
        .insert(FontFamily::Name(ITALIC_FAMILY.into()), default_stack);
    ctx.set_fonts(defs);
}

/// Install the resolved faces under the preview families. The default stack
/// stays behind the installed face so glyphs it lacks still render.
pub fn install_preview_faces(ctx: &egui::Context, faces: PreviewFaces) {
    let mut defs = FontDefinitions::default();
    let default_stack = default_stack(&defs);

    for (family, key, face) in [
        (BOLD_FAMILY, "preview-bold-face", faces.bold),
        (ITALIC_FAMILY, "preview-italic-face", faces.italic),
    ] {
        let mut data = FontData::from_owned(face.data);
        data.index = face.index;
        defs.font_data.insert(key.to_string(), Arc::new(data));

        let mut stack = vec![key.to_string()];
        stack.extend(default_stack.iter().cloned());
        defs.families.insert(FontFamily::Name(family.into()), stack);
    }

    ctx.set_fonts(defs);
    debug!("installed preview faces for {}", faces.family);
}

fn default_stack(defs: &FontDefinitions) -> Vec<String> {
    defs.families
        .get(&FontFamily::Proportional)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FontCatalog;

    #[test]
    fn preview_families_resolve_before_any_selection() {
        let ctx = egui::Context::default();
        register_preview_families(&ctx);
        // Laying out text in the reserved families must not panic even
        // though no faces have been installed yet.
        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                for family in [BOLD_FAMILY, ITALIC_FAMILY] {
                    ui.label(
                        egui::RichText::new("sample")
                            .font(egui::FontId::new(12.0, FontFamily::Name(family.into()))),
                    );
                }
            });
        });
    }

    #[test]
    fn installed_faces_join_the_preview_stack() {
        let catalog = FontCatalog::load_system();
        let names = catalog.family_names();
        let Some(faces) = names.iter().find_map(|name| catalog.preview_faces(name).ok())
        else {
            println!("no resolvable system fonts - skipping");
            return;
        };

        let ctx = egui::Context::default();
        register_preview_families(&ctx);
        let family = faces.family.clone();
        install_preview_faces(&ctx, faces);
        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("Sample of {family}"))
                        .font(egui::FontId::new(14.0, FontFamily::Name(ITALIC_FAMILY.into()))),
                );
            });
        });
    }
}
