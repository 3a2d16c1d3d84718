use eframe::egui;
use egui::Color32;

/// Fixed palette of selectable UI themes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
    SolarizedLight,
    SolarizedDark,
    Dracula,
    GruvboxDark,
    Sepia,
}

impl Theme {
    pub const ALL: [Theme; 7] = [
        Theme::Light,
        Theme::Dark,
        Theme::SolarizedLight,
        Theme::SolarizedDark,
        Theme::Dracula,
        Theme::GruvboxDark,
        Theme::Sepia,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::SolarizedLight => "Solarized Light",
            Theme::SolarizedDark => "Solarized Dark",
            Theme::Dracula => "Dracula",
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::Sepia => "Sepia",
        }
    }

    pub fn is_dark(self) -> bool {
        !matches!(self, Theme::Light | Theme::SolarizedLight | Theme::Sepia)
    }

    /// Startup theme from the host's dark/light preference. Unknown or
    /// undetectable preferences land on Light.
    pub fn detect() -> Theme {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        let base = if self.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        match self {
            Theme::Light | Theme::Dark => base,
            Theme::SolarizedLight => themed(
                base,
                Color32::from_rgb(253, 246, 227),
                Color32::from_rgb(238, 232, 213),
                Color32::from_rgb(101, 123, 131),
                Color32::from_rgb(38, 139, 210),
            ),
            Theme::SolarizedDark => themed(
                base,
                Color32::from_rgb(0, 43, 54),
                Color32::from_rgb(7, 54, 66),
                Color32::from_rgb(147, 161, 161),
                Color32::from_rgb(38, 139, 210),
            ),
            Theme::Dracula => themed(
                base,
                Color32::from_rgb(40, 42, 54),
                Color32::from_rgb(68, 71, 90),
                Color32::from_rgb(248, 248, 242),
                Color32::from_rgb(189, 147, 249),
            ),
            Theme::GruvboxDark => themed(
                base,
                Color32::from_rgb(40, 40, 40),
                Color32::from_rgb(60, 56, 54),
                Color32::from_rgb(235, 219, 178),
                Color32::from_rgb(254, 128, 25),
            ),
            Theme::Sepia => themed(
                base,
                Color32::from_rgb(244, 236, 216),
                Color32::from_rgb(230, 219, 195),
                Color32::from_rgb(91, 70, 54),
                Color32::from_rgb(160, 82, 45),
            ),
        }
    }
}

/// Recolor the stock visuals with a palette's background, panel, text and
/// accent colors.
fn themed(
    mut visuals: egui::Visuals,
    bg: Color32,
    panel: Color32,
    text: Color32,
    accent: Color32,
) -> egui::Visuals {
    visuals.panel_fill = bg;
    visuals.window_fill = bg;
    visuals.extreme_bg_color = panel;
    visuals.faint_bg_color = panel;
    visuals.override_text_color = Some(text);
    visuals.selection.bg_fill = accent;
    visuals.selection.stroke.color = Color32::WHITE;
    visuals.hyperlink_color = accent;
    visuals.widgets.noninteractive.bg_fill = bg;
    visuals.widgets.noninteractive.fg_stroke.color = text;
    visuals.widgets.inactive.weak_bg_fill = panel;
    visuals.widgets.inactive.fg_stroke.color = text;
    visuals.widgets.hovered.fg_stroke.color = text;
    visuals.widgets.active.fg_stroke.color = text;
    visuals.widgets.open.fg_stroke.color = text;
    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_names_are_distinct() {
        let mut names: Vec<&str> = Theme::ALL.iter().map(|t| t.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Theme::ALL.len());
    }

    #[test]
    fn visuals_agree_with_dark_classification() {
        for theme in Theme::ALL {
            assert_eq!(theme.visuals().dark_mode, theme.is_dark(), "{}", theme.name());
        }
    }

    #[test]
    fn detection_lands_on_a_palette_member() {
        assert!(matches!(Theme::detect(), Theme::Light | Theme::Dark));
    }
}
