use egui::{Color32, Visuals};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        }
    }

    /// Line color for the editable "Updated" series.
    pub fn updated_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(255, 99, 132),
            Theme::Light => Color32::from_rgb(220, 57, 92),
        }
    }

    /// Line color for the read-only "Original" series.
    pub fn original_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(53, 162, 235),
            Theme::Light => Color32::from_rgb(36, 123, 190),
        }
    }

    /// Highlight for the point currently under the pointer or being dragged.
    pub fn drag_highlight_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(255, 200, 80),
            Theme::Light => Color32::from_rgb(200, 140, 20),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}
