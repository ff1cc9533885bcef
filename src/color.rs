use eframe::egui::{Color32, Visuals};
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{Scheme, Series};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Colour per plotted series, shared by both panels.
///
/// Solver series get fixed palette hues. The analytic curve follows the
/// theme's strong text colour so it contrasts with the plot background in
/// both light and dark mode.
#[derive(Debug, Clone)]
pub struct SeriesColors {
    solvers: Vec<Color32>,
}

impl Default for SeriesColors {
    fn default() -> Self {
        SeriesColors {
            solvers: generate_palette(Scheme::ALL.len()),
        }
    }
}

impl SeriesColors {
    pub fn color_for(&self, series: Series, visuals: &Visuals) -> Color32 {
        match series {
            Series::Solver(scheme) => self
                .solvers
                .get(scheme as usize)
                .copied()
                .unwrap_or(Color32::GRAY),
            Series::Analytic => visuals.strong_text_color(),
        }
    }
}
