use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

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
            let hsl = Hsl::new(hue, 0.70, 0.55);
            to_color32(hsl.into_color())
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Team colour mapping
// ---------------------------------------------------------------------------

/// Maps team codes to distinct colours, stable for a given team set.
#[derive(Debug, Clone)]
pub struct TeamColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl TeamColors {
    /// Assign palette colours over the sorted team codes.
    pub fn new(teams: &BTreeSet<String>) -> Self {
        let palette = generate_palette(teams.len());
        let mapping = teams
            .iter()
            .zip(palette)
            .map(|(t, c)| (t.clone(), c))
            .collect();
        TeamColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Colour for a team code; unknown codes get the neutral default.
    pub fn color_for(&self, team: &str) -> Color32 {
        self.mapping.get(team).copied().unwrap_or(self.default_color)
    }
}

// ---------------------------------------------------------------------------
// Diverging ramp for the correlation heatmap
// ---------------------------------------------------------------------------

/// Map a correlation coefficient in [-1, 1] to a blue–white–red ramp.
pub fn diverging(t: f64) -> Color32 {
    let t = t.clamp(-1.0, 1.0) as f32;
    let cold: Srgb = Hsl::new(225.0, 0.65, 0.55).into_color();
    let warm: Srgb = Hsl::new(5.0, 0.70, 0.55).into_color();
    let white = Srgb::new(0.96, 0.96, 0.96);

    let mixed = if t < 0.0 {
        lerp(white, cold, -t)
    } else {
        lerp(white, warm, t)
    };
    to_color32(mixed)
}

fn lerp(a: Srgb, b: Srgb, t: f32) -> Srgb {
    Srgb::new(
        a.red + (b.red - a.red) * t,
        a.green + (b.green - a.green) * t,
        a.blue + (b.blue - a.blue) * t,
    )
}
