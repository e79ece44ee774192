use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::CellValue;

// ---------------------------------------------------------------------------
// Categorical palette
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn categorical_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n.max(1) as f32) * 360.0;
            hsl_to_color32(Hsl::new(hue, 0.70, 0.50))
        })
        .collect()
}

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Category → colour mapping (scatter series, grouped bars)
// ---------------------------------------------------------------------------

/// Maps the distinct values of a categorical column to distinct colours.
#[derive(Debug, Clone)]
pub struct CategoryColors {
    mapping: BTreeMap<CellValue, Color32>,
    fallback: Color32,
}

impl CategoryColors {
    /// Build a colour map over sorted distinct values.
    pub fn new(values: impl IntoIterator<Item = CellValue>) -> Self {
        let ordered: Vec<CellValue> = values.into_iter().collect();
        let palette = categorical_palette(ordered.len());
        CategoryColors {
            mapping: ordered.into_iter().zip(palette).collect(),
            fallback: Color32::GRAY,
        }
    }

    pub fn color_for(&self, value: &CellValue) -> Color32 {
        self.mapping.get(value).copied().unwrap_or(self.fallback)
    }
}

// ---------------------------------------------------------------------------
// Diverging map for correlation heatmaps
// ---------------------------------------------------------------------------

/// Colour for a correlation coefficient in [-1, 1]: saturated blue at -1,
/// near-white at 0, saturated red at +1. Out-of-range and NaN inputs clamp
/// to the neutral midpoint.
pub fn diverging(t: f64) -> Color32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(-1.0, 1.0) } as f32;
    let hue = if t < 0.0 { 225.0 } else { 8.0 };
    let strength = t.abs();
    let saturation = 0.85 * strength;
    let lightness = 0.95 - 0.45 * strength;
    hsl_to_color32(Hsl::new(hue, saturation, lightness))
}

/// Readable text colour on top of a [`diverging`] cell.
pub fn diverging_text(t: f64) -> Color32 {
    if t.abs() > 0.6 {
        Color32::WHITE
    } else {
        Color32::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_entries() {
        let palette = categorical_palette(6);
        assert_eq!(palette.len(), 6);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(categorical_palette(0).is_empty());
    }

    #[test]
    fn category_colors_distinguish_values() {
        let colors = CategoryColors::new([
            CellValue::String("setosa".into()),
            CellValue::String("versicolor".into()),
            CellValue::String("virginica".into()),
        ]);
        let a = colors.color_for(&CellValue::String("setosa".into()));
        let b = colors.color_for(&CellValue::String("virginica".into()));
        assert_ne!(a, b);
        // Unmapped values fall back to gray.
        assert_eq!(
            colors.color_for(&CellValue::String("other".into())),
            Color32::GRAY
        );
    }

    #[test]
    fn diverging_endpoints_and_midpoint() {
        let negative = diverging(-1.0);
        let neutral = diverging(0.0);
        let positive = diverging(1.0);
        // Blue end, red end, pale middle.
        assert!(negative.b() > negative.r());
        assert!(positive.r() > positive.b());
        assert!(neutral.r() > 230 && neutral.g() > 230 && neutral.b() > 230);
        // NaN degrades to the midpoint rather than panicking.
        assert_eq!(diverging(f64::NAN), neutral);
    }
}
