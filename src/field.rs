//! The 256x256 tint/shade field.

use palette::Srgb;

#[cfg(debug_assertions)]
use tracing::instrument;

use crate::shade::apply_shade;
use crate::tint::{TINT_STEPS, Tints};

/// Width and height of the field in pixels.
pub const FIELD_SIZE: usize = TINT_STEPS;

/// Row-major 8-bit bitmap: column = tint index, row = shade step.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pixels: Vec<Srgb<u8>>,
}

impl Field {
    /// Pixel at `row` (0 = full tint, 255 = black) and `col` (tint index).
    pub fn pixel(&self, row: usize, col: usize) -> Srgb<u8> {
        self.pixels[row * FIELD_SIZE + col]
    }

    /// One row of the field, left to right.
    pub fn row(&self, row: usize) -> &[Srgb<u8>] {
        let start = row * FIELD_SIZE;
        &self.pixels[start..start + FIELD_SIZE]
    }

    pub fn pixels(&self) -> &[Srgb<u8>] {
        &self.pixels
    }

    /// RGBA bytes with full opacity, ready to blit.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| [p.red, p.green, p.blue, u8::MAX])
            .collect()
    }
}

/// Shade multiplier of field row `row`: 1 at the top, 0 at the bottom.
pub fn row_shade(row: usize) -> f64 {
    1.0 - row as f64 / (FIELD_SIZE - 1) as f64
}

/// Rasterize the field for a tint sequence.
///
/// Pixel (row i, column j) is tint j scaled by `1 - i/255`, a straight line
/// in RGB from the tint down to black.
#[cfg_attr(debug_assertions, instrument(skip(tints)))]
pub fn render_field(tints: &Tints) -> Field {
    let mut pixels = Vec::with_capacity(FIELD_SIZE * FIELD_SIZE);
    for row in 0..FIELD_SIZE {
        let shade = row_shade(row);
        pixels.extend(tints.iter().map(|tint| apply_shade(*tint, shade)));
    }
    Field { pixels }
}
