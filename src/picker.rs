//! Selection and contrast state with the command handlers that update it.
//!
//! A [`Picker`] owns every input (hue angle, pointer position, reference
//! color, ratio, display mode) and every value derived from them. Each setter
//! validates its input, recomputes what depends on it, and returns the new
//! derived values. The 256x256 field is only rebuilt when the hue changes.

use std::sync::Arc;

use palette::Srgb;
use tracing::{debug, warn};

use crate::contrast::{
    BoundaryPath, ContrastBounds, DisplayMode, FOREGROUND_THRESHOLD, LEGIBILITY_LUMINANCE,
    boundary_path,
};
use crate::error::ColorError;
use crate::field::{Field, render_field};
use crate::hue::hue_from_angle;
use crate::luminance::luminance_u8;
use crate::shade::{Reach, apply_shade, shade_for_luminance};
use crate::tint::{TINT_STEPS, Tints, interpolate_tints};

/// Default target ratio (WCAG AA for body text).
pub const DEFAULT_RATIO: f64 = 4.5;

/// Text color that reads best on top of a preview color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Foreground {
    White,
    Black,
}

impl Foreground {
    /// White below [`FOREGROUND_THRESHOLD`], black otherwise.
    pub fn for_luminance(luminance: f64) -> Self {
        if luminance < FOREGROUND_THRESHOLD {
            Self::White
        } else {
            Self::Black
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

/// Derived values for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    /// Column of the field under the pointer
    pub tint_index: usize,
    /// Gray multiplier applied to the tint
    pub shade: f64,
    pub color: Srgb<u8>,
    /// `#rrggbb`
    pub hex: String,
    /// Luminance of the 8-bit color
    pub luminance: f64,
    pub foreground: Foreground,
    /// Contrast ratio against the reference color
    pub contrast: f64,
    /// Whether `contrast` meets the target ratio
    pub passes: bool,
}

/// Format an 8-bit color as `#rrggbb`.
pub fn hex_string(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

fn check_position(name: &'static str, value: f64) -> Result<f64, ColorError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::PositionOutOfRange { name, value })
    }
}

/// The picker state.
#[derive(Debug, Clone)]
pub struct Picker {
    hue_angle: f64,
    hue: Srgb<f64>,
    tints: Tints,
    field: Arc<Field>,

    left: f64,
    bottom: f64,
    tint_index: usize,
    shade: f64,
    color: Srgb<u8>,
    luminance: f64,

    reference: Srgb<u8>,
    reference_luminance: f64,
    ratio: f64,
    bounds: ContrastBounds,
    mode: DisplayMode,
}

impl Picker {
    /// Create a picker at `hue_angle` with the pointer on the pure hue
    /// (top-left), a white reference and the default ratio.
    pub fn new(hue_angle: f64) -> Result<Self, ColorError> {
        let hue = hue_from_angle(hue_angle)?;
        let tints = interpolate_tints(hue)?;
        let field = Arc::new(render_field(&tints));
        let reference = Srgb::new(u8::MAX, u8::MAX, u8::MAX);
        let reference_luminance = luminance_u8(reference);
        let bounds = ContrastBounds::new(reference_luminance, DEFAULT_RATIO)?;

        let mut picker = Self {
            hue_angle,
            hue,
            tints,
            field,
            left: 0.0,
            bottom: 0.0,
            tint_index: 0,
            shade: 1.0,
            color: Srgb::new(0, 0, 0),
            luminance: 0.0,
            reference,
            reference_luminance,
            ratio: DEFAULT_RATIO,
            bounds,
            mode: DisplayMode::None,
        };
        picker.update_selection();
        Ok(picker)
    }

    /// Change the hue; rebuilds the tints and the field.
    pub fn set_hue(&mut self, hue_angle: f64) -> Result<&Tints, ColorError> {
        let hue = hue_from_angle(hue_angle).inspect_err(|e| warn!(%e, "rejected hue"))?;
        self.tints = interpolate_tints(hue)?;
        self.field = Arc::new(render_field(&self.tints));
        self.hue_angle = hue_angle;
        self.hue = hue;
        self.update_selection();
        debug!(
            hue_angle,
            r = hue.red,
            g = hue.green,
            b = hue.blue,
            "hue changed"
        );
        Ok(&self.tints)
    }

    /// Move the pointer. `left` picks the tint column, `bottom` darkens it.
    ///
    /// Both coordinates must already be in [0, 1]; clamping is the caller's
    /// job.
    pub fn set_pointer_position(&mut self, left: f64, bottom: f64) -> Result<Preview, ColorError> {
        let left = check_position("left", left).inspect_err(|e| warn!(%e, "rejected pointer"))?;
        let bottom =
            check_position("bottom", bottom).inspect_err(|e| warn!(%e, "rejected pointer"))?;
        self.left = left;
        self.bottom = bottom;
        self.update_selection();
        debug!(left, bottom, tint_index = self.tint_index, "pointer moved");
        Ok(self.preview())
    }

    /// Change the color contrast is measured against.
    pub fn set_reference_color(&mut self, reference: Srgb<u8>) -> Result<ContrastBounds, ColorError> {
        let reference_luminance = luminance_u8(reference);
        self.bounds = ContrastBounds::new(reference_luminance, self.ratio)?;
        self.reference = reference;
        self.reference_luminance = reference_luminance;
        debug!(reference = %hex_string(reference), reference_luminance, "reference changed");
        Ok(self.bounds)
    }

    /// Change the target contrast ratio; must be in [1, 21].
    pub fn set_contrast_ratio(&mut self, ratio: f64) -> Result<ContrastBounds, ColorError> {
        self.bounds = ContrastBounds::new(self.reference_luminance, ratio)
            .inspect_err(|e| warn!(%e, "rejected ratio"))?;
        self.ratio = ratio;
        debug!(ratio, upper = self.bounds.upper, lower = self.bounds.lower, "ratio changed");
        Ok(self.bounds)
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        debug!(?mode, "display mode changed");
        self.mode = mode;
    }

    /// The field for the current hue.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Shared handle to the field; stays the same allocation until the hue changes.
    pub fn shared_field(&self) -> Arc<Field> {
        Arc::clone(&self.field)
    }

    /// Overlay geometry for the current mode, scaled to `width` x `height`.
    pub fn boundary_path(&self, width: f64, height: f64) -> Result<BoundaryPath, ColorError> {
        boundary_path(self.mode, &self.tints, &self.bounds, width, height)
    }

    pub fn preview(&self) -> Preview {
        let contrast = self.bounds.contrast(self.luminance);
        Preview {
            tint_index: self.tint_index,
            shade: self.shade,
            color: self.color,
            hex: hex_string(self.color),
            luminance: self.luminance,
            foreground: Foreground::for_luminance(self.luminance),
            contrast,
            passes: !self.bounds.fails(self.luminance),
        }
    }

    /// Where the selected tint crosses the black/white legibility curve.
    pub fn legibility_reach(&self) -> Result<Reach, ColorError> {
        shade_for_luminance(LEGIBILITY_LUMINANCE, self.tints[self.tint_index]).map(Reach::classify)
    }

    pub fn hue_angle(&self) -> f64 {
        self.hue_angle
    }

    pub fn hue(&self) -> Srgb<f64> {
        self.hue
    }

    pub fn tints(&self) -> &Tints {
        &self.tints
    }

    /// Pointer position as (left, bottom).
    pub fn pointer(&self) -> (f64, f64) {
        (self.left, self.bottom)
    }

    pub fn reference(&self) -> Srgb<u8> {
        self.reference
    }

    pub fn reference_luminance(&self) -> f64 {
        self.reference_luminance
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn bounds(&self) -> ContrastBounds {
        self.bounds
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    fn update_selection(&mut self) {
        self.tint_index = ((self.left * (TINT_STEPS - 1) as f64).round() as usize).min(TINT_STEPS - 1);
        self.shade = 1.0 - self.bottom;
        self.color = apply_shade(self.tints[self.tint_index], self.shade);
        self.luminance = luminance_u8(self.color);
    }
}
