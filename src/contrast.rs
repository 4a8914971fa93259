//! Contrast boundary geometry over the tint/shade field.
//!
//! Two overlays are supported: a single legibility curve where black and
//! white text are about equally readable, and a filled region of shades whose
//! contrast against a reference color falls below a target ratio.

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::luminance::contrast_ratio;
use crate::shade::shade_for_luminance;
use crate::tint::{TINT_STEPS, Tints};

/// Target luminance of the black/white legibility curve.
///
/// Sits between the lowest luminance that passes with black text (about
/// 0.1751) and the highest that passes with white text (about 0.1833),
/// nudged so a haloed black line separates visually.
pub const LEGIBILITY_LUMINANCE: f64 = 0.1795;

/// Below this luminance a preview uses white foreground text.
pub const FOREGROUND_THRESHOLD: f64 = 0.1792;

/// Allowed contrast ratios.
pub const MIN_RATIO: f64 = 1.0;
pub const MAX_RATIO: f64 = 21.0;

const LAST_COLUMN: f64 = (TINT_STEPS - 1) as f64;

/// Which overlay to draw on the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    #[default]
    None,
    /// Black/white legibility curve
    Legibility,
    /// Insufficient-contrast region against the reference color
    ContrastBoundary,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 3] = [Self::None, Self::Legibility, Self::ContrastBoundary];

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Legibility => "Black/White",
            Self::ContrastBoundary => "Contrast",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::None => Self::Legibility,
            Self::Legibility => Self::ContrastBoundary,
            Self::ContrastBoundary => Self::None,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::None => Self::ContrastBoundary,
            Self::Legibility => Self::None,
            Self::ContrastBoundary => Self::Legibility,
        }
    }
}

/// A point of overlay geometry in output coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Overlay geometry for the active display mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "points", rename_all = "kebab-case")]
pub enum BoundaryPath {
    /// Nothing to draw
    None,
    /// Open polyline, one point per column
    Polyline(Vec<Point>),
    /// Closed polygon to fill
    Region(Vec<Point>),
}

impl BoundaryPath {
    pub fn points(&self) -> &[Point] {
        match self {
            Self::None => &[],
            Self::Polyline(points) | Self::Region(points) => points,
        }
    }
}

/// Luminance range that fails a contrast ratio against a reference.
///
/// Colors with luminance strictly between `lower` and `upper` contrast less
/// than the ratio with the reference. Either bound may fall outside [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastBounds {
    pub upper: f64,
    pub lower: f64,
    #[serde(skip)]
    reference: f64,
    #[serde(skip)]
    ratio: f64,
}

impl ContrastBounds {
    /// Solve `(L + 0.05) / (ref + 0.05) = ratio` for L on both sides of the
    /// reference.
    ///
    /// # Example
    ///
    /// ```
    /// use lumapick::contrast::ContrastBounds;
    ///
    /// let bounds = ContrastBounds::new(0.0, 1.0).unwrap();
    /// assert_eq!(bounds.upper, 0.0);
    /// assert_eq!(bounds.lower, 0.0);
    /// ```
    pub fn new(reference_luminance: f64, ratio: f64) -> Result<Self, ColorError> {
        if !(0.0..=1.0).contains(&reference_luminance) {
            return Err(ColorError::LuminanceOutOfRange(reference_luminance));
        }
        if !(MIN_RATIO..=MAX_RATIO).contains(&ratio) {
            return Err(ColorError::RatioOutOfRange(ratio));
        }

        let l = reference_luminance;
        Ok(Self {
            upper: 0.05 * (20.0 * l * ratio + ratio - 1.0),
            lower: (l - 0.05 * ratio + 0.05) / ratio,
            reference: l,
            ratio,
        })
    }

    /// Bounds limited to the displayable luminance range.
    pub fn clamped(&self) -> (f64, f64) {
        (self.upper.clamp(0.0, 1.0), self.lower.clamp(0.0, 1.0))
    }

    /// Whether there is any luminance in [0, 1] that fails the ratio.
    pub fn is_empty(&self) -> bool {
        self.upper <= 0.0 || self.lower >= 1.0 || self.upper <= self.lower
    }

    /// Contrast of `luminance` against the reference.
    pub fn contrast(&self, luminance: f64) -> f64 {
        contrast_ratio(luminance, self.reference)
    }

    /// Whether a luminance fails the ratio against the reference.
    ///
    /// Decided on the ratio itself rather than the solved bounds, which carry
    /// rounding error at the extremes.
    pub fn fails(&self, luminance: f64) -> bool {
        self.contrast(luminance) < self.ratio
    }
}

fn column_x(column: usize, width: f64) -> f64 {
    column as f64 / LAST_COLUMN * width
}

/// The black/white legibility curve: one point per tint column.
///
/// Points are not clipped: where the curve's luminance is unreachable for a
/// tint the point lies above the field (negative y).
pub fn legibility_curve(tints: &Tints, width: f64, height: f64) -> Result<Vec<Point>, ColorError> {
    tints
        .iter()
        .enumerate()
        .map(|(column, tint)| {
            let shade = shade_for_luminance(LEGIBILITY_LUMINANCE, *tint)?;
            Ok(Point {
                x: column_x(column, width),
                y: (1.0 - shade) * height,
            })
        })
        .collect()
}

/// Y coordinate of a luminance boundary in one column, clipped to the field.
fn boundary_y(luminance: f64, tint: &palette::Srgb<f64>, height: f64) -> Result<f64, ColorError> {
    if luminance >= 1.0 {
        return Ok(0.0);
    }
    if luminance <= 0.0 {
        return Ok(height);
    }
    let shade = shade_for_luminance(luminance, *tint)?;
    Ok(((1.0 - shade) * height).clamp(0.0, height))
}

/// Closed polygon of insufficient contrast, or `None` if no luminance in
/// [0, 1] fails the ratio.
///
/// Walks the upper boundary left to right, then the lower boundary right to
/// left. The upper boundary sits on the top edge once `upper >= 1`; the lower
/// boundary sits on the bottom edge once `lower <= 0`.
pub fn boundary_region(
    tints: &Tints,
    bounds: &ContrastBounds,
    width: f64,
    height: f64,
) -> Result<Option<Vec<Point>>, ColorError> {
    if bounds.is_empty() {
        return Ok(None);
    }

    let mut points = Vec::with_capacity(tints.len() * 2);
    for (column, tint) in tints.iter().enumerate() {
        points.push(Point {
            x: column_x(column, width),
            y: boundary_y(bounds.upper, tint, height)?,
        });
    }
    for (column, tint) in tints.as_slice().iter().enumerate().rev() {
        points.push(Point {
            x: column_x(column, width),
            y: boundary_y(bounds.lower, tint, height)?,
        });
    }
    Ok(Some(points))
}

/// Overlay geometry for `mode`.
pub fn boundary_path(
    mode: DisplayMode,
    tints: &Tints,
    bounds: &ContrastBounds,
    width: f64,
    height: f64,
) -> Result<BoundaryPath, ColorError> {
    Ok(match mode {
        DisplayMode::None => BoundaryPath::None,
        DisplayMode::Legibility => BoundaryPath::Polyline(legibility_curve(tints, width, height)?),
        DisplayMode::ContrastBoundary => match boundary_region(tints, bounds, width, height)? {
            Some(points) => BoundaryPath::Region(points),
            None => BoundaryPath::None,
        },
    })
}
