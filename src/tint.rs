//! Tint interpolation from a pure hue to white.

use std::ops::Index;

use palette::Srgb;

use crate::error::ColorError;
use crate::hue::is_pure_hue;
use crate::luminance::check_unit;

/// Number of tints in a sequence (one per field column).
pub const TINT_STEPS: usize = 256;

const LAST_STEP: f64 = (TINT_STEPS - 1) as f64;

/// The 256 tints of a hue, from the hue itself (index 0) to white (index 255).
#[derive(Debug, Clone, PartialEq)]
pub struct Tints {
    colors: Vec<Srgb<f64>>,
}

impl Tints {
    pub fn iter(&self) -> std::slice::Iter<'_, Srgb<f64>> {
        self.colors.iter()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn as_slice(&self) -> &[Srgb<f64>] {
        &self.colors
    }
}

impl Index<usize> for Tints {
    type Output = Srgb<f64>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.colors[index]
    }
}

impl<'a> IntoIterator for &'a Tints {
    type Item = &'a Srgb<f64>;
    type IntoIter = std::slice::Iter<'a, Srgb<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Channel value of tint `step`; saturates at 1 so a channel that reaches
/// white stays there.
fn tint_channel(hue: f64, step: usize) -> f64 {
    let t = step as f64 / LAST_STEP;
    (hue + (1.0 - hue) * t).min(1.0)
}

/// Build the tint sequence for a pure hue.
///
/// Each channel moves linearly from the hue's value to 1. Rejects any color
/// that is not a pure hue (white, grays and colors with no channel at 0 or
/// no channel at 1 all fail).
///
/// # Example
///
/// ```
/// use palette::Srgb;
/// use lumapick::tint::interpolate_tints;
///
/// let tints = interpolate_tints(Srgb::new(1.0, 0.0, 0.0)).unwrap();
/// assert_eq!(tints.len(), 256);
/// assert_eq!(tints[255], Srgb::new(1.0, 1.0, 1.0));
/// assert!(interpolate_tints(Srgb::new(0.5, 0.5, 0.5)).is_err());
/// ```
pub fn interpolate_tints(hue: Srgb<f64>) -> Result<Tints, ColorError> {
    check_unit("red", hue.red)?;
    check_unit("green", hue.green)?;
    check_unit("blue", hue.blue)?;
    if !is_pure_hue(hue) {
        return Err(ColorError::NotPureHue(hue));
    }

    let colors = (0..TINT_STEPS)
        .map(|step| {
            Srgb::new(
                tint_channel(hue.red, step),
                tint_channel(hue.green, step),
                tint_channel(hue.blue, step),
            )
        })
        .collect();

    Ok(Tints { colors })
}
