//! Inverse shade solver and the forward shade map.

use palette::Srgb;

use crate::error::ColorError;
use crate::hue::is_pure_tint;
use crate::luminance::{
    GAMMA_EXPONENT, GAMMA_OFFSET, LINEAR_SLOPE, LINEAR_THRESHOLD, check_unit, relative_luminance,
};

/// Find the gray multiplier that brings `tint` to `target` luminance.
///
/// The luminance of `tint * shade` is `shade_lin * luminance(tint)` where
/// `shade_lin` is the linearized shade, so the solver divides out the tint
/// luminance and applies the inverse transfer function.
///
/// The result is not clamped: above 1 the target is brighter than the tint
/// itself and cannot be reached by darkening it; at or below 0 only black
/// reaches it.
///
/// # Example
///
/// ```
/// use palette::Srgb;
/// use lumapick::luminance::relative_luminance;
/// use lumapick::shade::shade_for_luminance;
///
/// let tint = Srgb::new(1.0, 0.5, 0.5);
/// let own = relative_luminance(tint).unwrap();
/// let shade = shade_for_luminance(own, tint).unwrap();
/// assert!((shade - 1.0).abs() < 1e-9);
/// ```
pub fn shade_for_luminance(target: f64, tint: Srgb<f64>) -> Result<f64, ColorError> {
    if !(0.0..=1.0).contains(&target) {
        return Err(ColorError::LuminanceOutOfRange(target));
    }
    check_unit("red", tint.red)?;
    check_unit("green", tint.green)?;
    check_unit("blue", tint.blue)?;
    if !is_pure_tint(tint) {
        return Err(ColorError::NotPureTint(tint));
    }

    // Never zero: a pure tint has a channel at 1.
    let tint_luminance = relative_luminance(tint)?;
    let scaled = target / tint_luminance;

    let shade = if scaled < LINEAR_THRESHOLD / LINEAR_SLOPE {
        scaled * LINEAR_SLOPE
    } else {
        scaled.powf(1.0 / GAMMA_EXPONENT) * (1.0 + GAMMA_OFFSET) - GAMMA_OFFSET
    };
    Ok(shade)
}

/// Scale a tint by `shade` and round to 8 bits.
///
/// `shade` is limited to [0, 1] here: this is the displayed color, so an
/// unreachable or negative solver result must be classified with
/// [`Reach::classify`] before it gets this far.
pub fn apply_shade(tint: Srgb<f64>, shade: f64) -> Srgb<u8> {
    let shade = shade.clamp(0.0, 1.0);
    Srgb::new(
        to_u8(tint.red * shade),
        to_u8(tint.green * shade),
        to_u8(tint.blue * shade),
    )
}

/// Round a [0, 1] component to a byte.
pub fn to_u8(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// How a solver result relates to the displayable range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reach {
    /// Only black reaches the target (shade at or below 0)
    Black,
    /// Reachable with this shade, in (0, 1]
    Shade(f64),
    /// Brighter than the tint itself
    Unreachable,
}

impl Reach {
    pub fn classify(shade: f64) -> Self {
        if shade > 1.0 {
            Self::Unreachable
        } else if shade <= 0.0 {
            Self::Black
        } else {
            Self::Shade(shade)
        }
    }

    /// The shade to display, or `None` when unreachable.
    pub fn shade(self) -> Option<f64> {
        match self {
            Self::Black => Some(0.0),
            Self::Shade(s) => Some(s),
            Self::Unreachable => None,
        }
    }
}
