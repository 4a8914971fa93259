//! WCAG relative luminance.
//!
//! Gamma linearization uses the WCAG 2.x constants (threshold 0.03928),
//! followed by the Rec. 709 weighted sum.

use palette::Srgb;

use crate::error::ColorError;
use crate::generated::LINEARIZED_U8;

/// Encoded values at or below this are on the linear segment of the curve.
pub const LINEAR_THRESHOLD: f64 = 0.03928;
/// Slope of the linear segment.
pub const LINEAR_SLOPE: f64 = 12.92;
/// Offset of the power segment.
pub const GAMMA_OFFSET: f64 = 0.055;
/// Exponent of the power segment.
pub const GAMMA_EXPONENT: f64 = 2.4;

/// Luminance weights for red, green and blue.
pub const WEIGHT_R: f64 = 0.2126;
pub const WEIGHT_G: f64 = 0.7152;
pub const WEIGHT_B: f64 = 0.0722;

/// Reject anything that is not a finite number in [0, 1].
pub(crate) fn check_unit(name: &'static str, value: f64) -> Result<f64, ColorError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::ComponentOutOfRange { name, value })
    }
}

fn linearize_unchecked(c: f64) -> f64 {
    if c <= LINEAR_THRESHOLD {
        c / LINEAR_SLOPE
    } else {
        ((c + GAMMA_OFFSET) / (1.0 + GAMMA_OFFSET)).powf(GAMMA_EXPONENT)
    }
}

/// Convert one gamma-encoded sRGB component to linear light.
///
/// # Example
///
/// ```
/// use lumapick::luminance::linearize;
///
/// assert_eq!(linearize(0.0).unwrap(), 0.0);
/// assert_eq!(linearize(1.0).unwrap(), 1.0);
/// assert!(linearize(1.5).is_err());
/// ```
pub fn linearize(c: f64) -> Result<f64, ColorError> {
    check_unit("value", c).map(linearize_unchecked)
}

/// Relative luminance of an sRGB color given as three components in [0, 1].
///
/// Each component is validated on its own; the first one out of range is
/// reported by name.
pub fn luminance(r: f64, g: f64, b: f64) -> Result<f64, ColorError> {
    let r = linearize_unchecked(check_unit("red", r)?);
    let g = linearize_unchecked(check_unit("green", g)?);
    let b = linearize_unchecked(check_unit("blue", b)?);
    Ok(WEIGHT_R * r + WEIGHT_G * g + WEIGHT_B * b)
}

/// Relative luminance of a floating-point sRGB color.
pub fn relative_luminance(color: Srgb<f64>) -> Result<f64, ColorError> {
    luminance(color.red, color.green, color.blue)
}

/// Relative luminance of an 8-bit sRGB color.
///
/// Uses the build-time table, which holds `linearize(i / 255)` for every
/// byte value, so the result equals `luminance` on the same components.
pub fn luminance_u8(color: Srgb<u8>) -> f64 {
    WEIGHT_R * LINEARIZED_U8[color.red as usize]
        + WEIGHT_G * LINEARIZED_U8[color.green as usize]
        + WEIGHT_B * LINEARIZED_U8[color.blue as usize]
}

/// WCAG contrast ratio between two luminances, in [1, 21].
///
/// Order independent: the lighter luminance always goes on top.
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_segment_is_continuous_with_power_segment() {
        let below = linearize_unchecked(LINEAR_THRESHOLD);
        let above = linearize_unchecked(LINEAR_THRESHOLD + 1e-9);
        assert!((above - below).abs() < 1e-6);
    }

    #[test]
    fn check_unit_rejects_nan() {
        assert!(check_unit("red", f64::NAN).is_err());
    }
}
