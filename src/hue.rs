//! Hue angle to pure sRGB hue, and the shape predicates for hues and tints.

use palette::Srgb;

use crate::error::ColorError;

/// Convert a hue angle to a pure, maximally saturated sRGB color.
///
/// Equivalent to `hsl(degrees, 100%, 50%)`: one component is 1, one is 0, and
/// the third follows the hue wheel. The free component is quantized to
/// 8 bits so the hue is exactly displayable. Angles wrap modulo 360.
///
/// # Example
///
/// ```
/// use lumapick::hue::hue_from_angle;
///
/// let red = hue_from_angle(0.0).unwrap();
/// assert_eq!((red.red, red.green, red.blue), (1.0, 0.0, 0.0));
///
/// let orange = hue_from_angle(30.0).unwrap();
/// assert_eq!(orange.red, 1.0);
/// assert_eq!(orange.blue, 0.0);
/// ```
pub fn hue_from_angle(degrees: f64) -> Result<Srgb<f64>, ColorError> {
    if !degrees.is_finite() {
        return Err(ColorError::NonFiniteAngle(degrees));
    }

    let sector = degrees.rem_euclid(360.0) / 60.0;
    // Distance of the free channel from 0 along the current sector
    let x = 1.0 - ((sector % 2.0) - 1.0).abs();
    let x = quantize(x);

    let (r, g, b) = match sector as u8 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };

    Ok(Srgb::new(r, g, b))
}

/// Snap a component in [0, 1] to the nearest multiple of 1/255.
fn quantize(c: f64) -> f64 {
    (c.clamp(0.0, 1.0) * 255.0).round() / 255.0
}

/// Whether all components are in [0, 1], the largest is exactly 1 and the
/// smallest is exactly 0.
pub fn is_pure_hue(color: Srgb<f64>) -> bool {
    let [r, g, b] = [color.red, color.green, color.blue];
    if ![r, g, b].iter().all(|c| (0.0..=1.0).contains(c)) {
        return false;
    }
    r.max(g).max(b) == 1.0 && r.min(g).min(b) == 0.0
}

/// Whether all components are in [0, 1] and at least one is exactly 1.
pub fn is_pure_tint(color: Srgb<f64>) -> bool {
    let [r, g, b] = [color.red, color.green, color.blue];
    [r, g, b].iter().all(|c| (0.0..=1.0).contains(c)) && (r == 1.0 || g == 1.0 || b == 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_keeps_endpoints() {
        assert_eq!(quantize(0.0), 0.0);
        assert_eq!(quantize(1.0), 1.0);
    }

    #[test]
    fn sector_boundaries_land_on_primaries() {
        let green = hue_from_angle(120.0).unwrap();
        assert_eq!((green.red, green.green, green.blue), (0.0, 1.0, 0.0));
        let blue = hue_from_angle(240.0).unwrap();
        assert_eq!((blue.red, blue.green, blue.blue), (0.0, 0.0, 1.0));
    }
}
