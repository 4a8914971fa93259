//! Error type for the colorimetric core.

use palette::Srgb;

/// A rejected call into the colorimetric core.
///
/// Inputs are never clamped inside the core; an out-of-domain argument is
/// reported with the argument name and the constraint it violated.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    /// A color component outside [0, 1] or not a finite number
    ComponentOutOfRange { name: &'static str, value: f64 },
    /// Color is not a pure hue (max component 1, min component 0)
    NotPureHue(Srgb<f64>),
    /// Color is not a pure tint (at least one component exactly 1)
    NotPureTint(Srgb<f64>),
    /// Target luminance outside [0, 1]
    LuminanceOutOfRange(f64),
    /// Contrast ratio outside [1, 21]
    RatioOutOfRange(f64),
    /// Pointer coordinate outside [0, 1]
    PositionOutOfRange { name: &'static str, value: f64 },
    /// Hue angle is NaN or infinite
    NonFiniteAngle(f64),
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ComponentOutOfRange { name, value } => {
                write!(f, "{name} component {value} is outside [0, 1]")
            }
            Self::NotPureHue(c) => write!(
                f,
                "({}, {}, {}) is not a pure hue: needs one component at 1 and one at 0",
                c.red, c.green, c.blue
            ),
            Self::NotPureTint(c) => write!(
                f,
                "({}, {}, {}) is not a pure tint: needs at least one component at 1",
                c.red, c.green, c.blue
            ),
            Self::LuminanceOutOfRange(v) => {
                write!(f, "target luminance {v} is outside [0, 1]")
            }
            Self::RatioOutOfRange(v) => write!(f, "contrast ratio {v} is outside [1, 21]"),
            Self::PositionOutOfRange { name, value } => {
                write!(f, "pointer {name} {value} is outside [0, 1]")
            }
            Self::NonFiniteAngle(v) => write!(f, "hue angle {v} is not a finite number"),
        }
    }
}

impl std::error::Error for ColorError {}
