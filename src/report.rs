//! Serializable snapshot of the picker state.

use palette::Srgb;
use serde::Serialize;

use crate::contrast::{BoundaryPath, ContrastBounds, DisplayMode};
use crate::error::ColorError;
use crate::picker::{Picker, hex_string};
use crate::shade::to_u8;

/// Everything the picker currently shows, in output-friendly form.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub hue: HueReport,
    pub selection: SelectionReport,
    pub contrast: ContrastReport,
    pub overlay: OverlayReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct HueReport {
    pub angle: f64,
    pub hex: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectionReport {
    pub left: f64,
    pub bottom: f64,
    pub tint_index: usize,
    pub shade: f64,
    pub hex: String,
    pub rgb: [u8; 3],
    pub luminance: f64,
    /// Text color to draw on top of the selection
    pub foreground: &'static str,
    /// Shade where this tint crosses the black/white curve; null when unreachable
    pub legibility_shade: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContrastReport {
    pub reference: String,
    pub reference_luminance: f64,
    pub ratio: f64,
    /// Contrast of the selection against the reference
    pub actual: f64,
    pub passes: bool,
    pub bounds: ContrastBounds,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverlayReport {
    pub mode: DisplayMode,
    pub width: f64,
    pub height: f64,
    pub path: BoundaryPath,
}

fn rgb(color: Srgb<u8>) -> [u8; 3] {
    [color.red, color.green, color.blue]
}

impl Report {
    /// Snapshot `picker` with overlay geometry scaled to `width` x `height`.
    pub fn new(picker: &Picker, width: f64, height: f64) -> Result<Self, ColorError> {
        let hue = picker.hue();
        let preview = picker.preview();
        let (left, bottom) = picker.pointer();

        Ok(Self {
            hue: HueReport {
                angle: picker.hue_angle(),
                hex: hex_string(Srgb::new(to_u8(hue.red), to_u8(hue.green), to_u8(hue.blue))),
            },
            selection: SelectionReport {
                left,
                bottom,
                tint_index: preview.tint_index,
                shade: preview.shade,
                hex: preview.hex,
                rgb: rgb(preview.color),
                luminance: preview.luminance,
                foreground: preview.foreground.as_str(),
                legibility_shade: picker.legibility_reach()?.shade(),
            },
            contrast: ContrastReport {
                reference: hex_string(picker.reference()),
                reference_luminance: picker.reference_luminance(),
                ratio: picker.ratio(),
                actual: preview.contrast,
                passes: preview.passes,
                bounds: picker.bounds(),
            },
            overlay: OverlayReport {
                mode: picker.mode(),
                width,
                height,
                path: picker.boundary_path(width, height)?,
            },
        })
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
