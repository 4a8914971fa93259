//! TOML configuration file support and layering with CLI overrides.

use std::path::Path;

use csscolorparser::Color as CssColor;
use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::contrast::{DisplayMode, MAX_RATIO, MIN_RATIO};
use crate::error::ColorError;
use crate::picker::{DEFAULT_RATIO, Picker};

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading the file
    Io(std::io::Error),
    /// Merging or deserializing the layers failed
    Extract(Box<figment::Error>),
    /// Invalid color format
    InvalidColor(String),
    /// A value was rejected by the picker
    Invalid(ColorError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Extract(e) => write!(f, "Config error: {}", e),
            Self::InvalidColor(s) => write!(f, "Invalid color: {}", s),
            Self::Invalid(e) => write!(f, "Invalid setting: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Extract(Box::new(e))
    }
}

impl From<ColorError> for ConfigError {
    fn from(e: ColorError) -> Self {
        Self::Invalid(e)
    }
}

/// Parse a color string in any CSS format into an Srgb<u8>.
///
/// Alpha is discarded.
pub fn parse_color(input: &str) -> Result<Srgb<u8>, String> {
    let css_color: CssColor = input
        .parse()
        .map_err(|e| format!("Invalid color '{}': {}", input, e))?;
    let [r, g, b, _a] = css_color.to_rgba8();
    Ok(Srgb::new(r, g, b))
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub selection: SelectionConfig,
    pub contrast: ContrastConfig,
    pub overlay: OverlayConfig,
}

/// Hue and pointer position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Hue angle in degrees
    pub hue: f64,
    /// Pointer distance from the left edge (0-1)
    pub left: f64,
    /// Pointer distance from the top edge (0-1)
    pub bottom: f64,
}

/// Contrast settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastConfig {
    /// Reference color (any CSS color format)
    pub reference: String,
    /// Target WCAG contrast ratio
    pub ratio: f64,
    pub mode: DisplayMode,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            reference: "#ffffff".to_string(),
            ratio: DEFAULT_RATIO,
            mode: DisplayMode::None,
        }
    }
}

/// Coordinate space for overlay geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            width: 256.0,
            height: 256.0,
        }
    }
}

/// Sparse overrides; unset fields are left out so lower layers show through.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    pub selection: SelectionOverrides,
    pub contrast: ContrastOverrides,
    pub overlay: OverlayOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SelectionOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContrastOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<DisplayMode>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OverlayOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl PickerConfig {
    /// Parse configuration from TOML text, on top of the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::layered(Some(content), &ConfigOverrides::default())
    }

    /// Merge defaults, an optional TOML file and CLI overrides, in that order.
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let content = path.map(std::fs::read_to_string).transpose()?;
        Self::layered(content.as_deref(), overrides)
    }

    fn layered(toml: Option<&str>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(toml) = toml {
            figment = figment.merge(Toml::string(toml));
        }
        let config = figment.merge(Serialized::defaults(overrides)).extract()?;
        Ok(config)
    }

    /// Reference color parsed from its CSS text.
    pub fn reference_color(&self) -> Result<Srgb<u8>, ConfigError> {
        parse_color(&self.contrast.reference).map_err(ConfigError::InvalidColor)
    }

    /// Build a picker from this configuration.
    ///
    /// Pointer coordinates and the ratio are clamped into range first; the
    /// hue angle and colors are validated as given.
    pub fn into_picker(&self) -> Result<Picker, ConfigError> {
        let reference = self.reference_color()?;

        let mut picker = Picker::new(self.selection.hue)?;
        picker.set_reference_color(reference)?;
        picker.set_contrast_ratio(self.contrast.ratio.clamp(MIN_RATIO, MAX_RATIO))?;
        picker.set_pointer_position(
            self.selection.left.clamp(0.0, 1.0),
            self.selection.bottom.clamp(0.0, 1.0),
        )?;
        picker.set_display_mode(self.contrast.mode);
        Ok(picker)
    }
}
