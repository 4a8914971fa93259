//! CLI argument parsing and conversion into configuration overrides.

pub use crate::cli_args::{Cli, ModeArg, OutputFormat};

use crate::config::{ConfigOverrides, ContrastOverrides, OverlayOverrides, SelectionOverrides};
use crate::contrast::DisplayMode;

impl From<ModeArg> for DisplayMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::None => DisplayMode::None,
            ModeArg::Legibility => DisplayMode::Legibility,
            ModeArg::ContrastBoundary => DisplayMode::ContrastBoundary,
        }
    }
}

impl Cli {
    /// Convert flat CLI args to nested overrides for Figment merging.
    ///
    /// Only flags explicitly set on the command line end up in the
    /// serialized overrides, so values from the TOML file survive.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            selection: SelectionOverrides {
                hue: self.hue,
                left: self.left,
                bottom: self.bottom,
            },
            contrast: ContrastOverrides {
                reference: self.reference.clone(),
                ratio: self.ratio,
                mode: self.mode.map(Into::into),
            },
            overlay: OverlayOverrides {
                width: self.width,
                height: self.height,
            },
        }
    }
}
