//! Hue/shade color picker with WCAG luminance and contrast-ratio overlays.
//!
//! The colorimetric core (`luminance`, `hue`, `tint`, `shade`, `field`,
//! `contrast`) is pure and synchronous. [`picker::Picker`] holds the
//! selection and contrast state and exposes the command handlers that the
//! CLI and the terminal front end drive.

pub mod cli;
pub mod cli_args;
pub mod config;
pub mod contrast;
pub mod error;
pub mod field;
pub mod generated;
pub mod hue;
pub mod logging;
pub mod luminance;
pub mod picker;
pub mod report;
pub mod shade;
pub mod tint;
pub mod tui;

pub use error::ColorError;
pub use picker::Picker;
