//! CLI argument definitions (build.rs compatible).
//!
//! This module contains only struct/enum definitions with no dependencies on
//! other crate modules, allowing it to be included from build.rs for man page
//! generation.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

/// Overlay drawn on the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeArg {
    /// No overlay
    #[default]
    None,
    /// Curve where black and white text are about equally legible
    Legibility,
    /// Region that fails the contrast ratio against the reference
    ContrastBoundary,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML format (default)
    #[default]
    Yaml,
    /// JSON format
    Json,
}

/// Pick a tint or shade of a hue and check its contrast against a reference color.
#[derive(Parser, Debug, Serialize)]
#[command(name = "lumapick")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Hue angle in degrees (wraps around 360)
    #[arg(long, value_name = "DEGREES", allow_negative_numbers = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<f64>,

    /// Pointer distance from the left edge of the field (0-1, clamped)
    #[arg(long, value_name = "FRACTION")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,

    /// Pointer distance from the top edge of the field (0-1, clamped); 0 is the full tint, 1 is black
    #[arg(long, value_name = "FRACTION")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,

    /// Reference color for contrast checks in any CSS format (hex, rgb(), hsl(), named)
    #[arg(
        short,
        long,
        value_parser = |s: &str| s.parse::<csscolorparser::Color>().map(|_| s.to_string()).map_err(|e| e.to_string())
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Target WCAG contrast ratio (1-21, clamped)
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,

    /// Overlay to compute: none, legibility or contrast-boundary
    #[arg(long, value_enum)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ModeArg>,

    /// Width of the overlay coordinate space
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Height of the overlay coordinate space
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Output format: yaml or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    #[serde(skip)]
    pub format: OutputFormat,

    /// Launch interactive TUI
    #[arg(short, long)]
    #[serde(skip)]
    pub interactive: bool,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE")]
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path (default: lumapick.log)
    #[arg(long, value_name = "FILE")]
    #[serde(skip)]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    #[serde(skip)]
    pub log_level: String,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    #[serde(skip)]
    pub completions: Option<clap_complete::Shell>,
}
