use std::io::Write;

use lumapick::config::{
    ConfigError, ConfigOverrides, ContrastOverrides, PickerConfig, SelectionOverrides,
    parse_color,
};
use lumapick::contrast::DisplayMode;
use palette::Srgb;
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = PickerConfig::default();
    assert_eq!(config.selection.hue, 0.0);
    assert_eq!(config.contrast.reference, "#ffffff");
    assert_eq!(config.contrast.ratio, 4.5);
    assert_eq!(config.contrast.mode, DisplayMode::None);
    assert_eq!(config.overlay.width, 256.0);
}

#[test]
fn test_parse_toml() {
    let toml_str = r##"
[selection]
hue = 210.0
left = 0.25

[contrast]
reference = "#1a1a2e"
ratio = 7.0
mode = "contrast-boundary"
"##;

    let config = PickerConfig::from_toml_str(toml_str).unwrap();
    assert_eq!(config.selection.hue, 210.0);
    assert_eq!(config.selection.left, 0.25);
    // Unset keys keep their defaults
    assert_eq!(config.selection.bottom, 0.0);
    assert_eq!(config.overlay.height, 256.0);
    assert_eq!(config.contrast.reference, "#1a1a2e");
    assert_eq!(config.contrast.mode, DisplayMode::ContrastBoundary);
}

#[test]
fn test_plain_toml_matches_layered_parse() {
    let toml_str = "[overlay]\nwidth = 640.0\n\n[contrast]\nmode = \"legibility\"\n";
    let direct: PickerConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(direct, PickerConfig::from_toml_str(toml_str).unwrap());
    assert_eq!(direct.overlay.width, 640.0);
    assert_eq!(direct.overlay.height, 256.0);
}

#[test]
fn test_bad_toml_value_is_an_extract_error() {
    let err = PickerConfig::from_toml_str("[contrast]\nratio = \"high\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Extract(_)));
}

#[test]
fn test_overrides_win_over_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[selection]\nhue = 120.0\nbottom = 0.4\n").unwrap();

    let overrides = ConfigOverrides {
        selection: SelectionOverrides {
            hue: Some(300.0),
            ..Default::default()
        },
        contrast: ContrastOverrides {
            ratio: Some(3.0),
            ..Default::default()
        },
        ..Default::default()
    };

    let config = PickerConfig::load(Some(file.path()), &overrides).unwrap();
    assert_eq!(config.selection.hue, 300.0);
    assert_eq!(config.selection.bottom, 0.4);
    assert_eq!(config.contrast.ratio, 3.0);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let err = PickerConfig::load(Some(missing.as_path()), &ConfigOverrides::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_parse_color_formats() {
    assert_eq!(parse_color("#ff8000").unwrap(), Srgb::new(255u8, 128, 0));
    assert_eq!(parse_color("rgb(0, 0, 255)").unwrap(), Srgb::new(0u8, 0, 255));
    assert_eq!(parse_color("white").unwrap(), Srgb::new(255u8, 255, 255));
    assert!(parse_color("not-a-color").is_err());
}

#[test]
fn test_into_picker_clamps_caller_inputs() {
    let mut config = PickerConfig::default();
    config.selection.left = 1.7;
    config.selection.bottom = -0.2;
    config.contrast.ratio = 40.0;

    let picker = config.into_picker().unwrap();
    assert_eq!(picker.pointer(), (1.0, 0.0));
    assert_eq!(picker.ratio(), 21.0);
    assert_eq!(picker.preview().hex, "#ffffff");
}

#[test]
fn test_into_picker_rejects_bad_reference() {
    let mut config = PickerConfig::default();
    config.contrast.reference = "nope".to_string();
    assert!(matches!(
        config.into_picker(),
        Err(ConfigError::InvalidColor(_))
    ));
}

#[test]
fn test_into_picker_applies_every_setting() {
    let mut config = PickerConfig::default();
    config.selection.hue = 240.0;
    config.contrast.reference = "black".to_string();
    config.contrast.mode = DisplayMode::Legibility;

    let picker = config.into_picker().unwrap();
    assert_eq!(picker.reference(), Srgb::new(0u8, 0, 0));
    assert_eq!(picker.mode(), DisplayMode::Legibility);
    assert_eq!(picker.preview().hex, "#0000ff");
}
