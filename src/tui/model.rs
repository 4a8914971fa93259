//! Application model for the TUI.

use tracing::warn;
use tuirealm::Update;

use crate::config::parse_color;
use crate::picker::Picker;

use super::activities::Msg;

/// Application model: the picker plus UI state.
pub struct Model {
    pub picker: Picker,
    /// Coordinate space for overlay geometry in the report
    pub overlay_size: (f64, f64),

    // UI state
    pub quit: bool,
    pub show_help: bool,
    /// One-line status shown in place of the footer until the next change
    pub message: Option<String>,
}

impl Model {
    pub fn new(picker: Picker, overlay_size: (f64, f64)) -> Self {
        Self {
            picker,
            overlay_size,
            quit: false,
            show_help: false,
            message: None,
        }
    }

    fn report_error(&mut self, what: &str, error: impl std::fmt::Display) {
        warn!(%error, "{what} rejected");
        self.message = Some(format!("{what}: {error}"));
    }
}

impl Update<Msg> for Model {
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;

        match msg {
            Msg::Quit => {
                self.quit = true;
                None
            }
            Msg::ShowHelp => {
                self.show_help = true;
                None
            }

            Msg::HueChanged(angle) => {
                if let Err(e) = self.picker.set_hue(angle) {
                    self.report_error("Hue", e);
                }
                Some(Msg::Sync)
            }
            Msg::PointerChanged(left, bottom) => {
                if let Err(e) = self.picker.set_pointer_position(left, bottom) {
                    self.report_error("Pointer", e);
                }
                Some(Msg::Sync)
            }
            Msg::RatioChanged(ratio) => {
                if let Err(e) = self.picker.set_contrast_ratio(ratio) {
                    self.report_error("Ratio", e);
                }
                Some(Msg::Sync)
            }
            Msg::ReferenceChanged(text) => {
                match parse_color(&text) {
                    Ok(color) => {
                        if let Err(e) = self.picker.set_reference_color(color) {
                            self.report_error("Reference", e);
                        }
                    }
                    Err(e) => self.report_error("Reference", e),
                }
                Some(Msg::Sync)
            }
            Msg::ModeChanged(mode) => {
                self.picker.set_display_mode(mode);
                Some(Msg::Sync)
            }
            Msg::CycleMode => Some(Msg::ModeChanged(self.picker.mode().next())),

            // Components are re-synced by the activity
            Msg::Sync | Msg::FocusNext | Msg::FocusPrev | Msg::SwitchToReport => None,
        }
    }
}

impl Model {
    /// Clear a stale status message once the user changes something.
    pub fn clear_message(&mut self) {
        self.message = None;
    }
}
