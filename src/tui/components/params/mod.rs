//! Parameter editing components.

mod reference_input;
mod selector;
mod slider;

pub use reference_input::ReferenceInput;
pub use selector::ModeSelector;
pub use slider::{Slider, SliderConfig};
