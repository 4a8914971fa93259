//! TUI components using tui-realm.

pub mod field_view;
pub mod help;
pub mod params;
pub mod preview;

pub use field_view::FieldView;
pub use help::{MAIN_FOOTER_ACTIONS, REPORT_FOOTER_ACTIONS, format_footer, render_help};
pub use preview::Preview;
