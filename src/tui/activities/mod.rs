//! Activity modules for the TUI.

pub mod main;
pub mod report;

pub use main::MainActivity;
pub use main::Msg;
pub use report::ReportActivity;
