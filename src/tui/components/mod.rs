//! Reusable dashboard panels.

pub mod decision_panel;
pub mod log_panel;
pub mod status_bar;
