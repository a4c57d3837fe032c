//! Terminal User Interface for the trading dashboard.
//!
//! Provides a Ratatui-based dashboard with a live candlestick chart,
//! the agent's latest decision, a scrolling log panel, and a
//! connection-status indicator.

pub mod app;
pub mod chart;
pub mod components;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use chart::TermChart;
pub use event::{Action, Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
