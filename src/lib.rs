//! Terminal dashboard for a live trading-agent feed.
//!
//! Provides typed models for market ticks and agent decisions, a
//! WebSocket feed client with HTTP snapshot fetch, and a Ratatui
//! dashboard that keeps a candlestick chart in sync with the incoming
//! tick buffer.

pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod series;
pub mod tui;

pub use error::{Result, TapeviewError};
