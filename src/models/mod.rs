//! Typed models for the two feed topics.
//!
//! This module is organized by payload:
//! - [`tick`] - OHLC(V) market samples
//! - [`decision`] - trading-agent decision snapshots

pub mod decision;
pub mod tick;

pub use decision::{AgentDecision, PositionSide};
pub use tick::MarketTick;

/// Push-channel topic carrying [`MarketTick`] payloads.
pub const TOPIC_MARKET: &str = "/topic/market";

/// Push-channel topic carrying [`AgentDecision`] payloads.
pub const TOPIC_DECISION: &str = "/topic/agent/decision";
