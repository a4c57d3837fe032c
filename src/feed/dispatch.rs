//! Mapping of inbound push-channel frames to typed events.
//!
//! Each frame is dispatched in isolation: one bad payload is logged and
//! dropped without affecting the subscription loop.

use tracing::warn;

use crate::models::{AgentDecision, MarketTick, TOPIC_DECISION, TOPIC_MARKET};
use crate::tui::Message;

/// Maps a (topic, raw payload) pair to a typed message.
///
/// Returns `None` for unknown topics and for payloads that fail to
/// parse; parse failures are logged but never propagate, so a malformed
/// message cannot break the channel.
pub fn dispatch(topic: &str, payload: serde_json::Value) -> Option<Message> {
    match topic {
        TOPIC_MARKET => match serde_json::from_value::<MarketTick>(payload) {
            Ok(tick) => Some(Message::Tick(tick)),
            Err(e) => {
                warn!(topic, error = %e, "Failed to parse market tick");
                None
            }
        },
        TOPIC_DECISION => match serde_json::from_value::<AgentDecision>(payload) {
            Ok(decision) => Some(Message::Decision(decision)),
            Err(e) => {
                warn!(topic, error = %e, "Failed to parse agent decision");
                None
            }
        },
        _ => {
            warn!(topic, "Unknown topic");
            None
        }
    }
}

/// Parses a raw WebSocket text frame into a typed message.
///
/// Frames are JSON envelopes of the form
/// `{"topic": "...", "payload": {...}}`; anything else is ignored.
pub fn parse_frame(text: &str) -> Option<Message> {
    let mut value: serde_json::Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Malformed feed frame");
            return None;
        }
    };

    let topic = value.get("topic").and_then(|t| t.as_str()).map(String::from)?;
    let payload = value.get_mut("payload").map(serde_json::Value::take)?;

    dispatch(&topic, payload)
}
