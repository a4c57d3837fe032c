//! Dispatch tests: topic routing and per-message failure isolation.

use rust_decimal_macros::dec;
use serde_json::json;

use tapeview::feed::dispatch::{dispatch, parse_frame};
use tapeview::models::{TOPIC_DECISION, TOPIC_MARKET};
use tapeview::tui::Message;

fn tick_payload() -> serde_json::Value {
    json!({
        "symbol": "BTC/USDT",
        "timestamp": "2024-01-15T10:30:00Z",
        "open": 42100.0,
        "high": 42200.0,
        "low": 42050.0,
        "close": 42152.0,
        "volume": 25.5
    })
}

fn decision_payload() -> serde_json::Value {
    json!({
        "action": "HOLD",
        "reason": "No clear signal",
        "balance": 10000.0,
        "equity": 10000.0,
        "positionSide": "NONE"
    })
}

#[test]
fn market_topic_maps_to_tick_message() {
    let message = dispatch(TOPIC_MARKET, tick_payload());

    match message {
        Some(Message::Tick(tick)) => assert_eq!(tick.symbol, "BTC/USDT"),
        other => panic!("expected tick message, got {other:?}"),
    }
}

#[test]
fn decision_topic_maps_to_decision_message() {
    let message = dispatch(TOPIC_DECISION, decision_payload());

    match message {
        Some(Message::Decision(decision)) => assert_eq!(decision.action, "HOLD"),
        other => panic!("expected decision message, got {other:?}"),
    }
}

#[test]
fn malformed_payload_is_dropped_not_fatal() {
    assert!(dispatch(TOPIC_MARKET, json!({"symbol": 42})).is_none());
    assert!(dispatch(TOPIC_DECISION, json!("not an object")).is_none());
}

#[test]
fn unknown_topic_is_ignored() {
    assert!(dispatch("/topic/unknown", tick_payload()).is_none());
}

#[test]
fn frame_envelope_is_unwrapped() {
    let frame = json!({
        "topic": TOPIC_MARKET,
        "payload": tick_payload()
    })
    .to_string();

    match parse_frame(&frame) {
        Some(Message::Tick(tick)) => assert_eq!(tick.close, dec!(42152.0)),
        other => panic!("expected tick message, got {other:?}"),
    }
}

#[test]
fn frames_without_topic_or_payload_are_ignored() {
    assert!(parse_frame(r#"{"payload": {}}"#).is_none());
    assert!(parse_frame(r#"{"topic": "/topic/market"}"#).is_none());
    assert!(parse_frame("not json at all").is_none());
}
