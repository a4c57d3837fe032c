//! Deserialization tests for the feed payload models.

use rust_decimal_macros::dec;

use tapeview::models::decision::{AgentDecision, PositionSide};
use tapeview::models::tick::MarketTick;

const TICK_JSON: &str = include_str!("fixtures/tick.json");
const TICK_NO_VOLUME_JSON: &str = include_str!("fixtures/tick_no_volume.json");
const DECISION_LONG_JSON: &str = include_str!("fixtures/decision_long.json");
const DECISION_HOLD_JSON: &str = include_str!("fixtures/decision_hold.json");

#[test]
fn test_market_tick_deserializes() {
    let tick: MarketTick = serde_json::from_str(TICK_JSON).expect("Failed to deserialize tick");

    assert_eq!(tick.symbol, "BTC/USDT");
    assert_eq!(tick.timestamp, "2024-01-15T10:30:00.123Z");
    assert_eq!(tick.open, dec!(42100.0));
    assert_eq!(tick.high, dec!(42200.0));
    assert_eq!(tick.low, dec!(42050.0));
    assert_eq!(tick.close, dec!(42152.0));
    assert_eq!(tick.volume, Some(dec!(25.5)));
}

#[test]
fn test_market_tick_volume_is_optional() {
    let tick: MarketTick =
        serde_json::from_str(TICK_NO_VOLUME_JSON).expect("Failed to deserialize tick");

    assert_eq!(tick.symbol, "BTC/USDT");
    assert!(tick.volume.is_none());
}

#[test]
fn test_agent_decision_with_open_position_deserializes() {
    let decision: AgentDecision =
        serde_json::from_str(DECISION_LONG_JSON).expect("Failed to deserialize decision");

    assert_eq!(decision.action, "BUY");
    assert_eq!(decision.symbol.as_deref(), Some("BTC/USDT"));
    assert_eq!(decision.quantity, Some(dec!(0.5)));
    assert_eq!(decision.price, Some(dec!(42152.0)));
    assert_eq!(decision.reason, "Momentum breakout above resistance");
    assert_eq!(decision.balance, dec!(10000.0));
    assert_eq!(decision.equity, dec!(10350.25));
    assert_eq!(decision.realized_pnl, Some(dec!(125.5)));
    assert_eq!(decision.roi_pct, Some(dec!(3.5)));
    assert_eq!(decision.position_side, PositionSide::Long);
    assert_eq!(decision.position_size, Some(dec!(0.5)));
    assert_eq!(decision.open_time.as_deref(), Some("2024-01-15T10:30:00Z"));
    assert_eq!(decision.take_profit, Some(dec!(43000.0)));
    assert_eq!(decision.stop_loss, Some(dec!(41500.0)));
    assert_eq!(decision.notional, Some(dec!(21076.0)));
    assert_eq!(decision.entry_price, Some(dec!(42152.0)));

    assert!(decision.has_open_position());
}

#[test]
fn test_agent_decision_without_trade_deserializes() {
    let decision: AgentDecision =
        serde_json::from_str(DECISION_HOLD_JSON).expect("Failed to deserialize decision");

    assert_eq!(decision.action, "HOLD");
    assert!(decision.symbol.is_none());
    assert!(decision.quantity.is_none());
    assert!(decision.price.is_none());
    assert_eq!(decision.position_side, PositionSide::None);
    assert!(decision.position_size.is_none());

    assert!(!decision.has_open_position());
}

#[test]
fn test_unknown_position_side_degrades_to_none() {
    let decision: AgentDecision = serde_json::from_str(
        r#"{"action":"SELL","balance":100.0,"equity":100.0,"positionSide":"SHORT"}"#,
    )
    .expect("Unknown side must not fail the message");

    assert_eq!(decision.position_side, PositionSide::None);
}

#[test]
fn test_long_side_with_zero_size_is_not_an_open_position() {
    let decision: AgentDecision = serde_json::from_str(
        r#"{"action":"BUY","balance":100.0,"equity":100.0,"positionSide":"LONG","positionSize":0.0}"#,
    )
    .expect("Failed to deserialize decision");

    assert_eq!(decision.position_side, PositionSide::Long);
    assert!(!decision.has_open_position());
}

#[test]
fn test_long_side_without_size_is_not_an_open_position() {
    let decision: AgentDecision = serde_json::from_str(
        r#"{"action":"BUY","balance":100.0,"equity":100.0,"positionSide":"LONG"}"#,
    )
    .expect("Failed to deserialize decision");

    assert!(!decision.has_open_position());
}
