//! Trading-agent decision payload model.

use rust_decimal::Decimal;
use serde::Deserialize;

/// A snapshot of the trading agent's last action and account state.
///
/// Replaced wholesale on each decision event; partial updates are never
/// merged.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDecision {
    /// Free-form action label (e.g. "BUY", "HOLD").
    pub action: String,
    #[serde(default)]
    pub symbol: Option<String>,
    /// Absent when the action was not a trade.
    #[serde(default)]
    pub quantity: Option<Decimal>,
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Free-form explanation from the agent.
    #[serde(default)]
    pub reason: String,
    pub balance: Decimal,
    pub equity: Decimal,
    #[serde(default)]
    pub realized_pnl: Option<Decimal>,
    #[serde(default)]
    pub roi_pct: Option<Decimal>,
    #[serde(default)]
    pub position_side: PositionSide,
    #[serde(default)]
    pub position_size: Option<Decimal>,

    // Optional position detail, present only while a position is open.
    #[serde(default)]
    pub open_time: Option<String>,
    #[serde(default)]
    pub take_profit: Option<Decimal>,
    #[serde(default)]
    pub stop_loss: Option<Decimal>,
    #[serde(default)]
    pub notional: Option<Decimal>,
    #[serde(default)]
    pub entry_price: Option<Decimal>,
}

impl AgentDecision {
    /// Returns `true` if the decision reports an open position.
    ///
    /// An open position requires `positionSide == LONG` and a strictly
    /// positive `positionSize`; every other combination renders as "no
    /// open position" regardless of the optional detail fields.
    pub fn has_open_position(&self) -> bool {
        self.position_side == PositionSide::Long
            && self.position_size.is_some_and(|size| size > Decimal::ZERO)
    }
}

/// Side of the agent's position.
///
/// Unknown wire values degrade to [`PositionSide::None`] rather than
/// failing the whole decision message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PositionSide {
    Long,
    #[default]
    None,
}

impl<'de> Deserialize<'de> for PositionSide {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let side = String::deserialize(deserializer)?;
        Ok(match side.as_str() {
            "LONG" => PositionSide::Long,
            _ => PositionSide::None,
        })
    }
}
