//! Market tick payload model.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One OHLC(V) sample for a trading symbol.
///
/// The timestamp is carried as the source's ISO-like string and only
/// parsed when the tick is mapped onto the chart; a tick with an
/// unparseable timestamp stays in the buffer but never reaches the
/// rendered series.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketTick {
    pub symbol: String,
    pub timestamp: String,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    #[serde(default)]
    pub volume: Option<Decimal>,
}
