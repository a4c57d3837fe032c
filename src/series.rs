//! Live time-series ingestion and chart synchronization.
//!
//! The synchronizer turns a growing buffer of [`MarketTick`] into the
//! canonical series the chart renders: deduplicated by one-second time
//! bucket (last tick in buffer order wins) and sorted ascending. It is
//! stateless per invocation and always recomputes from the full buffer.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::MarketTick;

/// Series length at or below which the visible range is refitted to the
/// full series. Beyond this the user's zoom/pan is left alone.
pub const AUTO_FIT_MAX_POINTS: usize = 20;

/// One render-ready chart point, keyed by its one-second time bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPoint {
    /// Unix timestamp truncated to seconds.
    pub time: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}

/// The rendering surface consumed by the synchronizer.
///
/// Implementations accept a full replace of their data series, a command
/// to fit the visible range to the data, and a resize command.
pub trait ChartSurface {
    /// Replaces the entire data series (never an incremental patch).
    fn set_series(&mut self, series: &[ChartPoint]);

    /// Fits the visible time range to the current series.
    fn fit_content(&mut self);

    /// Informs the surface of new dimensions. Surfaces that derive their
    /// geometry at draw time may ignore this.
    fn resize(&mut self, width: u16, height: u16);
}

/// Parses an ISO-like timestamp into its one-second unix bucket.
///
/// Accepts RFC 3339 (`2024-01-01T00:00:00Z`, offsets, fractional
/// seconds) and the same shape without a timezone suffix, which is
/// treated as UTC. Returns `None` for anything else.
pub fn time_bucket(timestamp: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.timestamp());
    }
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().timestamp())
}

/// Computes the canonical series for a tick buffer.
///
/// Ticks with unparseable timestamps are discarded. When several ticks
/// map to the same bucket the one appearing last in buffer order wins,
/// so a live update overwrites an earlier provisional point for the same
/// second. The result is strictly ascending by bucket.
pub fn canonical_series<'a, I>(buffer: I) -> Vec<ChartPoint>
where
    I: IntoIterator<Item = &'a MarketTick>,
{
    let mut by_bucket: HashMap<i64, ChartPoint> = HashMap::new();

    for tick in buffer {
        let Some(time) = time_bucket(&tick.timestamp) else {
            continue;
        };
        by_bucket.insert(
            time,
            ChartPoint {
                time,
                open: tick.open,
                high: tick.high,
                low: tick.low,
                close: tick.close,
            },
        );
    }

    let mut series: Vec<ChartPoint> = by_bucket.into_values().collect();
    series.sort_by_key(|point| point.time);
    series
}

/// Recomputes the canonical series and applies it to the surface.
///
/// An empty result leaves the surface untouched so the previous rendered
/// state is preserved. Otherwise the surface receives a full replace,
/// and when the series has at most [`AUTO_FIT_MAX_POINTS`] points the
/// visible range is refitted to it.
pub fn synchronize<'a, I, S>(buffer: I, surface: &mut S)
where
    I: IntoIterator<Item = &'a MarketTick>,
    S: ChartSurface,
{
    let series = canonical_series(buffer);
    if series.is_empty() {
        return;
    }

    surface.set_series(&series);
    if series.len() <= AUTO_FIT_MAX_POINTS {
        surface.fit_content();
    }
}
