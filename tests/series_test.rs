//! Synchronizer property tests: canonical ordering, dedup, and the
//! auto-fit policy, observed through a recording chart surface.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use tapeview::models::MarketTick;
use tapeview::series::{
    AUTO_FIT_MAX_POINTS, ChartPoint, ChartSurface, canonical_series, synchronize, time_bucket,
};

/// Test double that records every command it receives.
#[derive(Default)]
struct RecordingSurface {
    series: Vec<ChartPoint>,
    set_calls: usize,
    fit_calls: usize,
    size: (u16, u16),
}

impl ChartSurface for RecordingSurface {
    fn set_series(&mut self, series: &[ChartPoint]) {
        self.series = series.to_vec();
        self.set_calls += 1;
    }

    fn fit_content(&mut self) {
        self.fit_calls += 1;
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
    }
}

fn tick(timestamp: &str, close: Decimal) -> MarketTick {
    MarketTick {
        symbol: "BTC/USDT".to_string(),
        timestamp: timestamp.to_string(),
        open: close - dec!(1),
        high: close + dec!(2),
        low: close - dec!(2),
        close,
        volume: Some(dec!(1.5)),
    }
}

#[test]
fn canonical_series_is_strictly_ascending_with_unique_buckets() {
    let buffer = vec![
        tick("2024-01-01T00:00:05Z", dec!(103)),
        tick("2024-01-01T00:00:01Z", dec!(100)),
        tick("2024-01-01T00:00:03Z", dec!(102)),
        tick("2024-01-01T00:00:01Z", dec!(101)),
        tick("not-a-timestamp", dec!(999)),
    ];

    let series = canonical_series(&buffer);

    assert_eq!(series.len(), 3);
    for pair in series.windows(2) {
        assert!(pair[0].time < pair[1].time);
    }
}

#[test]
fn same_second_ticks_collapse_to_the_later_one() {
    // Both timestamps fall into the same one-second bucket.
    let buffer = vec![
        tick("2024-01-01T00:00:00Z", dec!(100)),
        tick("2024-01-01T00:00:00.500Z", dec!(200)),
    ];

    let series = canonical_series(&buffer);

    assert_eq!(series.len(), 1);
    assert_eq!(series[0].close, dec!(200));
}

#[test]
fn identical_timestamps_keep_the_last_in_buffer_order() {
    let buffer = vec![
        tick("2024-01-01T12:00:00Z", dec!(50)),
        tick("2024-01-01T12:00:00Z", dec!(75)),
    ];

    let series = canonical_series(&buffer);

    assert_eq!(series.len(), 1);
    assert_eq!(series[0].close, dec!(75));
}

#[test]
fn unparseable_buffer_leaves_surface_untouched() {
    let mut surface = RecordingSurface::default();

    // Seed the surface with a previous render
    synchronize(&[tick("2024-01-01T00:00:00Z", dec!(100))], &mut surface);
    assert_eq!(surface.set_calls, 1);
    let previous = surface.series.clone();

    let garbage = vec![tick("yesterday", dec!(1)), tick("", dec!(2))];
    synchronize(&garbage, &mut surface);

    assert_eq!(surface.set_calls, 1, "empty series must not replace the render");
    assert_eq!(surface.series, previous);
}

#[test]
fn auto_fit_issued_at_threshold() {
    let buffer: Vec<MarketTick> = (0..AUTO_FIT_MAX_POINTS)
        .map(|i| tick(&format!("2024-01-01T00:00:{:02}Z", i), dec!(100)))
        .collect();
    assert_eq!(buffer.len(), 20);

    let mut surface = RecordingSurface::default();
    synchronize(&buffer, &mut surface);

    assert_eq!(surface.series.len(), 20);
    assert_eq!(surface.fit_calls, 1);
}

#[test]
fn auto_fit_suppressed_beyond_threshold() {
    let buffer: Vec<MarketTick> = (0..AUTO_FIT_MAX_POINTS + 1)
        .map(|i| tick(&format!("2024-01-01T00:00:{:02}Z", i), dec!(100)))
        .collect();
    assert_eq!(buffer.len(), 21);

    let mut surface = RecordingSurface::default();
    synchronize(&buffer, &mut surface);

    assert_eq!(surface.series.len(), 21);
    assert_eq!(surface.fit_calls, 0, "user zoom must be left alone");
}

#[test]
fn full_replace_on_every_synchronize() {
    let mut surface = RecordingSurface::default();

    synchronize(&[tick("2024-01-01T00:00:00Z", dec!(100))], &mut surface);
    synchronize(
        &[
            tick("2024-01-01T00:00:00Z", dec!(100)),
            tick("2024-01-01T00:00:01Z", dec!(101)),
        ],
        &mut surface,
    );

    assert_eq!(surface.set_calls, 2);
    assert_eq!(surface.series.len(), 2);
}

#[test]
fn resize_is_forwarded_to_the_surface() {
    let mut surface = RecordingSurface::default();

    surface.resize(120, 40);

    assert_eq!(surface.size, (120, 40));
}

#[test]
fn time_bucket_parses_rfc3339_variants() {
    assert_eq!(time_bucket("2024-01-01T00:00:00Z"), Some(1704067200));
    assert_eq!(time_bucket("2024-01-01T00:00:00.999Z"), Some(1704067200));
    assert_eq!(time_bucket("2024-01-01T01:00:00+01:00"), Some(1704067200));
    // No timezone suffix: treated as UTC
    assert_eq!(time_bucket("2024-01-01T00:00:00"), Some(1704067200));
    assert_eq!(time_bucket("2024-01-01T00:00:00.500"), Some(1704067200));
}

#[test]
fn time_bucket_rejects_garbage() {
    assert_eq!(time_bucket(""), None);
    assert_eq!(time_bucket("not-a-timestamp"), None);
    assert_eq!(time_bucket("2024-13-99T00:00:00Z"), None);
}
