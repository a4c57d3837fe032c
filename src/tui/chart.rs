//! Terminal chart surface.
//!
//! [`TermChart`] is the Ratatui-side implementation of
//! [`ChartSurface`]: it owns the applied canonical series and the fitted
//! visible range, and draws candlesticks into its panel.

use chrono::DateTime;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rust_decimal::Decimal;

use crate::series::{ChartPoint, ChartSurface};

/// Columns reserved for the price axis on the left edge.
const PRICE_AXIS_WIDTH: usize = 12;

/// Chart surface backed by the terminal.
pub struct TermChart {
    series: Vec<ChartPoint>,
    /// Fitted visible time range; `None` until the first fit.
    visible: Option<(i64, i64)>,
}

impl TermChart {
    /// Creates an empty chart surface.
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            visible: None,
        }
    }

    /// Returns the currently applied series.
    pub fn series(&self) -> &[ChartPoint] {
        &self.series
    }

    /// Returns the fitted visible range, if any.
    pub fn visible_range(&self) -> Option<(i64, i64)> {
        self.visible
    }

    /// Points inside the visible range, or the whole series before the
    /// first fit.
    fn visible_points(&self) -> &[ChartPoint] {
        let Some((from, to)) = self.visible else {
            return &self.series;
        };
        let start = self.series.partition_point(|p| p.time < from);
        let end = self.series.partition_point(|p| p.time <= to);
        &self.series[start..end]
    }
}

impl Default for TermChart {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartSurface for TermChart {
    fn set_series(&mut self, series: &[ChartPoint]) {
        self.series = series.to_vec();
    }

    fn fit_content(&mut self) {
        self.visible = match (self.series.first(), self.series.last()) {
            (Some(first), Some(last)) => Some((first.time, last.time)),
            _ => None,
        };
    }

    /// No-op: Ratatui re-derives the panel size from the frame on every
    /// draw, so there is no cached geometry to update.
    fn resize(&mut self, _width: u16, _height: u16) {}
}

/// Renders the candlestick chart panel.
pub fn render(frame: &mut Frame, area: Rect, chart: &TermChart, symbol: &str) {
    let title = format!(" Chart {} 1s ", symbol);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let points = chart.visible_points();
    if points.is_empty() {
        let para = Paragraph::new("No market data").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(para, inner);
        return;
    }

    // Keep only the candles that fit next to the price axis
    let columns = (inner.width as usize).saturating_sub(PRICE_AXIS_WIDTH);
    let shown = &points[points.len().saturating_sub(columns)..];

    let (min_price, max_price) = shown
        .iter()
        .fold((Decimal::MAX, Decimal::ZERO), |(min, max), p| {
            (min.min(p.low), max.max(p.high))
        });

    let price_range = max_price - min_price;
    let height = inner.height.saturating_sub(1) as usize;

    let mut lines: Vec<Line> = Vec::new();

    if price_range > Decimal::ZERO && height > 0 {
        for row in 0..height {
            let price_level = max_price - (price_range * Decimal::from(row) / Decimal::from(height));

            let mut row_chars: Vec<Span> = Vec::new();
            row_chars.push(Span::raw(format!("{:>10.2} │", price_level)));

            for point in shown {
                let is_bullish = point.close >= point.open;
                let color = if is_bullish { Color::Green } else { Color::Red };

                let body_top = point.open.max(point.close);
                let body_bottom = point.open.min(point.close);

                let glyph = if price_level <= point.high && price_level >= body_top {
                    "│" // Upper wick
                } else if price_level < body_top && price_level > body_bottom {
                    "█" // Body
                } else if price_level <= body_bottom && price_level >= point.low {
                    "│" // Lower wick
                } else {
                    " "
                };

                row_chars.push(Span::styled(glyph, Style::default().fg(color)));
            }

            lines.push(Line::from(row_chars));
        }

        // Time axis: span of the displayed candles
        if let (Some(first), Some(last)) = (shown.first(), shown.last()) {
            lines.push(Line::from(Span::styled(
                format!(
                    "{:>10}  {} … {}",
                    "",
                    bucket_time(first.time),
                    bucket_time(last.time)
                ),
                Style::default().fg(Color::DarkGray),
            )));
        }
    } else {
        // Flat series: a single price level fills the range
        lines.push(Line::from(Span::raw(format!("{:>10.2} │", max_price))));
    }

    let para = Paragraph::new(lines);
    frame.render_widget(para, inner);
}

/// Formats a one-second bucket as HH:MM:SS UTC.
fn bucket_time(bucket: i64) -> String {
    DateTime::from_timestamp(bucket, 0)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| bucket.to_string())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn point(time: i64) -> ChartPoint {
        ChartPoint {
            time,
            open: dec!(100),
            high: dec!(110),
            low: dec!(90),
            close: dec!(105),
        }
    }

    #[test]
    fn fit_content_spans_the_applied_series() {
        let mut chart = TermChart::new();
        chart.set_series(&[point(10), point(20), point(30)]);
        chart.fit_content();
        assert_eq!(chart.visible_range(), Some((10, 30)));
    }

    #[test]
    fn visible_points_filters_to_the_fitted_range() {
        let mut chart = TermChart::new();
        chart.set_series(&[point(10), point(20), point(30)]);
        chart.fit_content();
        chart.set_series(&[point(5), point(10), point(20), point(30), point(35)]);

        let times: Vec<i64> = chart.visible_points().iter().map(|p| p.time).collect();
        assert_eq!(times, vec![10, 20, 30]);
    }

    #[test]
    fn visible_points_returns_everything_before_the_first_fit() {
        let mut chart = TermChart::new();
        chart.set_series(&[point(10), point(20)]);
        assert_eq!(chart.visible_points().len(), 2);
    }

    #[test]
    fn resize_leaves_series_and_range_intact() {
        let mut chart = TermChart::new();
        chart.set_series(&[point(10), point(20)]);
        chart.fit_content();

        chart.resize(80, 24);

        assert_eq!(chart.series().len(), 2);
        assert_eq!(chart.visible_range(), Some((10, 20)));
    }
}
