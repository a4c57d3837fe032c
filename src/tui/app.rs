//! Application state for the TUI.

use std::collections::VecDeque;

use crate::models::{AgentDecision, MarketTick};
use crate::series;

use super::chart::TermChart;

/// Maximum number of entries kept in the log panel.
pub const MAX_LOG_ENTRIES: usize = 100;

/// Maximum number of ticks kept in the buffer (oldest dropped first).
pub const MAX_TICK_BUFFER: usize = 500;

/// Central application state container.
///
/// All state is owned here and mutated only through the designated
/// entry points below; the feed tasks never touch it directly.
pub struct App {
    /// Trading symbol shown in the dashboard.
    pub symbol: String,
    /// Accumulating buffer of market ticks, in arrival order.
    pub ticks: VecDeque<MarketTick>,
    /// Last known agent decision, replaced wholesale per event.
    pub decision: Option<AgentDecision>,
    /// Push-channel connection status.
    pub connection_status: ConnectionStatus,
    /// Log entries, most recent first.
    pub log: VecDeque<LogEntry>,
    /// The chart rendering surface.
    pub chart: TermChart,
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App instance with default state.
    pub fn new(symbol: String) -> Self {
        Self {
            symbol,
            ticks: VecDeque::with_capacity(MAX_TICK_BUFFER),
            decision: None,
            connection_status: ConnectionStatus::Disconnected,
            log: VecDeque::with_capacity(MAX_LOG_ENTRIES),
            chart: TermChart::new(),
            should_quit: false,
        }
    }

    /// Appends a tick to the buffer and resynchronizes the chart.
    pub fn push_tick(&mut self, tick: MarketTick) {
        if self.ticks.len() >= MAX_TICK_BUFFER {
            self.ticks.pop_front();
        }
        self.ticks.push_back(tick);
        self.resync();
    }

    /// Recomputes the canonical series and applies it to the chart.
    ///
    /// Called explicitly after every buffer mutation; there is no hidden
    /// dependency tracking.
    pub fn resync(&mut self) {
        series::synchronize(&self.ticks, &mut self.chart);
    }

    /// Replaces the decision snapshot.
    pub fn set_decision(&mut self, decision: AgentDecision) {
        self.decision = Some(decision);
    }

    /// Adds a log entry, timestamped at formatting time.
    pub fn push_log(&mut self, message: impl Into<String>) {
        if self.log.len() >= MAX_LOG_ENTRIES {
            self.log.pop_back();
        }
        self.log.push_front(LogEntry {
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            message: message.into(),
        });
    }

    /// Adds an `ERROR:`-prefixed log entry.
    pub fn push_error(&mut self, message: impl AsRef<str>) {
        self.push_log(format!("ERROR: {}", message.as_ref()));
    }
}

/// Push-channel connection status.
///
/// Binary by design: transitions are driven solely by the feed's
/// lifecycle messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connected,
}

impl ConnectionStatus {
    /// Returns a display string for the status.
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Disconnected => "Offline",
            ConnectionStatus::Connected => "Online",
        }
    }
}

/// One entry in the log panel.
#[derive(Clone, Debug)]
pub struct LogEntry {
    /// Wall-clock time the entry was pushed (not event time).
    pub timestamp: String,
    /// The log message.
    pub message: String,
}
