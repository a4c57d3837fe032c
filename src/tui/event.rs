//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::models::{AgentDecision, MarketTick};
use crate::series::ChartSurface;

use super::app::{App, ConnectionStatus};

/// Events that can occur in the application.
///
/// Purely input-driven: the dashboard redraws after every message, so
/// there is no periodic timer event.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),

    /// Market tick, from the push channel or the snapshot fetch.
    Tick(MarketTick),
    /// Agent decision, from the push channel or the snapshot fetch.
    Decision(AgentDecision),

    /// Push channel connected and subscribed.
    Connected,
    /// Push channel lost; carries the transport error message.
    ConnectionLost(String),

    /// Plain entry for the log panel.
    Log(String),
    /// Error entry for the log panel (rendered with an `ERROR:` prefix).
    LogError(String),

    /// Request to quit the application.
    Quit,
}

/// Actions that require external handling (e.g., issuing HTTP requests).
#[derive(Debug)]
pub enum Action {
    /// Trigger a server-side force update.
    ForceUpdate,
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Updates application state based on a message.
///
/// This is the single mutation entry point: messages are applied in
/// delivery order and a failing handler never corrupts previously
/// applied state.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::Tick(tick) => {
            app.push_tick(tick);
            None
        }
        Message::Decision(decision) => {
            app.set_decision(decision);
            None
        }
        Message::Connected => {
            app.connection_status = ConnectionStatus::Connected;
            app.push_log("Feed connected");
            None
        }
        Message::ConnectionLost(reason) => {
            app.connection_status = ConnectionStatus::Disconnected;
            app.push_error(reason);
            None
        }
        Message::Log(entry) => {
            app.push_log(entry);
            None
        }
        Message::LogError(entry) => {
            app.push_error(entry);
            None
        }
        Message::Quit => {
            app.should_quit = true;
            None
        }
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(w, h) => {
            app.chart.resize(w, h);
            None
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            None
        }
        KeyCode::Char('r') => Some(Action::ForceUpdate),
        _ => None,
    }
}
