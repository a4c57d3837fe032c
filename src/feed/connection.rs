//! Push-channel connection lifecycle management.
//!
//! [`ConnectionManager`] connects, subscribes to both feed topics, reads
//! frames until the connection drops, then reconnects after a fixed
//! delay, indefinitely. Reconnection uses a fixed delay with unbounded
//! retries; there is no custom backoff.

use std::time::Duration;

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tungstenite::Message as WsMessage;

use super::{connect, dispatch::parse_frame, subscribe};
use crate::models::{TOPIC_DECISION, TOPIC_MARKET};
use crate::tui::Message;

/// Fixed delay between reconnection attempts.
const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Why the reader loop exited.
enum DisconnectReason {
    /// The connection was lost or errored.
    ConnectionError,
    /// The message channel to the main loop was closed (app shutting down).
    Shutdown,
}

/// Manages the push-channel connection lifecycle.
pub struct ConnectionManager {
    url: String,
    tx: mpsc::UnboundedSender<Message>,
}

impl ConnectionManager {
    /// Creates a new connection manager.
    #[must_use]
    pub fn new(url: String, tx: mpsc::UnboundedSender<Message>) -> Self {
        Self { url, tx }
    }

    /// Runs the connection manager loop until the app shuts down.
    ///
    /// Connects, subscribes to the market and decision topics, and
    /// forwards dispatched messages to the main loop. On any transport
    /// error the UI is notified, the fixed delay elapses, and the
    /// connection is reattempted.
    pub async fn run(self) {
        loop {
            info!(url = %self.url, "Connecting to feed");
            let (mut write, read) = match connect(&self.url).await {
                Ok(pair) => pair,
                Err(e) => {
                    error!("Connection failed: {e}");
                    if self.tx.send(Message::ConnectionLost(e.to_string())).is_err() {
                        return;
                    }
                    tokio::time::sleep(RECONNECT_DELAY).await;
                    continue;
                }
            };

            if let Err(e) = subscribe(&mut write, TOPIC_MARKET).await {
                warn!("Market subscribe failed: {e}");
                let _ = self.tx.send(Message::ConnectionLost(e.to_string()));
                tokio::time::sleep(RECONNECT_DELAY).await;
                continue;
            }
            if let Err(e) = subscribe(&mut write, TOPIC_DECISION).await {
                warn!("Decision subscribe failed: {e}");
                let _ = self.tx.send(Message::ConnectionLost(e.to_string()));
                tokio::time::sleep(RECONNECT_DELAY).await;
                continue;
            }

            if self.tx.send(Message::Connected).is_err() {
                return;
            }
            info!("Feed connected and subscribed");

            match self.read_loop(read).await {
                DisconnectReason::ConnectionError => {
                    if self.tx.is_closed() {
                        return;
                    }
                    info!(
                        delay_secs = RECONNECT_DELAY.as_secs(),
                        "Connection lost, reconnecting after delay"
                    );
                    tokio::time::sleep(RECONNECT_DELAY).await;
                }
                DisconnectReason::Shutdown => {
                    info!("Connection manager shutting down");
                    return;
                }
            }
        }
    }

    /// Reads frames from the push channel until disconnection or shutdown.
    ///
    /// Each frame is parsed in isolation; a malformed frame is dropped
    /// without affecting the loop.
    async fn read_loop(&self, mut read: super::WsReader) -> DisconnectReason {
        loop {
            match read.next().await {
                Some(Ok(WsMessage::Text(text))) => {
                    if let Some(message) = parse_frame(&text) {
                        if self.tx.send(message).is_err() {
                            return DisconnectReason::Shutdown;
                        }
                    }
                }
                Some(Ok(_)) => {} // Binary/Ping/Pong/Close frames
                Some(Err(e)) => {
                    warn!("WebSocket error: {e}");
                    let _ = self.tx.send(Message::ConnectionLost(e.to_string()));
                    return DisconnectReason::ConnectionError;
                }
                None => {
                    warn!("WebSocket stream ended");
                    let _ = self
                        .tx
                        .send(Message::ConnectionLost("stream ended".to_string()));
                    return DisconnectReason::ConnectionError;
                }
            }
        }
    }
}
