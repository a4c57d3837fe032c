//! Async push-channel client for the live dashboard feed.
//!
//! This module is organized by concern:
//! - [`connection`] - Connection lifecycle with fixed-delay reconnection
//! - [`dispatch`] - Mapping (topic, raw payload) to typed events
//! - [`snapshot`] - HTTP snapshot fetch and force-update trigger

pub mod connection;
pub mod dispatch;
pub mod snapshot;

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, info};
use tungstenite::Message as WsMessage;

use crate::Result;

pub use connection::ConnectionManager;
pub use dispatch::dispatch;
pub use snapshot::SnapshotClient;

/// Write half of a feed WebSocket connection.
pub type WsWriter = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, WsMessage>;

/// Read half of a feed WebSocket connection.
pub type WsReader = SplitStream<WebSocketStream<MaybeTlsStream<TcpStream>>>;

/// Establishes a WebSocket connection to the given URL.
///
/// # Errors
///
/// Returns a [`TapeviewError`](crate::TapeviewError) if the connection or
/// TLS handshake fails.
pub async fn connect(url: &str) -> Result<(WsWriter, WsReader)> {
    let (ws_stream, _) = connect_async(url).await?;
    info!("WebSocket handshake completed");

    Ok(ws_stream.split())
}

/// Subscribes to a push-channel topic.
///
/// # Errors
///
/// Returns a [`TapeviewError`](crate::TapeviewError) if sending the
/// subscription frame fails.
pub async fn subscribe(write: &mut WsWriter, topic: &str) -> Result<()> {
    let json = serde_json::to_string(&serde_json::json!({
        "method": "subscribe",
        "topic": topic,
    }))?;
    debug!("Sending subscribe frame: {}", json);
    write.send(WsMessage::Text(json.into())).await?;
    info!(topic, "Subscribed to topic");

    Ok(())
}
