//! HTTP snapshot fetch and force-update trigger.
//!
//! One-shot request/response calls against the feed server. Failures
//! are reported to the log stream with a truncated error message and
//! never retried: the push channel is expected to eventually deliver
//! fresh data.

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::models::{AgentDecision, MarketTick};
use crate::tui::Message;

/// Maximum length of an error message forwarded to the log panel.
const MAX_LOG_MESSAGE_LEN: usize = 120;

/// Client for the snapshot and force-update endpoints.
pub struct SnapshotClient {
    base_url: String,
    http: reqwest::Client,
    tx: mpsc::UnboundedSender<Message>,
}

impl SnapshotClient {
    /// Creates a new snapshot client for the given API base URL.
    #[must_use]
    pub fn new(base_url: String, tx: mpsc::UnboundedSender<Message>) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
            tx,
        }
    }

    /// Fetches the current tick and the last known decision.
    ///
    /// Each result is forwarded as its own message; each failure is
    /// logged independently so a broken endpoint does not mask the
    /// other. If the main loop has already shut down the results are
    /// silently dropped.
    pub async fn fetch_snapshot(&self) {
        match self.get_json::<MarketTick>("/api/market/current").await {
            Ok(tick) => {
                let _ = self.tx.send(Message::Tick(tick));
            }
            Err(e) => {
                warn!("Snapshot tick fetch failed: {e}");
                let _ = self
                    .tx
                    .send(Message::LogError(truncate_message(&e.to_string())));
            }
        }

        match self
            .get_json::<AgentDecision>("/api/market/last-decision")
            .await
        {
            Ok(decision) => {
                let _ = self.tx.send(Message::Decision(decision));
            }
            Err(e) => {
                warn!("Snapshot decision fetch failed: {e}");
                let _ = self
                    .tx
                    .send(Message::LogError(truncate_message(&e.to_string())));
            }
        }
    }

    /// Issues a one-shot force-update command.
    ///
    /// Success and failure are logged only; the resulting fresh tick and
    /// decision arrive asynchronously over the push channel.
    pub async fn force_update(&self) {
        let url = format!("{}/api/market/force-update", self.base_url);
        match self.http.post(&url).send().await {
            Ok(response) => match response.error_for_status() {
                Ok(_) => {
                    info!("Force update requested");
                    let _ = self.tx.send(Message::Log("Force update requested".to_string()));
                }
                Err(e) => {
                    warn!("Force update rejected: {e}");
                    let _ = self
                        .tx
                        .send(Message::LogError(truncate_message(&e.to_string())));
                }
            },
            Err(e) => {
                warn!("Force update request failed: {e}");
                let _ = self
                    .tx
                    .send(Message::LogError(truncate_message(&e.to_string())));
            }
        }
    }

    /// Performs a GET request and deserializes the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> crate::Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

/// Truncates a message to [`MAX_LOG_MESSAGE_LEN`] characters.
fn truncate_message(message: &str) -> String {
    if message.chars().count() <= MAX_LOG_MESSAGE_LEN {
        message.to_string()
    } else {
        let truncated: String = message.chars().take(MAX_LOG_MESSAGE_LEN).collect();
        format!("{truncated}…")
    }
}
