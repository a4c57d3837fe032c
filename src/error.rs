//! Crate-level error types.
//!
//! [`TapeviewError`] unifies every error source (configuration, WebSocket,
//! HTTP, JSON, terminal IO) behind a single enum so callers can match on
//! the variant they care about while still using the `?` operator for
//! easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TapeviewError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum TapeviewError {
    /// Configuration could not be loaded from the environment.
    #[error("configuration error: {0}")]
    Config(String),

    /// A WebSocket operation (connect, send, receive) failed.
    #[error("websocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),

    /// An HTTP request (snapshot fetch, force update) failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal or file IO failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Stdout is not an interactive terminal.
    #[error("the dashboard requires an interactive terminal (TTY)")]
    NotATty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_via_from() {
        let err: TapeviewError = std::io::Error::other("raw mode unavailable").into();
        assert!(err.to_string().contains("raw mode unavailable"));
    }

    #[test]
    fn tty_error_names_the_requirement() {
        assert!(TapeviewError::NotATty.to_string().contains("TTY"));
    }
}
