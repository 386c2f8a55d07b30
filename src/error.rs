//! Sender error types

use std::time::Duration;
use thiserror::Error;

/// Result type for sender operations
pub type SendResult<T> = Result<T, SendError>;

/// Everything that can stop a submission from reaching the listener
#[derive(Debug, Error)]
pub enum SendError {
    /// Endpoint is not a usable `ws://` URI
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// TCP connection could not be established
    #[error("Connection to {addr} failed: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Connect or opening handshake did not finish in time
    #[error("Connection to {addr} timed out after {timeout:?}")]
    Timeout { addr: String, timeout: Duration },

    /// WebSocket opening handshake was rejected
    #[error("Handshake with {endpoint} failed: {source}")]
    Handshake {
        endpoint: String,
        #[source]
        source: tokio_tungstenite::tungstenite::Error,
    },

    /// Writing the message or the close frame failed
    #[error("Transmission to {endpoint} failed: {source}")]
    Transmit {
        endpoint: String,
        #[source]
        source: tokio_tungstenite::tungstenite::Error,
    },

    /// Payload could not be encoded, or a frame could not be decoded back into one
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the code source failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SendError {
    /// Create an invalid endpoint error
    pub fn invalid_endpoint(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// True for failures that happened before the connection was open
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Self::Connect { .. } | Self::Timeout { .. } | Self::Handshake { .. }
        )
    }
}
