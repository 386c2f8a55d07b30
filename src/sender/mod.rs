//! One-shot WebSocket sender
//!
//! Opens a connection to the configured endpoint with tokio-tungstenite,
//! writes the payload as a single JSON text frame and closes again.
//! Nothing is read back beyond the listener's close reply.

mod client;
mod config;

pub use client::{SendReport, Sender, send};
pub use config::{DEFAULT_CLOSE_TIMEOUT, DEFAULT_CONNECT_TIMEOUT, DEFAULT_ENDPOINT, SenderConfig};
