//! ws-submit
//!
//! Sends one `{"url", "code"}` submission to a local WebSocket listener and exits.

pub mod error;
pub mod payload;
pub mod sender;

pub use error::{SendError, SendResult};
pub use payload::Payload;
pub use sender::{SendReport, Sender, SenderConfig, send};
