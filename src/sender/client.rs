//! Connect, send one text frame, close.

use futures_util::{SinkExt, StreamExt};
use std::io::ErrorKind;
use tokio::net::TcpStream;
use tokio_tungstenite::WebSocketStream;
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use url::Url;

use crate::error::{SendError, SendResult};
use crate::payload::Payload;
use crate::sender::SenderConfig;

/// Outcome of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReport {
    pub endpoint: String,
    pub bytes: usize,
}

/// Delivers a payload to one validated endpoint
#[derive(Debug, Clone)]
pub struct Sender {
    config: SenderConfig,
    addr: String,
}

impl Sender {
    /// Validate the configured endpoint. Only plain `ws://` with a host is accepted.
    pub fn new(config: SenderConfig) -> SendResult<Self> {
        let url = Url::parse(&config.endpoint)
            .map_err(|e| SendError::invalid_endpoint(&config.endpoint, e.to_string()))?;

        match url.scheme() {
            "ws" => {}
            "wss" => {
                return Err(SendError::invalid_endpoint(
                    &config.endpoint,
                    "TLS endpoints are not supported",
                ));
            }
            other => {
                return Err(SendError::invalid_endpoint(
                    &config.endpoint,
                    format!("unsupported scheme '{}'", other),
                ));
            }
        }

        let host = url
            .host_str()
            .ok_or_else(|| SendError::invalid_endpoint(&config.endpoint, "missing host"))?;
        let port = url.port_or_known_default().unwrap_or(80);
        let addr = format!("{}:{}", host, port);

        Ok(Self { config, addr })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// `host:port` the TCP connection goes to
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Connect, send `payload` as one text frame, close.
    ///
    /// The stream is dropped on every return path, so an error midway
    /// still releases the socket.
    pub async fn send(&self, payload: &Payload) -> SendResult<SendReport> {
        let text = payload.to_json()?;
        let timeout = self.config.connect_timeout;

        log::info!("[Sender] Connecting to {}", self.endpoint());
        let mut ws_stream = tokio::time::timeout(timeout, self.open())
            .await
            .map_err(|_| {
                log::error!("[Sender] Connection to {} timed out", self.addr);
                SendError::Timeout {
                    addr: self.addr.clone(),
                    timeout,
                }
            })??;

        let bytes = text.len();
        log::info!("[Sender] Connected, sending {} bytes", bytes);
        log::debug!("[Sender] Payload: {}", preview(&text, 200));

        ws_stream
            .send(Message::Text(text.into()))
            .await
            .map_err(|source| {
                log::error!("[Sender] Send error: {}", source);
                SendError::Transmit {
                    endpoint: self.endpoint().to_string(),
                    source,
                }
            })?;

        self.close(&mut ws_stream).await?;
        log::info!("[Sender] Sent {} bytes to {}", bytes, self.endpoint());

        Ok(SendReport {
            endpoint: self.endpoint().to_string(),
            bytes,
        })
    }

    async fn open(&self) -> SendResult<WebSocketStream<TcpStream>> {
        log::debug!("[Sender] Connecting TCP to {}", self.addr);
        let tcp_stream = TcpStream::connect(&self.addr).await.map_err(|source| {
            log::error!("[Sender] TCP connection failed: {}", source);
            SendError::Connect {
                addr: self.addr.clone(),
                source,
            }
        })?;

        let request = self
            .endpoint()
            .into_client_request()
            .map_err(|source| SendError::Handshake {
                endpoint: self.endpoint().to_string(),
                source,
            })?;

        log::debug!("[Sender] Performing WebSocket handshake");
        let (stream, response) = tokio_tungstenite::client_async(request, tcp_stream)
            .await
            .map_err(|source| {
                log::error!("[Sender] Handshake failed: {}", source);
                SendError::Handshake {
                    endpoint: self.endpoint().to_string(),
                    source,
                }
            })?;
        log::debug!("[Sender] Handshake complete (status: {})", response.status());

        Ok(stream)
    }

    /// Send our close frame, then drain until the listener's reply or the close timeout.
    async fn close(&self, ws_stream: &mut WebSocketStream<TcpStream>) -> SendResult<()> {
        match ws_stream.close(None).await {
            Ok(()) => {}
            // Listener hung up first; the text frame was already flushed.
            Err(WsError::ConnectionClosed | WsError::AlreadyClosed) => {
                log::debug!("[Sender] Listener closed before our close frame");
                return Ok(());
            }
            Err(WsError::Io(e)) if is_hang_up(&e) => {
                log::debug!("[Sender] Listener dropped the socket: {}", e);
                return Ok(());
            }
            Err(source) => {
                return Err(SendError::Transmit {
                    endpoint: self.endpoint().to_string(),
                    source,
                });
            }
        }

        let drain = async {
            while let Some(msg_result) = ws_stream.next().await {
                match msg_result {
                    Ok(Message::Close(frame)) => {
                        log::debug!("[Sender] Received close: {:?}", frame);
                    }
                    Ok(other) => {
                        log::debug!("[Sender] Ignoring {} byte message", other.len());
                    }
                    Err(e) => {
                        log::debug!("[Sender] Connection ended: {}", e);
                        break;
                    }
                }
            }
        };

        if tokio::time::timeout(self.config.close_timeout, drain)
            .await
            .is_err()
        {
            log::warn!("[Sender] No close reply from {}", self.endpoint());
        }
        Ok(())
    }
}

/// Send `payload` to `endpoint` with the default timeouts.
pub async fn send(endpoint: &str, payload: &Payload) -> SendResult<SendReport> {
    Sender::new(SenderConfig::default().with_endpoint(endpoint))?
        .send(payload)
        .await
}

fn is_hang_up(err: &std::io::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::BrokenPipe | ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted
    )
}

fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
