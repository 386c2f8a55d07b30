#![allow(dead_code)]

use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;

/// Accept one WebSocket client and record every message until it disconnects.
pub async fn recording_listener() -> (String, JoinHandle<Vec<Message>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("listener addr");

    let handle = tokio::spawn(async move {
        let (tcp, _) = listener.accept().await.expect("accept");
        let mut ws = tokio_tungstenite::accept_async(tcp)
            .await
            .expect("server handshake");
        let mut frames = Vec::new();
        while let Some(msg) = ws.next().await {
            match msg {
                Ok(msg) => frames.push(msg),
                Err(_) => break,
            }
        }
        frames
    });

    (format!("ws://{}", addr), handle)
}

/// Accept one WebSocket client, record its first message, then drop the socket
/// without answering the close handshake.
pub async fn hang_up_listener() -> (String, JoinHandle<Vec<Message>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("listener addr");

    let handle = tokio::spawn(async move {
        let (tcp, _) = listener.accept().await.expect("accept");
        let mut ws = tokio_tungstenite::accept_async(tcp)
            .await
            .expect("server handshake");
        let mut frames = Vec::new();
        if let Some(Ok(msg)) = ws.next().await {
            frames.push(msg);
        }
        drop(ws);
        frames
    });

    (format!("ws://{}", addr), handle)
}

/// Accepts TCP but answers the upgrade request with a plain 400.
pub async fn rejecting_listener() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("listener addr");

    tokio::spawn(async move {
        if let Ok((mut tcp, _)) = listener.accept().await {
            let _ = tcp
                .write_all(b"HTTP/1.1 400 Bad Request\r\ncontent-length: 0\r\n\r\n")
                .await;
            let _ = tcp.shutdown().await;
        }
    });

    format!("ws://{}", addr)
}

/// Accepts TCP and then never speaks.
pub async fn silent_listener() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("listener addr");

    tokio::spawn(async move {
        if let Ok((tcp, _)) = listener.accept().await {
            tokio::time::sleep(std::time::Duration::from_secs(30)).await;
            drop(tcp);
        }
    });

    format!("ws://{}", addr)
}

/// An endpoint on a port nothing listens on.
pub fn closed_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind free port");
    let port = listener.local_addr().expect("free port addr").port();
    drop(listener);
    format!("ws://127.0.0.1:{}", port)
}

pub fn text_frames(frames: &[Message]) -> Vec<String> {
    frames
        .iter()
        .filter_map(|m| match m {
            Message::Text(text) => Some(text.as_str().to_string()),
            _ => None,
        })
        .collect()
}
