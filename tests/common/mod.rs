#![allow(dead_code)]

use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves a single HTTP response on a local port, after `delay`, and returns its URL
pub async fn serve_once_after(
    delay: Duration,
    status_line: &'static str,
    body: &'static str,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).await;

        tokio::time::sleep(delay).await;

        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{}/json/Agend.json", address)
}

pub async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    serve_once_after(Duration::ZERO, status_line, body).await
}
