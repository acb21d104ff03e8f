//! Common test utilities for HTTP gateway tests
//!
//! Provides a mock photo API backed by wiremock and sample payloads in the
//! upstream wire format.

use serde_json::{json, Value};
use wiremock::MockServer;

use photo_gallery::infrastructure::driven_adapters::photo_gateway::HttpPhotoGateway;

/// Test context holding the mock API and a gateway pointed at it
pub struct TestApi {
    pub server: MockServer,
    pub gateway: HttpPhotoGateway,
}

impl TestApi {
    /// Start a mock API and build a gateway for its root URL
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let gateway = HttpPhotoGateway::new(&server.uri()).expect("mock server URI is valid");

        Self { server, gateway }
    }

    /// Start a mock API and build a gateway whose base URL carries a path prefix
    pub async fn with_prefix(prefix: &str) -> Self {
        let server = MockServer::start().await;
        let gateway = HttpPhotoGateway::new(&format!("{}{}", server.uri(), prefix))
            .expect("mock server URI is valid");

        Self { server, gateway }
    }
}

/// A photo in the upstream JSON shape
pub fn photo_json(id: u64, album_id: u64) -> Value {
    json!({
        "id": id,
        "albumId": album_id,
        "title": format!("photo {id}"),
        "url": format!("https://via.placeholder.com/600/{id:06x}"),
        "thumbnailUrl": format!("https://via.placeholder.com/150/{id:06x}"),
    })
}

/// A list of photos with sequential IDs starting at 1
pub fn photos_json(count: u64, album_id: u64) -> Value {
    Value::Array((1..=count).map(|id| photo_json(id, album_id)).collect())
}

/// Base URL of a local port nothing listens on
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("ephemeral port address");
    drop(listener);

    format!("http://{addr}")
}

/// Base URL of a one-shot server answering 500 with a truncated body
pub async fn truncated_error_url() -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("ephemeral port address");

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\npartial")
                .await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{addr}")
}
