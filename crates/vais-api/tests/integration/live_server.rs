//! The serve loop over a real socket.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use vais_api::Server;

use crate::common::SpaDir;

async fn raw_get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn test_serves_and_shuts_down_gracefully() {
    let spa = SpaDir::new();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop, stopped) = oneshot::channel::<()>();

    let server = Server::new(spa.config());
    let handle = tokio::spawn(server.serve(listener, async {
        let _ = stopped.await;
    }));

    let response = raw_get(addr, "/health").await;
    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains(r#""status":"ok""#));

    let response = raw_get(addr, "/api/ping").await;
    assert!(response.ends_with(r#"{"message":"ping"}"#));

    stop.send(()).unwrap();
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_bind_failure_is_server_error() {
    let spa = SpaDir::new();
    let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let mut config = spa.config();
    config.port = taken.local_addr().unwrap().port();

    let err = Server::new(config)
        .run_until(std::future::ready(()))
        .await
        .unwrap_err();
    assert!(matches!(err, vais_api::Error::Server(_)));
}
