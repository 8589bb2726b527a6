//! Integration tests for the observer WebSocket against a live server.

mod helpers;

use std::net::SocketAddr;
use std::time::Duration;

use futures::StreamExt;
use serde_json::{Value, json};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use metro_api::{AppState, run_server};
use metro_core::types::Identity;
use metro_reservation::AdminCredential;

use helpers::{ADMIN_KEY, test_config};

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

struct LiveServer {
    addr: SocketAddr,
    state: AppState,
    shutdown: Option<oneshot::Sender<()>>,
    task: tokio::task::JoinHandle<()>,
}

impl LiveServer {
    async fn start() -> Self {
        let state = AppState::from_config(test_config());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let server_state = state.clone();
        let task = tokio::spawn(async move {
            run_server(server_state, listener, async move {
                let _ = rx.await;
            })
            .await
            .unwrap();
        });

        Self {
            addr,
            state,
            shutdown: Some(tx),
            task,
        }
    }

    async fn connect(&self) -> Client {
        let (client, _) = connect_async(format!("ws://{}/ws", self.addr))
            .await
            .expect("WebSocket handshake");
        client
    }

    async fn wait_for_observers(&self, expected: usize) {
        for _ in 0..100 {
            if self.state.realtime.observers.count() == expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!(
            "expected {expected} observers, found {}",
            self.state.realtime.observers.count()
        );
    }
}

/// Next JSON text frame, skipping control frames.
async fn next_json(client: &mut Client) -> Value {
    loop {
        let frame = tokio::time::timeout(Duration::from_secs(5), client.next())
            .await
            .expect("timed out waiting for a frame")
            .expect("stream ended")
            .expect("frame error");

        if let Message::Text(text) = frame {
            return serde_json::from_str(text.as_str()).expect("valid JSON");
        }
    }
}

#[tokio::test]
async fn test_observer_receives_snapshot_then_events() {
    let server = LiveServer::start().await;
    server
        .state
        .reservations
        .claim("Nation", &Identity::new("10.0.0.9"))
        .await
        .unwrap();

    let mut client = server.connect().await;

    let snapshot = next_json(&mut client).await;
    assert_eq!(snapshot["type"], "snapshot");
    assert_eq!(
        snapshot["stations"],
        json!([
            { "name": "Bastille", "reserved": false },
            { "name": "Nation", "reserved": true },
            { "name": "Oberkampf", "reserved": false },
        ])
    );

    let reservations = &server.state.reservations;
    reservations
        .claim("Bastille", &Identity::new("10.0.0.1"))
        .await
        .unwrap();
    reservations
        .release("Nation", &AdminCredential::new(ADMIN_KEY))
        .await
        .unwrap();
    reservations
        .reset_all(&AdminCredential::new(ADMIN_KEY))
        .await
        .unwrap();

    assert_eq!(
        next_json(&mut client).await,
        json!({ "type": "stationReserved", "station": "Bastille" })
    );
    assert_eq!(
        next_json(&mut client).await,
        json!({ "type": "stationReleased", "station": "Nation" })
    );
    assert_eq!(
        next_json(&mut client).await,
        json!({ "type": "allStationsReleased" })
    );
}

#[tokio::test]
async fn test_failed_operations_are_not_broadcast() {
    let server = LiveServer::start().await;
    let mut client = server.connect().await;
    assert_eq!(next_json(&mut client).await["type"], "snapshot");

    let reservations = &server.state.reservations;
    assert!(
        reservations
            .claim("Atlantis", &Identity::new("10.0.0.1"))
            .await
            .is_err()
    );
    assert!(
        reservations
            .reset_all(&AdminCredential::new("guess"))
            .await
            .is_err()
    );
    reservations
        .claim("Oberkampf", &Identity::new("10.0.0.2"))
        .await
        .unwrap();

    assert_eq!(
        next_json(&mut client).await,
        json!({ "type": "stationReserved", "station": "Oberkampf" })
    );
}

#[tokio::test]
async fn test_every_observer_sees_http_reservation() {
    let server = LiveServer::start().await;
    let mut first = server.connect().await;
    let mut second = server.connect().await;
    next_json(&mut first).await;
    next_json(&mut second).await;

    let response = raw_post(server.addr, "/api/reserve", r#"{"station":"Bastille"}"#).await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");

    let expected = json!({ "type": "stationReserved", "station": "Bastille" });
    assert_eq!(next_json(&mut first).await, expected);
    assert_eq!(next_json(&mut second).await, expected);
}

#[tokio::test]
async fn test_disconnect_unregisters_observer() {
    let server = LiveServer::start().await;
    let mut client = server.connect().await;
    next_json(&mut client).await;
    server.wait_for_observers(1).await;

    client.close(None).await.unwrap();
    drop(client);

    server.wait_for_observers(0).await;
}

#[tokio::test]
async fn test_shutdown_closes_observers() {
    let mut server = LiveServer::start().await;
    let mut client = server.connect().await;
    next_json(&mut client).await;

    server.shutdown.take().unwrap().send(()).unwrap();

    let closed = tokio::time::timeout(Duration::from_secs(5), async {
        while let Some(frame) = client.next().await {
            match frame {
                Ok(Message::Close(_)) | Err(_) => break,
                Ok(_) => {}
            }
        }
    })
    .await;
    assert!(closed.is_ok(), "observer was not closed on shutdown");

    tokio::time::timeout(Duration::from_secs(5), server.task)
        .await
        .expect("server did not stop")
        .unwrap();
}

/// Minimal HTTP/1.1 POST over a raw socket; returns the raw response.
async fn raw_post(addr: SocketAddr, path: &str, body: &str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!(
        "POST {path} HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}
