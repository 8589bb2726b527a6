//! WebSocket upgrade handler for station observers.
//!
//! Each observer receives a full snapshot on connect, then every committed
//! event in order. An observer that falls behind the broadcast buffer gets a
//! fresh snapshot instead of the events it missed. Inbound frames are
//! ignored apart from close.

use std::net::SocketAddr;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{ConnectInfo, State, WebSocketUpgrade};
use axum::http::{Extensions, HeaderMap};
use axum::response::Response;
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use tracing::{debug, warn};

use metro_realtime::OutboundMessage;
use metro_realtime::connection::subscription::Delivery;

use crate::state::AppState;

type SocketSink = SplitSink<WebSocket, Message>;

/// GET /ws
pub async fn ws_upgrade(
    State(state): State<AppState>,
    headers: HeaderMap,
    extensions: Extensions,
    ws: WebSocketUpgrade,
) -> Response {
    let peer = extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let peer = state
        .identity_resolver
        .resolve(&headers, peer)
        .map(|identity| identity.to_string());

    ws.on_upgrade(move |socket| handle_ws_connection(state, peer, socket))
}

/// Handles an established observer connection.
async fn handle_ws_connection(state: AppState, peer: Option<String>, socket: WebSocket) {
    let (handle, mut subscription) = state.realtime.observers.register(peer);
    let observer_id = handle.id;
    let (mut ws_tx, mut ws_rx) = socket.split();

    // Subscribed above, so nothing committed after this snapshot is lost.
    if send_snapshot(&state, &mut ws_tx).await.is_err() {
        state.realtime.observers.unregister(&observer_id);
        return;
    }

    let outbound_state = state.clone();
    let mut shutdown = state.realtime.shutdown_receiver();
    let mut outbound_task = tokio::spawn(async move {
        let mut ping = tokio::time::interval(outbound_state.realtime.ping_interval());
        ping.tick().await;

        loop {
            tokio::select! {
                delivery = subscription.next() => {
                    let sent = match delivery {
                        Some(Delivery::Message(message)) => {
                            ws_tx.send(Message::Text(message.to_json().into())).await
                        }
                        Some(Delivery::Lagged { .. }) => {
                            outbound_state.realtime.metrics.resync_sent();
                            send_snapshot(&outbound_state, &mut ws_tx).await
                        }
                        None => break,
                    };
                    if sent.is_err() {
                        break;
                    }
                }
                _ = ping.tick() => {
                    if ws_tx.send(Message::Ping(Default::default())).await.is_err() {
                        break;
                    }
                }
                _ = shutdown.recv() => {
                    let _ = ws_tx.send(Message::Close(None)).await;
                    break;
                }
            }
        }
    });

    let mut inbound_task = tokio::spawn(async move {
        while let Some(result) = ws_rx.next().await {
            match result {
                Ok(Message::Close(_)) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!(observer = %observer_id, error = %e, "WebSocket error");
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut outbound_task => inbound_task.abort(),
        _ = &mut inbound_task => outbound_task.abort(),
    }

    state.realtime.observers.unregister(&observer_id);
    debug!(observer = %observer_id, "WebSocket tasks finished");
}

/// Sends the full station status.
async fn send_snapshot(state: &AppState, ws_tx: &mut SocketSink) -> Result<(), axum::Error> {
    let message = OutboundMessage::Snapshot {
        stations: state.reservations.status().await,
    };
    ws_tx.send(Message::Text(message.to_json().into())).await
}
