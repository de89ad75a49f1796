//! Events WebSocket
//!
//! GET /api/events upgrades to a WebSocket and forwards every bus
//! message as a JSON text frame. Clients that fall behind the channel
//! capacity miss messages; the next sync they do receive carries a
//! higher version, which tells them to re-fetch.

use axum::{
    Router,
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
    routing::get,
};
use tokio::sync::broadcast::error::RecvError;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/events", get(upgrade))
}

async fn upgrade(State(state): State<ServerState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: ServerState) {
    let mut rx = state.message_bus.subscribe();
    tracing::debug!("Events client connected");

    loop {
        tokio::select! {
            msg = rx.recv() => match msg {
                Ok(msg) => {
                    let Ok(text) = serde_json::to_string(&msg) else {
                        continue;
                    };
                    if socket.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Events client lagging, messages dropped");
                }
                Err(RecvError::Closed) => break,
            },
            incoming = socket.recv() => match incoming {
                // Inbound frames (pings etc.) are ignored; the bus is
                // one-directional
                Some(Ok(_)) => {}
                _ => break,
            },
        }
    }

    tracing::debug!("Events client disconnected");
}
