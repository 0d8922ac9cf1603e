//! The `/websocket` endpoint: a JSON message protocol with ping/pong,
//! game_action echo, chat broadcast, and an echo fallback for anything
//! else.

use std::sync::atomic::Ordering;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tracing::{debug, error, info};

use crate::http::state::{AppState, BroadcastMessage};

pub async fn websocket_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let client_id = state.next_ws_client_id();
    info!(client_id, "websocket client connected");

    let (mut sender, mut receiver) = socket.split();
    let mut broadcast_rx = state.broadcast_tx.subscribe();

    let welcome = json!({
        "type": "welcome",
        "client_id": client_id,
        "message": "Connected to RCC Server Emulator",
    });
    if sender.send(Message::Text(welcome.to_string().into())).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            incoming = receiver.next() => {
                match incoming {
                    Some(Ok(Message::Text(text))) => {
                        let Ok(data) = serde_json::from_str::<Value>(&text) else {
                            continue;
                        };
                        if let Some(reply) = handle_message(&client_id, &data, &state) {
                            if sender.send(Message::Text(reply.to_string().into())).await.is_err() {
                                break;
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        error!(client_id, error = %e, "websocket error");
                        break;
                    }
                }
            }
            broadcast = broadcast_rx.recv() => {
                match broadcast {
                    Ok(message) if message.exclude_client.as_deref() != Some(client_id.as_str()) => {
                        if sender.send(Message::Text(message.payload.to_string().into())).await.is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => break,
                }
            }
        }
    }

    state.ws_clients.fetch_sub(1, Ordering::SeqCst);
    info!(client_id, "websocket client disconnected");
}

fn handle_message(client_id: &str, data: &Value, state: &AppState) -> Option<Value> {
    let message_type = data.get("type").and_then(Value::as_str).unwrap_or("unknown");

    match message_type {
        "ping" => Some(json!({ "type": "pong", "timestamp": data.get("timestamp") })),
        "game_action" => {
            let action = data.get("action").cloned().unwrap_or(Value::Null);
            debug!(client_id, ?action, "game action received");
            Some(json!({
                "type": "game_response",
                "action": action,
                "success": true,
                "data": { "message": format!("Action {action} processed") },
            }))
        }
        "chat" => {
            let message = data.get("message").and_then(Value::as_str).unwrap_or("");
            let _ = state.broadcast_tx.send(BroadcastMessage {
                payload: json!({ "type": "chat", "client_id": client_id, "message": message }),
                exclude_client: Some(client_id.to_string()),
            });
            None
        }
        other => Some(json!({
            "type": "echo",
            "original": data,
            "message": format!("Echoing message type: {other}"),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    fn test_state() -> AppState {
        let store = crate::identity::IdentityStore::open(":memory:").unwrap();
        AppState::new(store, Arc::new(AtomicUsize::new(0)))
    }

    #[test]
    fn ping_replies_with_pong_and_echoed_timestamp() {
        let state = test_state();
        let reply = handle_message("client_0", &json!({"type": "ping", "timestamp": 42}), &state).unwrap();
        assert_eq!(reply["type"], "pong");
        assert_eq!(reply["timestamp"], 42);
    }

    #[test]
    fn chat_messages_broadcast_and_return_no_direct_reply() {
        let state = test_state();
        let reply = handle_message("client_0", &json!({"type": "chat", "message": "hi"}), &state);
        assert!(reply.is_none());
    }

    #[test]
    fn unknown_message_types_are_echoed() {
        let state = test_state();
        let reply = handle_message("client_0", &json!({"type": "mystery"}), &state).unwrap();
        assert_eq!(reply["type"], "echo");
    }
}
