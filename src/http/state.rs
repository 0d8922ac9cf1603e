//! Shared state handed to every axum handler.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;

use crate::identity::IdentityStore;

/// A chat/game-action message fanned out to every connected WebSocket
/// client (optionally excluding its sender).
#[derive(Debug, Clone)]
pub struct BroadcastMessage {
    pub payload: serde_json::Value,
    pub exclude_client: Option<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub identity_store: IdentityStore,
    pub tcp_clients: Arc<AtomicUsize>,
    pub ws_clients: Arc<AtomicUsize>,
    pub broadcast_tx: broadcast::Sender<BroadcastMessage>,
}

impl AppState {
    pub fn new(identity_store: IdentityStore, tcp_clients: Arc<AtomicUsize>) -> Self {
        let (broadcast_tx, _) = broadcast::channel(256);
        AppState {
            identity_store,
            tcp_clients,
            ws_clients: Arc::new(AtomicUsize::new(0)),
            broadcast_tx,
        }
    }

    pub fn next_ws_client_id(&self) -> String {
        let n = self.ws_clients.fetch_add(1, Ordering::SeqCst);
        format!("client_{n}")
    }
}
