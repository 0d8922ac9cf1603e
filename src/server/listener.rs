//! Accept loop for the game TCP port.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::common::error::ConnectionError;
use crate::identity::IdentityStore;
use crate::server::connection::handle_connection;

pub async fn run(
    host: &str,
    port: u16,
    identity_store: IdentityStore,
    connected: Arc<AtomicUsize>,
) -> Result<(), ConnectionError> {
    let listener = TcpListener::bind((host, port))
        .await
        .map_err(|source| ConnectionError::BindFailed {
            host: host.to_string(),
            port,
            source,
        })?;
    info!(host, port, "game TCP listener bound");

    let mut next_connection_id: u64 = 0;

    loop {
        let (stream, addr) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(error = %e, "failed to accept TCP connection");
                continue;
            }
        };

        next_connection_id += 1;
        let connection_tag = format!("tcp-{next_connection_id}");
        info!(connection_tag, %addr, "game client connected");

        if let Err(e) = stream.set_nodelay(true) {
            warn!(connection_tag, error = %e, "failed to set TCP_NODELAY");
        }

        let identity_store = identity_store.clone();
        let connected = connected.clone();
        connected.fetch_add(1, Ordering::SeqCst);
        tokio::spawn(async move {
            handle_connection(stream, identity_store, connection_tag).await;
            connected.fetch_sub(1, Ordering::SeqCst);
        });
    }
}
