//! A single game-client TCP connection: push the catalogue, then loop on
//! incoming frames until the client disconnects or goes quiet too long.

use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::time::Duration;
use tokio_util::codec::Framed;
use tracing::{info, warn};

use crate::identity::IdentityStore;
use crate::protocol::card::catalogue::{default_catalogue, encode_catalogue};
use crate::protocol::login::{encode_login_error, encode_login_success};
use crate::protocol::{dispatch::Action, dispatch, FrameCodec};

/// Clients get this long between frames before the connection is dropped
/// for inactivity.
const READ_TIMEOUT: Duration = Duration::from_secs(30);

pub async fn handle_connection(stream: TcpStream, identity_store: IdentityStore, connection_tag: String) {
    let mut framed = Framed::new(stream, FrameCodec);

    let known_player_ids = identity_store.all_player_ids().await.unwrap_or_default();
    let catalogue = default_catalogue(known_player_ids);
    if let Err(e) = framed.send(encode_catalogue(&catalogue)).await {
        warn!(connection_tag, error = %e, "failed to send initial catalogue");
        return;
    }

    let mut logged_in = false;

    loop {
        let next = tokio::time::timeout(READ_TIMEOUT, framed.next()).await;

        let frame = match next {
            Ok(Some(Ok(frame))) => frame,
            Ok(Some(Err(e))) => {
                warn!(connection_tag, error = %e, "malformed frame, closing connection");
                return;
            }
            Ok(None) => {
                info!(connection_tag, "client disconnected");
                return;
            }
            Err(_) => {
                if !logged_in {
                    info!(connection_tag, "still waiting for login after read timeout");
                }
                continue;
            }
        };

        match dispatch(&frame, &connection_tag) {
            Action::None => {}
            Action::GenericReply(reply) => {
                if send(&mut framed, reply, &connection_tag).await.is_err() {
                    return;
                }
            }
            Action::Login { rpc_id, identity } => {
                let reply = match identity_store
                    .get_or_create(identity.source_type, identity.source_id, identity.access_token_hex)
                    .await
                {
                    Ok(player) => {
                        logged_in = true;
                        info!(connection_tag, player_id = player.player_id, "player logged in");
                        encode_login_success(rpc_id, player.player_id, player.user_state, player.access_level)
                    }
                    Err(e) => {
                        warn!(connection_tag, error = %e, "identity store lookup failed");
                        encode_login_error(rpc_id, "internal error resolving identity")
                    }
                };
                if send(&mut framed, reply, &connection_tag).await.is_err() {
                    return;
                }
            }
        }
    }
}

async fn send(
    framed: &mut Framed<TcpStream, FrameCodec>,
    reply: Bytes,
    connection_tag: &str,
) -> Result<(), ()> {
    framed.send(reply).await.map_err(|e| {
        warn!(connection_tag, error = %e, "failed to send reply");
    })
}
