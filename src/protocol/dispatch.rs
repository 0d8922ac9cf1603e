//! Top-level message dispatch: resolves the header, then routes to the
//! login handler, the fire-and-forget game service, or the generic
//! success-with-no-payload handler everything else gets.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::debug;

use crate::protocol::login::LoginIdentity;
use crate::protocol::service::{self, SERVICE_CARDS, SERVICE_GAME, SERVICE_LOGIN};

/// What the connection loop should do after dispatching one frame.
pub enum Action {
    /// Frame too short to carry a header, or a service with nothing to say
    /// back (`ServiceGame`'s Subscribe and friends, or an inbound `ServiceCards`
    /// frame — the server is the sole producer of those).
    None,
    /// A login request was recognized; the caller resolves the identity
    /// against the store and encodes the reply itself (the store lookup is
    /// async, dispatch is not).
    Login { rpc_id: u16, identity: LoginIdentity },
    /// Any other known or unknown service: acknowledge with RPCID + status.
    GenericReply(Bytes),
}

/// Dispatch one frame payload (as handed back by [`crate::protocol::frame::FrameCodec`]).
pub fn dispatch(frame: &[u8], connection_tag: &str) -> Action {
    let Some((service_id, offset)) = service::resolve_header(frame) else {
        return Action::None;
    };
    let message = &frame[offset..];

    // ServiceID already consumed by resolve_header. What's left is
    // FunctionID (u8) + RPCID (u16 LE) before the handler-specific payload.
    if message.len() < 4 {
        return Action::None;
    }
    let function_id = message[1];
    let rpc_id = u16::from_le_bytes([message[2], message[3]]);
    let payload = &message[4..];

    if service_id == SERVICE_GAME {
        // Subscribe (0) and every other function id are fire-and-forget.
        if function_id != 0 {
            debug!(function_id, "unhandled ServiceGame function, no reply sent");
        }
        return Action::None;
    }

    if service_id == SERVICE_LOGIN {
        let identity = crate::protocol::login::parse_login_request(payload, connection_tag);
        return Action::Login { rpc_id, identity };
    }

    if service_id == SERVICE_CARDS {
        // The server is the sole producer of Cards frames; inbound ones are ignored.
        return Action::None;
    }

    Action::GenericReply(encode_generic_reply(rpc_id))
}

/// RPCID (2 bytes LE) + status (0 = success). No ServiceID, no payload —
/// the bland acknowledgment every non-login, non-game service gets.
fn encode_generic_reply(rpc_id: u16) -> Bytes {
    let mut buf = BytesMut::with_capacity(3);
    buf.put_u16_le(rpc_id);
    buf.put_u8(0);
    buf.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::service::SERVICE_CHAT;

    fn header(service_id: u8, function_id: u8, rpc_id: u16, payload: &[u8]) -> Vec<u8> {
        let mut v = vec![service_id, function_id];
        v.extend_from_slice(&rpc_id.to_le_bytes());
        v.extend_from_slice(payload);
        v
    }

    #[test]
    fn too_short_frame_yields_no_action() {
        assert!(matches!(dispatch(&[1, 2, 3], "c"), Action::None));
    }

    #[test]
    fn login_service_yields_login_action() {
        let mut payload = vec![0u8; 14];
        payload[1] = 34;
        payload[6..14].copy_from_slice(&76_561_198_139_908_495u64.to_le_bytes());
        let frame = header(SERVICE_LOGIN, 0, 2, &payload);
        match dispatch(&frame, "c") {
            Action::Login { rpc_id, identity } => {
                assert_eq!(rpc_id, 2);
                assert_eq!(identity.source_id, "76561198139908495");
            }
            _ => panic!("expected Login action"),
        }
    }

    #[test]
    fn game_service_never_replies() {
        let frame = header(SERVICE_GAME, 0, 0, &[]);
        assert!(matches!(dispatch(&frame, "c"), Action::None));
    }

    #[test]
    fn game_service_never_replies_for_unknown_function() {
        let frame = header(SERVICE_GAME, 5, 0, &[]);
        assert!(matches!(dispatch(&frame, "c"), Action::None));
    }

    #[test]
    fn generic_service_replies_with_rpc_id_and_status() {
        let frame = header(SERVICE_CHAT, 0, 42, &[]);
        match dispatch(&frame, "c") {
            Action::GenericReply(bytes) => {
                assert_eq!(bytes.len(), 3);
                assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]), 42);
                assert_eq!(bytes[2], 0);
            }
            _ => panic!("expected GenericReply action"),
        }
    }

    #[test]
    fn cards_service_inbound_frames_are_ignored() {
        let frame = header(SERVICE_CARDS, 0, 1, &[]);
        assert!(matches!(dispatch(&frame, "c"), Action::None));
    }
}
