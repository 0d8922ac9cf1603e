//! Login handshake: parsing the authorization blob and encoding replies.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::warn;

use crate::protocol::primitive::write_u32le_string;
use crate::protocol::service::SERVICE_LOGIN;

/// Expected protocol version byte. A mismatch is logged, not fatal.
const EXPECTED_PROTOCOL_VERSION: u8 = 34;

/// Minimum Steam64 id considered plausible; anything lower falls back to a
/// synthesized identity instead of trusting the raw bytes.
const MIN_PLAUSIBLE_STEAM_ID: u64 = 76_561_197_960_265_728;

/// Identity resolved from a login request, ready to hand to the identity
/// store's get-or-create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginIdentity {
    pub source_type: &'static str,
    pub source_id: String,
    pub access_token_hex: String,
}

/// Parse a login request payload (the bytes following ServiceID/FunctionID/
/// RPCID). Never fails outright — a malformed payload still yields a
/// synthesized identity so the connection can proceed (see the
/// `LoginParseFailure` policy).
pub fn parse_login_request(payload: &[u8], connection_tag: &str) -> LoginIdentity {
    match try_parse(payload) {
        Ok(identity) => identity,
        Err(reason) => {
            warn!(%reason, connection_tag, "login payload parse failed, synthesizing fallback identity");
            LoginIdentity {
                source_type: "Steam",
                source_id: format!("steam_error_{connection_tag}"),
                access_token_hex: String::new(),
            }
        }
    }
}

fn try_parse(payload: &[u8]) -> Result<LoginIdentity, String> {
    if payload.len() < 14 {
        return Err(format!(
            "payload too short for login structure: {} bytes",
            payload.len()
        ));
    }

    let protocol_version = payload[1];
    if protocol_version != EXPECTED_PROTOCOL_VERSION {
        warn!(
            protocol_version,
            expected = EXPECTED_PROTOCOL_VERSION,
            "unexpected login protocol version"
        );
    }

    let mut steam_id_bytes = [0u8; 8];
    steam_id_bytes.copy_from_slice(&payload[6..14]);
    let steam_id = u64::from_le_bytes(steam_id_bytes);

    let remaining = &payload[14..];
    let token_bytes: &[u8] = if remaining.len() >= 4 {
        let mut len_bytes = [0u8; 4];
        len_bytes.copy_from_slice(&remaining[0..4]);
        let potential_len = u32::from_le_bytes(len_bytes) as usize;
        if potential_len > 0 && potential_len < remaining.len() && potential_len < 10_000 {
            &remaining[4..4 + potential_len]
        } else {
            remaining
        }
    } else {
        remaining
    };

    let source_id = if steam_id < MIN_PLAUSIBLE_STEAM_ID {
        warn!(steam_id, "implausible steam id, using fallback source id");
        format!("steam_fallback_{steam_id}")
    } else {
        steam_id.to_string()
    };

    Ok(LoginIdentity {
        source_type: "Steam",
        source_id,
        access_token_hex: hex::encode(token_bytes),
    })
}

/// Encode a successful login reply: header + `{PlayerID, UserState,
/// AccessLevel}`.
pub fn encode_login_success(rpc_id: u16, player_id: u32, user_state: u8, access_level: u8) -> Bytes {
    let mut buf = BytesMut::with_capacity(11);
    buf.put_u8(SERVICE_LOGIN);
    buf.put_u8(0); // FunctionID = 0 (Login)
    buf.put_u16_le(rpc_id);
    buf.put_u8(0); // Status = success
    buf.put_u32_le(player_id);
    buf.put_u8(user_state);
    buf.put_u8(access_level);
    buf.freeze()
}

/// Encode a failed login reply: header with status 255, then the one place
/// in this protocol where a string uses a 4-byte length prefix.
pub fn encode_login_error(rpc_id: u16, message: &str) -> Bytes {
    let mut buf = BytesMut::with_capacity(10 + message.len());
    buf.put_u8(SERVICE_LOGIN);
    buf.put_u8(0);
    buf.put_u16_le(rpc_id);
    buf.put_u8(255);
    write_u32le_string(&mut buf, message);
    buf.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_payload(steam_id: u64, token: &[u8]) -> Vec<u8> {
        let mut payload = vec![0u8; 14];
        payload[1] = EXPECTED_PROTOCOL_VERSION;
        payload[6..14].copy_from_slice(&steam_id.to_le_bytes());
        payload.extend_from_slice(token);
        payload
    }

    #[test]
    fn parses_well_formed_login_with_empty_token() {
        let payload = login_payload(76_561_198_139_908_495, &[]);
        let identity = parse_login_request(&payload, "conn-1");
        assert_eq!(identity.source_type, "Steam");
        assert_eq!(identity.source_id, "76561198139908495");
        assert_eq!(identity.access_token_hex, "");
    }

    #[test]
    fn parses_raw_token_when_not_length_prefixed() {
        let payload = login_payload(76_561_198_139_908_495, &[1, 2, 3]);
        let identity = parse_login_request(&payload, "conn-1");
        assert_eq!(identity.access_token_hex, "010203");
    }

    #[test]
    fn parses_length_prefixed_token() {
        let mut payload = login_payload(76_561_198_139_908_495, &[]);
        payload.extend_from_slice(&2u32.to_le_bytes());
        payload.extend_from_slice(&[0xAB, 0xCD]);
        payload.extend_from_slice(&[0xFF, 0xFF]); // trailing garbage, ignored
        let identity = parse_login_request(&payload, "conn-1");
        assert_eq!(identity.access_token_hex, "abcd");
    }

    #[test]
    fn falls_back_on_short_payload() {
        let payload = vec![0u8; 5];
        let identity = parse_login_request(&payload, "conn-42");
        assert_eq!(identity.source_id, "steam_error_conn-42");
    }

    #[test]
    fn falls_back_on_implausible_steam_id() {
        let payload = login_payload(1, &[]);
        let identity = parse_login_request(&payload, "conn-1");
        assert_eq!(identity.source_id, "steam_fallback_1");
    }

    #[test]
    fn success_reply_matches_literal_scenario() {
        let bytes = encode_login_success(0x0002, 1, 1, 0);
        assert_eq!(
            &bytes[..],
            &[0x64, 0x00, 0x02, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00]
        );
    }

    #[test]
    fn error_reply_uses_four_byte_length_prefix() {
        let bytes = encode_login_error(7, "boom");
        assert_eq!(bytes[0], SERVICE_LOGIN);
        assert_eq!(bytes[4], 255);
        assert_eq!(&bytes[5..9], &4u32.to_le_bytes());
        assert_eq!(&bytes[9..], b"boom");
    }
}
