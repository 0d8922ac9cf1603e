//! Service identifiers and the header-ambiguity workaround.

/// Services are identified by a single byte, starting at 100.
pub const SERVICE_LOGIN: u8 = 100;
pub const SERVICE_CARDS: u8 = 101;
pub const SERVICE_DEBUG: u8 = 102;
pub const SERVICE_CHAT: u8 = 103;
pub const SERVICE_PADDOCK: u8 = 104;
pub const SERVICE_SOCIAL: u8 = 105;
pub const SERVICE_COURSE_EDITOR: u8 = 106;
pub const SERVICE_MATCH: u8 = 107;
pub const SERVICE_GAME: u8 = 108;
pub const SERVICE_PLAYER: u8 = 109;

/// Services routed through the generic "success, no payload" handler.
/// `SERVICE_CARDS` is excluded — the server is the sole producer of Cards
/// frames, so an inbound one is ignored rather than acknowledged.
pub const GENERIC_SERVICES: [u8; 7] = [
    SERVICE_DEBUG,
    SERVICE_CHAT,
    SERVICE_PADDOCK,
    SERVICE_SOCIAL,
    SERVICE_COURSE_EDITOR,
    SERVICE_MATCH,
    SERVICE_PLAYER,
];

fn is_known_service(id: u8) -> bool {
    matches!(
        id,
        SERVICE_LOGIN
            | SERVICE_CARDS
            | SERVICE_DEBUG
            | SERVICE_CHAT
            | SERVICE_PADDOCK
            | SERVICE_SOCIAL
            | SERVICE_COURSE_EDITOR
            | SERVICE_MATCH
            | SERVICE_GAME
            | SERVICE_PLAYER
    )
}

/// Resolve the service id and the byte offset of the message header.
///
/// Some clients prepend an extra two-byte wrapper before the ServiceID byte.
/// This inspects bytes `[0]` and `[2]`: if `[2]` is a known service id and
/// `[0]` is not, the cursor advances by two bytes. If `[0]` is a known
/// service id, it's used as-is. Otherwise this falls back to `[2]`.
///
/// This workaround should not be "fixed" without a live client to verify
/// against (see the open question in the design notes).
pub fn resolve_header(data: &[u8]) -> Option<(u8, usize)> {
    if data.len() < 3 {
        return None;
    }
    let first = data[0];
    let third = data[2];

    if is_known_service(third) && !is_known_service(first) {
        Some((third, 2))
    } else if is_known_service(first) {
        Some((first, 0))
    } else {
        Some((third, 2))
    }
}
