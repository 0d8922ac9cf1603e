//! The `logic_chat` card: chat rate limits and the "star players" roster.

use bytes::{BufMut, BytesMut};

use crate::protocol::primitive::{write_varint, write_varint_string};

pub const CATEGORY: u8 = 0x1E;
pub const ID: &str = "logic_chat";

#[derive(Debug, Clone, PartialEq)]
pub struct LogicChat {
    pub message_count_limit: i32,
    pub message_time_limit: f32,
    pub spam_ban_time: f32,
    pub star_players: Vec<u32>,
}

/// Build the card. `star_players` should be every known player id; callers
/// fall back to `[1]` when the identity store is empty.
pub fn default_card(star_players: Vec<u32>) -> LogicChat {
    let star_players = if star_players.is_empty() {
        vec![1]
    } else {
        star_players
    };
    LogicChat {
        message_count_limit: 10,
        message_time_limit: 10.0,
        spam_ban_time: 300.0,
        star_players,
    }
}

pub fn write(buf: &mut BytesMut, card: &LogicChat) {
    buf.put_u8(CATEGORY);
    write_varint_string(buf, ID);

    buf.put_i32_le(card.message_count_limit);
    buf.put_f32_le(card.message_time_limit);
    buf.put_f32_le(card.spam_ban_time);

    write_varint(buf, card.star_players.len() as u32);
    for player_id in &card.star_players {
        buf.put_u32_le(*player_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_star_player_when_empty() {
        let card = default_card(vec![]);
        assert_eq!(card.star_players, vec![1]);
    }

    #[test]
    fn encodes_star_players_as_varint_count_plus_u32_list() {
        let card = default_card(vec![7, 9]);
        let mut buf = BytesMut::new();
        write(&mut buf, &card);
        let tail = &buf[buf.len() - 9..];
        assert_eq!(tail[0], 2);
        assert_eq!(u32::from_le_bytes(tail[1..5].try_into().unwrap()), 7);
        assert_eq!(u32::from_le_bytes(tail[5..9].try_into().unwrap()), 9);
    }
}
