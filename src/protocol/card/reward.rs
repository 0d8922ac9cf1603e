//! The `Reward` inline record — no length prefix of its own.
//!
//! Deliberately free functions rather than a `Writable` impl: a trait with
//! an auto length-prefixing `write` would be the wrong shape here, since
//! rewards are nested inline inside a card's own fields with no length tag.

use bytes::{BufMut, BytesMut};

use crate::protocol::crc32;
use crate::protocol::primitive::{write_varint, BitField};

/// A reward grant: currency amounts plus a list of unlocked item IDs.
///
/// The money bit is always set in this protocol's card catalogue — every
/// reward grants at least a coin amount, even if it's zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reward {
    pub coins: i32,
    pub skill_tickets: i32,
    pub xp: i32,
    pub ap: i32,
    pub items: Vec<String>,
}

impl Reward {
    pub fn new(coins: i32, skill_tickets: i32, xp: i32, ap: i32, items: &[&str]) -> Self {
        Reward {
            coins,
            skill_tickets,
            xp,
            ap,
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Write a `Reward`: BitField(money always set) + 4×i32 LE + VarInt item
/// count + each item as its CRC32 hash (u32 LE).
pub fn write_reward(buf: &mut BytesMut, reward: &Reward) {
    let bits = BitField::from_bits(&[true]);
    bits.write(buf);
    buf.put_i32_le(reward.coins);
    buf.put_i32_le(reward.skill_tickets);
    buf.put_i32_le(reward.xp);
    buf.put_i32_le(reward.ap);
    write_varint(buf, reward.items.len() as u32);
    for item in &reward.items {
        buf.put_u32_le(crc32::hash(item));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_money_bit_and_item_hashes() {
        let reward = Reward::new(100, 1, 0, 25, &["fred"]);
        let mut buf = BytesMut::new();
        write_reward(&mut buf, &reward);

        assert_eq!(buf[0], 0x80);
        assert_eq!(i32::from_le_bytes(buf[1..5].try_into().unwrap()), 100);
        assert_eq!(i32::from_le_bytes(buf[5..9].try_into().unwrap()), 1);
        assert_eq!(i32::from_le_bytes(buf[9..13].try_into().unwrap()), 0);
        assert_eq!(i32::from_le_bytes(buf[13..17].try_into().unwrap()), 25);
        assert_eq!(buf[17], 1); // item count varint
        assert_eq!(
            u32::from_le_bytes(buf[18..22].try_into().unwrap()),
            crc32::hash("fred")
        );
        assert_eq!(buf.len(), 22);
    }

    #[test]
    fn empty_item_list_still_writes_count_zero() {
        let reward = Reward::new(0, 0, 0, 0, &[]);
        let mut buf = BytesMut::new();
        write_reward(&mut buf, &reward);
        assert_eq!(buf.len(), 1 + 16 + 1);
        assert_eq!(buf[17], 0);
    }
}
