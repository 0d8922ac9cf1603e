//! The `logic_main` card: ladder/leveling/avatar configuration.

use bytes::{BufMut, BytesMut};

use crate::protocol::card::bonuses::{write_bonuses, Bonuses};
use crate::protocol::card::price::{write_price, Price};
use crate::protocol::card::reward::{write_reward, Reward};
use crate::protocol::primitive::{write_varint, write_varint_string};

pub const CATEGORY: u8 = 0x15;
pub const ID: &str = "logic_main";

/// The full `logic_main` catalogue entry, hardcoded to the reference
/// server's default values.
pub fn default_card() -> LogicMain {
    LogicMain {
        ladder_top_size: 100,
        max_best_scores: 10,
        player_name_max_size: 20,
        horse_name_max_size: 20,
        level_up_bonus: Reward::new(100, 1, 0, 25, &["fred"]),
        challenge_win: Reward::new(100, 0, 100, 25, &["baguette"]),
        levels_xp: vec![100, 250, 500, 1000, 2000, 4000, 8000, 16000, 32000, 64000],
        skill_points_for_level_up: 1.0,
        change_avatar: Price::no_sale(100, 0),
        flags: vec!["snow".to_string()],
        premium: Bonuses {
            skill_tickets_rate: 1.5,
            xp_rate: 1.2,
            loot_rate: 2.0,
            ap_cost_rate: 1.0,
            ap_restore_rate: 100.0,
            ap_max: 10_000,
            strength: 1,
            timing: 1,
            speed: 1,
            acceleration: 1,
            stamina: 1,
            obedience: 1,
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogicMain {
    pub ladder_top_size: i32,
    pub max_best_scores: i32,
    pub player_name_max_size: i32,
    pub horse_name_max_size: i32,
    pub level_up_bonus: Reward,
    pub challenge_win: Reward,
    pub levels_xp: Vec<i32>,
    pub skill_points_for_level_up: f32,
    pub change_avatar: Price,
    pub flags: Vec<String>,
    pub premium: Bonuses,
}

/// Write the card, including its category byte and ID, per
/// `Card.WriteVariant`.
///
/// A literal `FF F0` sentinel follows the flags list. It has no documented
/// meaning beyond matching a known-good client build — kept verbatim rather
/// than "fixed".
pub fn write(buf: &mut BytesMut, card: &LogicMain) {
    buf.put_u8(CATEGORY);
    write_varint_string(buf, ID);

    buf.put_i32_le(card.ladder_top_size);
    buf.put_i32_le(card.max_best_scores);
    buf.put_i32_le(card.player_name_max_size);
    buf.put_i32_le(card.horse_name_max_size);

    write_reward(buf, &card.level_up_bonus);
    write_reward(buf, &card.challenge_win);

    write_varint(buf, card.levels_xp.len() as u32);
    for xp in &card.levels_xp {
        buf.put_i32_le(*xp);
    }

    buf.put_f32_le(card.skill_points_for_level_up);

    write_price(buf, &card.change_avatar);

    write_varint(buf, card.flags.len() as u32);
    for flag in &card.flags {
        write_varint_string(buf, flag);
    }

    buf.put_u8(0xFF);
    buf.put_u8(0xF0);

    write_bonuses(buf, &card.premium);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_category_and_id() {
        let mut buf = BytesMut::new();
        write(&mut buf, &default_card());
        assert_eq!(buf[0], 0x15);
        assert_eq!(buf[1], 0x0A); // VarInt length of "logic_main"
        assert_eq!(&buf[2..12], b"logic_main");
    }

    #[test]
    fn contains_the_ff_f0_sentinel_after_flags() {
        let mut buf = BytesMut::new();
        write(&mut buf, &default_card());
        let pos = buf.windows(2).position(|w| w == [0xFF, 0xF0]);
        assert!(pos.is_some());
    }
}
