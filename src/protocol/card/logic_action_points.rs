//! The `logic_action_points` card: stamina-style action point economy.

use bytes::{BufMut, BytesMut};

use crate::protocol::card::bonuses::{write_bonuses, Bonuses};
use crate::protocol::primitive::write_varint_string;

pub const CATEGORY: u8 = 0x16;
pub const ID: &str = "logic_action_points";

pub fn default_card() -> LogicActionPoints {
    LogicActionPoints {
        max_value: 100,
        practice_reduce: 5,
        rm_reduce: 10,
        restore_rate: 1,
        restore_interval: 300,
        paddock_reduce: 2,
        paddock_reduce_interval: 600,
        buff_threshold: 80.0,
        buff_bonuses: Bonuses {
            skill_tickets_rate: 1.2,
            xp_rate: 1.1,
            loot_rate: 1.8,
            ap_cost_rate: 0.9,
            ap_restore_rate: 120.0,
            ap_max: 12_000,
            strength: 2,
            timing: 2,
            speed: 2,
            acceleration: 2,
            stamina: 2,
            obedience: 2,
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogicActionPoints {
    pub max_value: u32,
    pub practice_reduce: u32,
    pub rm_reduce: u32,
    pub restore_rate: u32,
    pub restore_interval: u32,
    pub paddock_reduce: u32,
    pub paddock_reduce_interval: u32,
    pub buff_threshold: f32,
    pub buff_bonuses: Bonuses,
}

pub fn write(buf: &mut BytesMut, card: &LogicActionPoints) {
    buf.put_u8(CATEGORY);
    write_varint_string(buf, ID);

    buf.put_u32_le(card.max_value);
    buf.put_u32_le(card.practice_reduce);
    buf.put_u32_le(card.rm_reduce);
    buf.put_u32_le(card.restore_rate);
    buf.put_u32_le(card.restore_interval);
    buf.put_u32_le(card.paddock_reduce);
    buf.put_u32_le(card.paddock_reduce_interval);
    buf.put_f32_le(card.buff_threshold);

    buf.put_u8(0xFF);
    buf.put_u8(0xF0);

    write_bonuses(buf, &card.buff_bonuses);
}
