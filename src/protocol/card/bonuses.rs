//! The `Bonuses` inline record — no length prefix of its own.

use bytes::{BufMut, BytesMut};

/// Premium/buff multipliers and horse-stat bonuses attached to a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bonuses {
    pub skill_tickets_rate: f32,
    pub xp_rate: f32,
    pub loot_rate: f32,
    pub ap_cost_rate: f32,
    pub ap_restore_rate: f32,
    pub ap_max: i32,
    pub strength: i32,
    pub timing: i32,
    pub speed: i32,
    pub acceleration: i32,
    pub stamina: i32,
    pub obedience: i32,
}

/// Write a `Bonuses`: 5×f32 LE rate fields, then 7×i32 LE stat fields.
pub fn write_bonuses(buf: &mut BytesMut, bonuses: &Bonuses) {
    buf.put_f32_le(bonuses.skill_tickets_rate);
    buf.put_f32_le(bonuses.xp_rate);
    buf.put_f32_le(bonuses.loot_rate);
    buf.put_f32_le(bonuses.ap_cost_rate);
    buf.put_f32_le(bonuses.ap_restore_rate);
    buf.put_i32_le(bonuses.ap_max);
    buf.put_i32_le(bonuses.strength);
    buf.put_i32_le(bonuses.timing);
    buf.put_i32_le(bonuses.speed);
    buf.put_i32_le(bonuses.acceleration);
    buf.put_i32_le(bonuses.stamina);
    buf.put_i32_le(bonuses.obedience);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_rates_then_stats_in_order() {
        let bonuses = Bonuses {
            skill_tickets_rate: 1.5,
            xp_rate: 1.2,
            loot_rate: 2.0,
            ap_cost_rate: 1.0,
            ap_restore_rate: 100.0,
            ap_max: 10000,
            strength: 1,
            timing: 1,
            speed: 1,
            acceleration: 1,
            stamina: 1,
            obedience: 1,
        };
        let mut buf = BytesMut::new();
        write_bonuses(&mut buf, &bonuses);
        assert_eq!(buf.len(), 5 * 4 + 7 * 4);
        assert_eq!(f32::from_le_bytes(buf[0..4].try_into().unwrap()), 1.5);
        assert_eq!(i32::from_le_bytes(buf[20..24].try_into().unwrap()), 10000);
        assert_eq!(i32::from_le_bytes(buf[48..52].try_into().unwrap()), 1);
    }
}
