//! The `Price` inline record — no length prefix of its own.

use bytes::{BufMut, BytesMut};

use crate::protocol::primitive::BitField;

/// A shop price: a base cost plus an optional sale multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price {
    pub coins: i32,
    pub skill_tickets: i32,
    pub sale: Option<f32>,
}

impl Price {
    pub fn no_sale(coins: i32, skill_tickets: i32) -> Self {
        Price {
            coins,
            skill_tickets,
            sale: None,
        }
    }
}

/// Write a `Price`: BitField(sale present) + coins i32 LE + skill_tickets
/// i32 LE + sale f32 LE, present only when the sale bit is set.
pub fn write_price(buf: &mut BytesMut, price: &Price) {
    let bits = BitField::from_bits(&[price.sale.is_some()]);
    bits.write(buf);
    buf.put_i32_le(price.coins);
    buf.put_i32_le(price.skill_tickets);
    if let Some(sale) = price.sale {
        buf.put_f32_le(sale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_no_sale_without_trailing_float() {
        let price = Price::no_sale(100, 0);
        let mut buf = BytesMut::new();
        write_price(&mut buf, &price);
        assert_eq!(buf.len(), 9);
        assert_eq!(buf[0], 0x00);
    }

    #[test]
    fn encodes_sale_with_trailing_float() {
        let price = Price {
            coins: 100,
            skill_tickets: 0,
            sale: Some(0.5),
        };
        let mut buf = BytesMut::new();
        write_price(&mut buf, &price);
        assert_eq!(buf.len(), 13);
        assert_eq!(buf[0], 0x80);
        assert_eq!(f32::from_le_bytes(buf[9..13].try_into().unwrap()), 0.5);
    }
}
